//! In-memory session storage
//!
//! Sessions are keyed by a random UUID carried in a cookie. Each session owns
//! exactly one [`ListStore`] plus one-shot flash messages. Nothing survives a
//! restart. Idle sessions expire after the configured TTL; sessions that
//! never stored anything expire after [`EMPTY_SESSION_TTL`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use listkeeper_core::ListStore;
use tokio::sync::Mutex;
use tokio::time::Instant;
use uuid::Uuid;

/// Name of the cookie holding the session id
pub const SESSION_COOKIE: &str = "listkeeper_session";

/// Idle limit for sessions holding no lists and no pending flash
pub const EMPTY_SESSION_TTL: Duration = Duration::from_secs(5 * 60);

/// Opaque session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Session id from the request's `Cookie` headers, if one parses.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| value.parse().ok())
    }

    /// `Set-Cookie` value for this session
    pub fn cookie(&self, secure: bool) -> String {
        let mut cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, self.0);
        if secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Messages shown once on the next rendered page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl Flash {
    /// Move the pending messages out, leaving the slots empty.
    pub fn take(&mut self) -> Flash {
        std::mem::take(self)
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.error.is_none()
    }
}

/// Everything one session owns
#[derive(Debug, Default)]
pub struct SessionData {
    pub lists: ListStore,
    pub flash: Flash,
}

struct SessionEntry {
    data: SessionData,
    last_seen: Instant,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            data: SessionData::default(),
            last_seen: Instant::now(),
        }
    }

    fn is_empty(&self) -> bool {
        self.data.lists.is_empty() && self.data.flash.is_empty()
    }

    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        let ttl = if self.is_empty() {
            ttl.min(EMPTY_SESSION_TTL)
        } else {
            ttl
        };
        now.duration_since(self.last_seen) >= ttl
    }
}

/// All live sessions
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionId, SessionEntry>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Resolve the id a request presented.
    ///
    /// Returns the id to use and whether a new session had to be created
    /// (no cookie, or the cookie named an unknown or expired session).
    pub async fn resolve(&self, presented: Option<SessionId>) -> (SessionId, bool) {
        let mut sessions = self.sessions.lock().await;
        let now = Instant::now();

        if let Some(id) = presented {
            if let Some(entry) = sessions.get_mut(&id) {
                if !entry.is_expired(now, self.ttl) {
                    entry.last_seen = now;
                    return (id, false);
                }
                sessions.remove(&id);
                tracing::debug!(session = %id, "session expired");
            }
        }

        let id = SessionId::random();
        sessions.insert(id, SessionEntry::new());
        tracing::debug!(session = %id, "session created");
        (id, true)
    }

    /// Run `f` against one session's data while holding the store lock.
    ///
    /// A session purged between [`resolve`](Self::resolve) and this call is
    /// recreated empty.
    pub async fn with<R>(&self, id: SessionId, f: impl FnOnce(&mut SessionData) -> R) -> R {
        let mut sessions = self.sessions.lock().await;
        let entry = sessions.entry(id).or_insert_with(SessionEntry::new);
        entry.last_seen = Instant::now();
        f(&mut entry.data)
    }

    /// Drop sessions idle for longer than their TTL. Returns how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        let mut sessions = self.sessions.lock().await;
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired(now, self.ttl));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}
