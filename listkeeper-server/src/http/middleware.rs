//! Session cookie middleware

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use super::server::AppState;
use crate::session::SessionId;

/// Attach a [`SessionId`] to every request, creating a session when the
/// cookie is missing or stale, and hand new sessions their cookie.
pub async fn session(State(state): State<Arc<AppState>>, mut req: Request, next: Next) -> Response {
    let presented = SessionId::from_headers(req.headers());
    let (id, is_new) = state.sessions.resolve(presented).await;
    req.extensions_mut().insert(id);

    let mut response = next.run(req).await;

    if is_new {
        match HeaderValue::from_str(&id.cookie(state.cookie_secure)) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(err) => tracing::error!("invalid session cookie header: {}", err),
        }
    }

    response
}
