//! listkeeper-server: HTTP layer over listkeeper-core
//!
//! Each browser gets a cookie-identified session holding its own
//! [`listkeeper_core::ListStore`]. Handlers resolve the session, run one core
//! operation under the session lock, then render HTML or redirect.

pub mod http;
pub mod session;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use session::{Flash, SessionData, SessionId, SessionStore};
