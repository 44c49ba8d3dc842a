//! HTTP server layer
//!
//! Axum server with:
//! - Cookie sessions (middleware in [`middleware`])
//! - Server-rendered HTML views plus a small JSON API
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod views;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
