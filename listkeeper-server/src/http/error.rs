//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes. HTML
//! routes handle validation and missing lists themselves (re-render or
//! redirect) and only fall back to this for caller bugs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use listkeeper_core::{Entity, ListError};
use serde_json::json;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Name validation failed (422)
    Validation(ListError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ListError> for ApiError {
    fn from(e: ListError) -> Self {
        match e {
            ListError::NotFound { entity, id } => Self::NotFound {
                resource: match entity {
                    Entity::List => "list",
                    Entity::Todo => "todo",
                },
                id: id.to_string(),
            },
            _ => Self::Validation(e),
        }
    }
}
