//! Custom Axum extractors

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use listkeeper_core::{Entity, ListError, ListId, TodoId};

use super::server::AppState;
use crate::session::SessionId;

/// Header set by asynchronous (AJAX) callers
pub const REQUESTED_WITH: &str = "x-requested-with";

/// Whether the request came from an asynchronous client rather than a form post
pub struct Xhr(pub bool);

impl<S> FromRequestParts<S> for Xhr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_xhr = parts
            .headers
            .get(REQUESTED_WITH)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.eq_ignore_ascii_case("XMLHttpRequest"));
        Ok(Self(is_xhr))
    }
}

/// List id from the `{id}` path segment.
///
/// An id that does not parse is treated like a list that does not exist:
/// the error is flashed and the client is sent back to the index.
pub struct ListPath(pub ListId);

impl FromRequestParts<Arc<AppState>> for ListPath {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let params = path_params(parts, state).await?;
        match params.get("id").and_then(|raw| raw.parse().ok()) {
            Some(id) => Ok(Self(id)),
            None => Err(missing_list(parts, state, ListError::not_found(Entity::List, 0)).await),
        }
    }
}

/// List and todo ids from `{id}` and `{todo_id}` path segments.
///
/// A todo id that does not parse flashes an error and redirects to its list.
pub struct TodoPath {
    pub list_id: ListId,
    pub todo_id: TodoId,
}

impl FromRequestParts<Arc<AppState>> for TodoPath {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let ListPath(list_id) = ListPath::from_request_parts(parts, state).await?;
        let params = path_params(parts, state).await?;
        let raw = params.get("todo_id").cloned().unwrap_or_default();

        match raw.parse() {
            Ok(todo_id) => Ok(Self { list_id, todo_id }),
            Err(_) => {
                let err = ListError::not_found(Entity::Todo, 0);
                Err(flash_and_redirect(parts, state, err, &format!("/lists/{}", list_id)).await)
            }
        }
    }
}

async fn path_params(
    parts: &mut Parts,
    state: &Arc<AppState>,
) -> Result<HashMap<String, String>, Response> {
    Path::<HashMap<String, String>>::from_request_parts(parts, state)
        .await
        .map(|Path(params)| params)
        .map_err(IntoResponse::into_response)
}

/// Flash `err` into the caller's session and redirect to the list index.
async fn missing_list(parts: &Parts, state: &AppState, err: ListError) -> Response {
    flash_and_redirect(parts, state, err, "/lists").await
}

async fn flash_and_redirect(parts: &Parts, state: &AppState, err: ListError, to: &str) -> Response {
    if let Some(id) = parts.extensions.get::<SessionId>().copied() {
        state
            .sessions
            .with(id, |data| data.flash.error = Some(err.to_string()))
            .await;
    }
    Redirect::to(to).into_response()
}
