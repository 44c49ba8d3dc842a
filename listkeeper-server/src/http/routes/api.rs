//! JSON API for programmatic callers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use listkeeper_core::{
    is_list_complete, sorted_lists, sorted_todos, todos_remaining_count, List, ListError, ListId,
    Todo,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::session::SessionId;

/// Create list request
#[derive(Deserialize)]
pub struct CreateListRequest {
    pub name: String,
}

/// List response, todos in display order
#[derive(Serialize)]
pub struct ListResponse {
    pub id: ListId,
    pub name: String,
    pub complete: bool,
    pub todos_remaining: usize,
    pub todos: Vec<Todo>,
}

impl From<&List> for ListResponse {
    fn from(list: &List) -> Self {
        Self {
            id: list.id,
            name: list.name.clone(),
            complete: is_list_complete(list),
            todos_remaining: todos_remaining_count(list),
            todos: sorted_todos(&list.todos).cloned().collect(),
        }
    }
}

/// GET /api/lists - the session's lists in display order
async fn list_lists(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
) -> Json<Vec<ListResponse>> {
    let lists = state
        .sessions
        .with(session, |data| {
            sorted_lists(data.lists.lists())
                .map(ListResponse::from)
                .collect::<Vec<_>>()
        })
        .await;
    Json(lists)
}

/// POST /api/lists - create a list
async fn create_list(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    Json(req): Json<CreateListRequest>,
) -> Result<(StatusCode, Json<ListResponse>), ApiError> {
    let created = state
        .sessions
        .with(session, |data| -> Result<ListResponse, ListError> {
            let id = data.lists.create_list(&req.name)?;
            data.lists.find(id).map(ListResponse::from)
        })
        .await?;

    tracing::info!(list_id = created.id, "List created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/lists/{id} - a non-numeric id is as missing as an unknown one
async fn get_list(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    Path(raw_id): Path<String>,
) -> Result<Json<ListResponse>, ApiError> {
    let list_id: ListId = raw_id.parse().map_err(|_| ApiError::NotFound {
        resource: "list",
        id: raw_id.clone(),
    })?;
    let list = state
        .sessions
        .with(session, |data| data.lists.find(list_id).map(ListResponse::from))
        .await?;
    Ok(Json(list))
}

/// API routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/lists", get(list_lists).post(create_list))
        .route("/api/lists/{id}", get(get_list))
}
