//! Todo actions within a list

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Extension, Form, Router,
};
use serde::Deserialize;

use super::{back_to_lists, invalid, redirect_with_message};
use crate::http::error::ApiError;
use crate::http::extractors::{ListPath, TodoPath, Xhr};
use crate::http::server::AppState;
use crate::http::views;
use crate::session::SessionId;

/// Add-todo form body
#[derive(Deserialize)]
pub struct TodoForm {
    #[serde(default)]
    pub todo: String,
}

/// Completion toggle form body
#[derive(Deserialize)]
pub struct CompletedForm {
    #[serde(default)]
    pub completed: String,
}

/// POST /lists/{id} - add a todo
pub(crate) async fn add_todo(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    ListPath(list_id): ListPath,
    Form(form): Form<TodoForm>,
) -> Response {
    let name = form.todo.trim();

    state
        .sessions
        .with(session, |data| {
            let list = match data.lists.find_mut(list_id) {
                Ok(list) => list,
                Err(err) => return back_to_lists(data, err),
            };

            match list.add_todo(name) {
                Ok(todo_id) => {
                    tracing::info!(list_id, todo_id, "Todo added");
                    redirect_with_message(data, "The todo was added.", &format!("/lists/{}", list_id))
                }
                Err(err) => {
                    let body = views::list_page(list, name);
                    invalid(&mut data.flash, &err, &list.name, &body)
                }
            }
        })
        .await
}

/// POST /lists/{id}/todos/{todo_id}/delete
///
/// Asynchronous callers get 204 No Content instead of a redirect.
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    TodoPath { list_id, todo_id }: TodoPath,
    Xhr(is_xhr): Xhr,
) -> Response {
    state
        .sessions
        .with(session, |data| {
            let list = match data.lists.find_mut(list_id) {
                Ok(list) => list,
                Err(err) => return back_to_lists(data, err),
            };

            if list.delete_todo(todo_id) {
                tracing::info!(list_id, todo_id, "Todo deleted");
            }
            if is_xhr {
                StatusCode::NO_CONTENT.into_response()
            } else {
                redirect_with_message(data, "The todo has been deleted.", &format!("/lists/{}", list_id))
            }
        })
        .await
}

/// POST /lists/{id}/todos/{todo_id} - mark complete (`completed=true`) or not
async fn update_todo(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    TodoPath { list_id, todo_id }: TodoPath,
    Form(form): Form<CompletedForm>,
) -> Response {
    let completed = form.completed == "true";

    state
        .sessions
        .with(session, |data| {
            let list = match data.lists.find_mut(list_id) {
                Ok(list) => list,
                Err(err) => return back_to_lists(data, err),
            };

            match list.set_todo_completed(todo_id, completed) {
                Ok(()) => {
                    tracing::info!(list_id, todo_id, completed, "Todo updated");
                    redirect_with_message(data, "The todo has been updated.", &format!("/lists/{}", list_id))
                }
                Err(err) => {
                    // The page never links to a todo it does not show
                    tracing::warn!(list_id, todo_id, "Completion toggle for unknown todo");
                    ApiError::from(err).into_response()
                }
            }
        })
        .await
}

/// POST /lists/{id}/complete_all
async fn complete_all(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    ListPath(list_id): ListPath,
) -> Response {
    state
        .sessions
        .with(session, |data| {
            let list = match data.lists.find_mut(list_id) {
                Ok(list) => list,
                Err(err) => return back_to_lists(data, err),
            };

            list.complete_all_todos();
            tracing::info!(list_id, "All todos completed");
            redirect_with_message(data, "All todos have been completed.", &format!("/lists/{}", list_id))
        })
        .await
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lists/{id}/complete_all", post(complete_all))
        .route("/lists/{id}/todos/{todo_id}", post(update_todo))
        .route("/lists/{id}/todos/{todo_id}/delete", post(delete_todo))
}
