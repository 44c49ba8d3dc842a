//! List pages: index, create, show, rename, delete

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Form, Router,
};
use serde::Deserialize;

use super::{back_to_lists, invalid, page, redirect_with_message, todos};
use crate::http::extractors::{ListPath, Xhr};
use crate::http::server::AppState;
use crate::http::views;
use crate::session::SessionId;

/// Create/rename form body
#[derive(Deserialize)]
pub struct ListNameForm {
    #[serde(default)]
    pub list_name: String,
}

/// GET /
async fn root() -> Redirect {
    Redirect::to("/lists")
}

/// GET /lists - all lists, incomplete first
async fn index(State(state): State<Arc<AppState>>, Extension(session): Extension<SessionId>) -> Response {
    state
        .sessions
        .with(session, |data| {
            let body = views::lists_page(data.lists.lists());
            page(&mut data.flash, "Lists", &body)
        })
        .await
}

/// GET /lists/new
async fn new_list(State(state): State<Arc<AppState>>, Extension(session): Extension<SessionId>) -> Response {
    state
        .sessions
        .with(session, |data| page(&mut data.flash, "New List", &views::new_list_page("")))
        .await
}

/// POST /lists/new
async fn create_list(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<ListNameForm>,
) -> Response {
    let name = form.list_name.trim();

    state
        .sessions
        .with(session, |data| match data.lists.create_list(name) {
            Ok(list_id) => {
                tracing::info!(list_id, "List created");
                redirect_with_message(data, "The list has been created.", "/lists")
            }
            Err(err) => invalid(&mut data.flash, &err, "New List", &views::new_list_page(name)),
        })
        .await
}

/// GET /lists/{id}
async fn show_list(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    ListPath(list_id): ListPath,
) -> Response {
    state
        .sessions
        .with(session, |data| match data.lists.find(list_id) {
            Ok(list) => {
                let body = views::list_page(list, "");
                page(&mut data.flash, &list.name, &body)
            }
            Err(err) => back_to_lists(data, err),
        })
        .await
}

/// GET /lists/{id}/edit
async fn edit_list(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    ListPath(list_id): ListPath,
) -> Response {
    state
        .sessions
        .with(session, |data| match data.lists.find(list_id) {
            Ok(list) => {
                let body = views::edit_list_page(list, &list.name);
                page(&mut data.flash, "Edit List", &body)
            }
            Err(err) => back_to_lists(data, err),
        })
        .await
}

/// POST /lists/{id}/edit
async fn rename_list(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    ListPath(list_id): ListPath,
    Form(form): Form<ListNameForm>,
) -> Response {
    let name = form.list_name.trim();

    state
        .sessions
        .with(session, |data| {
            let err = match data.lists.rename_list(list_id, name) {
                Ok(()) => {
                    tracing::info!(list_id, "List renamed");
                    return redirect_with_message(
                        data,
                        "The list has been updated.",
                        &format!("/lists/{}", list_id),
                    );
                }
                Err(err) => err,
            };

            if !err.is_validation() {
                return back_to_lists(data, err);
            }
            match data.lists.find(list_id) {
                Ok(list) => {
                    let body = views::edit_list_page(list, name);
                    invalid(&mut data.flash, &err, "Edit List", &body)
                }
                Err(missing) => back_to_lists(data, missing),
            }
        })
        .await
}

/// POST /lists/{id}/delete
///
/// Asynchronous callers get the index path back as the body instead of a redirect.
async fn delete_list(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    ListPath(list_id): ListPath,
    Xhr(is_xhr): Xhr,
) -> Response {
    state
        .sessions
        .with(session, |data| {
            if data.lists.delete_list(list_id) {
                tracing::info!(list_id, "List deleted");
            }
            if is_xhr {
                (StatusCode::OK, "/lists").into_response()
            } else {
                redirect_with_message(data, "The list has been deleted.", "/lists")
            }
        })
        .await
}

/// List routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/lists", get(index))
        .route("/lists/new", get(new_list).post(create_list))
        .route("/lists/{id}", get(show_list).post(todos::add_todo))
        .route("/lists/{id}/edit", get(edit_list).post(rename_list))
        .route("/lists/{id}/delete", post(delete_list))
}
