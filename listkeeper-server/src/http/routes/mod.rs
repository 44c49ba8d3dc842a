//! Route handlers organized by resource

pub mod api;
pub mod health;
pub mod lists;
pub mod todos;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use listkeeper_core::ListError;

use super::views;
use crate::session::{Flash, SessionData};

/// Flash `err` and send the client back to the list index.
pub(crate) fn back_to_lists(data: &mut SessionData, err: ListError) -> Response {
    data.flash.error = Some(err.to_string());
    Redirect::to("/lists").into_response()
}

/// Flash a success message and redirect.
pub(crate) fn redirect_with_message(data: &mut SessionData, message: &str, to: &str) -> Response {
    data.flash.message = Some(message.to_owned());
    Redirect::to(to).into_response()
}

/// Render a page, consuming any pending flash messages.
pub(crate) fn page(flash: &mut Flash, title: &str, body: &str) -> Response {
    let flash = flash.take();
    Html(views::layout(title, &flash, body)).into_response()
}

/// Re-render a form page with a validation error.
pub(crate) fn invalid(flash: &mut Flash, err: &ListError, title: &str, body: &str) -> Response {
    let mut flash = flash.take();
    flash.error = Some(err.to_string());
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(views::layout(title, &flash, body)),
    )
        .into_response()
}
