//! HTTP error responses.
//!
//! Errors answer with the bare status text, the way a plain form post
//! expects, not a JSON envelope.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::templates::TemplateError;
use crate::wizard::UnknownStep;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted action is not valid for the step.
    #[error("bad request")]
    BadRequest,

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl AppError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UnknownStep> for AppError {
    fn from(_: UnknownStep) -> Self {
        Self::NotFound
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Template(err) = &self {
            tracing::error!(error = %err, "template failure");
        }
        status_text_response(self.status())
    }
}

/// `<status text>\n` as `text/plain`.
#[must_use]
pub fn status_text_response(status: StatusCode) -> Response {
    let text = status.canonical_reason().unwrap_or("Error");
    (
        status,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        format!("{text}\n"),
    )
        .into_response()
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
