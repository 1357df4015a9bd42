//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is server-rendered. Step pages and the fragments swapped in by
//! boosted form posts come from the same template set, so a client without
//! JavaScript walks the wizard through 303 redirects while an htmx client
//! stays on one page.

pub mod form;
pub mod htmx;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::error::status_text_response;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(form::home))
        // Static segment wins over `{section}`.
        .route("/form/submitted", get(form::form_submitted))
        .route("/form/{section}", get(form::form_page).post(form::form_section))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> Response {
    status_text_response(StatusCode::NOT_FOUND)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
