//! Wizard routes: page loads and step-to-step form posts.

use axum::Form;
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use super::htmx::{HX_REDIRECT, HxHeaders};
use crate::error::AppError;
use crate::state::AppState;
use crate::wizard::{self, Action, FormFields, Outcome, Step, View};

/// `GET /` — landing page.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, View::Home)
}

/// `GET /form/{section}` — full page for a step. Any step may be loaded
/// directly.
pub async fn form_page(State(state): State<AppState>, Path(section): Path<String>) -> Result<Html<String>, AppError> {
    let step = parse_step(&section)?;
    render(&state, View::Page(step))
}

/// `GET /form/submitted` — confirmation page.
pub async fn form_submitted(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, View::Submitted)
}

/// `POST /form/{section}` — navigate from a step.
///
/// An unreadable body is treated as an empty form so it ends in 400 like any
/// other post without a usable action.
pub async fn form_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
    HxHeaders(mode): HxHeaders,
    form: Result<Form<FormFields>, FormRejection>,
) -> Result<Response, AppError> {
    let step = parse_step(&section)?;

    let fields = match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            tracing::debug!(%step, error = %rejection, "unreadable form body");
            FormFields::new()
        }
    };

    let action = Action::from_fields(step, &fields);
    let outcome = wizard::dispatch(step, action, mode);
    tracing::debug!(%step, ?action, boosted = mode.is_boosted(), ?outcome, "form navigation");

    respond(&state, step, outcome)
}

fn parse_step(section: &str) -> Result<Step, AppError> {
    section.parse::<Step>().map_err(|err| {
        tracing::warn!(error = %err, "request for unknown step");
        AppError::from(err)
    })
}

fn respond(state: &AppState, step: Step, outcome: Outcome) -> Result<Response, AppError> {
    match outcome {
        Outcome::Render(view) => Ok(render(state, view)?.into_response()),
        Outcome::Redirect(target) => Ok(Redirect::to(&target.path()).into_response()),
        Outcome::InlineRedirect(target) => Ok((StatusCode::OK, [(HX_REDIRECT, target.path())]).into_response()),
        Outcome::BadRequest => {
            tracing::warn!(%step, "no valid action for step");
            Err(AppError::BadRequest)
        }
    }
}

fn render(state: &AppState, view: View) -> Result<Html<String>, AppError> {
    let html = state.templates.render(&view.name(), &view.data())?;
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_step_accepts_known_sections() {
        assert_eq!(parse_step("two").ok(), Some(Step::Two));
    }

    #[test]
    fn parse_step_unknown_section_is_not_found() {
        let err = parse_step("submitted").unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
