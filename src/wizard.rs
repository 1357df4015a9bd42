//! Form navigation dispatcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wizard is three fixed steps. Nothing about a visitor's progress is
//! stored: each POST names the step it came from (path segment) and the
//! button that was pressed (form field), and `dispatch` decides the next view
//! from that alone. Jumping straight to step three is allowed.
//!
//! DESIGN
//! ======
//! Boosted requests (both `HX-Request` and `HX-Boosted` set) get the next
//! step's fragment inline, or an `HX-Redirect` when leaving the wizard.
//! Everything else gets a 303 so plain form posts follow the same path.
//! `dispatch` matches every (step, action) pair explicitly; adding a step or
//! an action fails to compile until the table is extended.

use std::fmt;
use std::str::FromStr;

use serde_json::{Value, json};

/// Number of steps in the wizard.
#[allow(clippy::cast_possible_truncation)]
pub const STEP_COUNT: u8 = Step::ALL.len() as u8;

/// Decoded `application/x-www-form-urlencoded` body, in submission order.
/// Repeated names are kept; lookups see the first occurrence.
pub type FormFields = Vec<(String, String)>;

// =============================================================================
// STEP
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    One,
    Two,
    Three,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown form step {0:?}")]
pub struct UnknownStep(pub String);

impl Step {
    pub const ALL: [Step; 3] = [Step::One, Step::Two, Step::Three];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Two => "two",
            Self::Three => "three",
        }
    }

    /// 1-based position within the wizard.
    #[must_use]
    pub fn position(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    #[must_use]
    pub fn path(self) -> String {
        format!("/form/{}", self.as_str())
    }

    /// Actions accepted on this step, highest priority first.
    #[must_use]
    pub fn actions(self) -> &'static [Action] {
        match self {
            Self::One => &[Action::Next, Action::Cancel],
            Self::Two => &[Action::Next, Action::Prev],
            Self::Three => &[Action::Submit, Action::Prev],
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Step {
    type Err = UnknownStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one" => Ok(Self::One),
            "two" => Ok(Self::Two),
            "three" => Ok(Self::Three),
            other => Err(UnknownStep(other.to_string())),
        }
    }
}

// =============================================================================
// ACTION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Next,
    Prev,
    Cancel,
    Submit,
}

impl Action {
    /// Form field that carries this action. The submit button sends the same
    /// string as its value.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
            Self::Cancel => "cancel",
            Self::Submit => "submit",
        }
    }

    /// Pick the action a form post on `step` asked for.
    ///
    /// Only the step's own actions are considered. When several are present
    /// the first in `Step::actions` order wins. A repeated field is judged by
    /// its first value.
    #[must_use]
    pub fn from_fields(step: Step, fields: &FormFields) -> Option<Self> {
        step.actions()
            .iter()
            .copied()
            .find(|action| first_value(fields, action.field()).is_some_and(|value| value == action.field()))
    }
}

fn first_value<'a>(fields: &'a FormFields, name: &str) -> Option<&'a str> {
    fields.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
}

// =============================================================================
// REQUEST MODE
// =============================================================================

/// How the client wants the response delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestMode {
    /// `HX-Request: true`
    pub fragment: bool,
    /// `HX-Boosted: true`
    pub boosted: bool,
}

impl RequestMode {
    pub const CONVENTIONAL: Self = Self { fragment: false, boosted: false };
    pub const BOOSTED: Self = Self { fragment: true, boosted: true };

    #[must_use]
    pub fn is_boosted(self) -> bool {
        self.fragment && self.boosted
    }
}

// =============================================================================
// VIEWS AND TARGETS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    /// Full page for a step.
    Page(Step),
    /// Just the step's form, swapped into an existing page.
    Fragment(Step),
    Submitted,
}

impl View {
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Self::Home => "home".to_string(),
            Self::Page(step) => format!("page-form-{step}"),
            Self::Fragment(step) => format!("form-{step}"),
            Self::Submitted => "form-submitted".to_string(),
        }
    }

    /// Render context for the view.
    #[must_use]
    pub fn data(self) -> Value {
        match self {
            Self::Home | Self::Submitted => json!({ "total": STEP_COUNT }),
            Self::Page(step) | Self::Fragment(step) => json!({
                "step": step.as_str(),
                "position": step.position(),
                "total": STEP_COUNT,
            }),
        }
    }
}

/// Where a redirect sends the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Home,
    Step(Step),
    Submitted,
}

impl Target {
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Step(step) => step.path(),
            Self::Submitted => "/form/submitted".to_string(),
        }
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Render the view inline with status 200.
    Render(View),
    /// 303 See Other.
    Redirect(Target),
    /// 200 with `HX-Redirect`; the client script navigates.
    InlineRedirect(Target),
    /// The action is not valid for the step.
    BadRequest,
}

/// Decide the response for a form post on `step`.
#[must_use]
pub fn dispatch(step: Step, action: Option<Action>, mode: RequestMode) -> Outcome {
    use Action::{Cancel, Next, Prev, Submit};
    use Step::{One, Three, Two};

    let boosted = mode.is_boosted();
    match (step, action) {
        (One, Some(Next)) => move_to(Two, boosted),
        (One, Some(Cancel)) => leave(Target::Home, boosted),
        (Two, Some(Next)) => move_to(Three, boosted),
        (Two, Some(Prev)) => move_to(One, boosted),
        (Three, Some(Submit)) => leave(Target::Submitted, boosted),
        (Three, Some(Prev)) => move_to(Two, boosted),
        (One, Some(Prev | Submit)) | (Two, Some(Cancel | Submit)) | (Three, Some(Next | Cancel)) | (_, None) => {
            Outcome::BadRequest
        }
    }
}

/// Stay inside the wizard: swap in the fragment or redirect to the page.
fn move_to(step: Step, boosted: bool) -> Outcome {
    if boosted { Outcome::Render(View::Fragment(step)) } else { Outcome::Redirect(Target::Step(step)) }
}

/// Leave the wizard: a fragment swap can't change the URL, so boosted
/// clients are told to navigate themselves.
fn leave(target: Target, boosted: bool) -> Outcome {
    if boosted { Outcome::InlineRedirect(target) } else { Outcome::Redirect(target) }
}

#[cfg(test)]
#[path = "wizard_test.rs"]
mod tests;
