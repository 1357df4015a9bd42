//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only thing it carries is the compiled template set, which is read-only
//! after startup. Wizard progress lives entirely in the request, so there is
//! no per-visitor state here.

use std::path::Path;

use crate::templates::{TemplateError, Templates};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; `Templates` is Arc-backed.
#[derive(Clone)]
pub struct AppState {
    pub templates: Templates,
}

impl AppState {
    #[must_use]
    pub fn new(templates: Templates) -> Self {
        Self { templates }
    }

    /// Build state from the templates in `dir`.
    ///
    /// # Errors
    ///
    /// Fails if the template set cannot be loaded.
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        let templates = Templates::load(dir)?;
        tracing::info!(dir = %dir.display(), count = templates.view_count(), "templates loaded");
        Ok(Self::new(templates))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
