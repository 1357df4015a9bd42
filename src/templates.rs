//! Template renderer.
//!
//! DESIGN
//! ======
//! Every `*.hbs` file in the templates directory is registered under its file
//! stem, so `form-one.hbs` is the view `form-one`. Handlebars resolves
//! partials against the same registry, which lets page templates pull in
//! their fragment with `{{> form-one}}` and wrap it in `{{#> layout}}`.
//!
//! The registry is built once at startup and never mutated afterwards.
//! `Templates` is an `Arc` handle, so cloning it into handlers is cheap and
//! concurrent renders only take shared references.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use handlebars::Handlebars;
use serde::Serialize;

pub const TEMPLATE_EXTENSION: &str = "hbs";

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("invalid template pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot read template entry: {0}")]
    Entry(#[from] glob::GlobError),

    #[error("cannot register template {path:?}: {source}")]
    Register {
        path: PathBuf,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("no *.hbs templates found in {0:?}")]
    Empty(PathBuf),

    #[error("rendering view {view:?} failed: {source}")]
    Render {
        view: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

/// Shared, read-only handle to the compiled template set.
#[derive(Clone)]
pub struct Templates {
    registry: Arc<Handlebars<'static>>,
}

impl Templates {
    /// Compile every template in `dir`.
    ///
    /// # Errors
    ///
    /// Fails if the directory holds no templates or any template does not
    /// parse.
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        let pattern = format!(
            "{}/*.{TEMPLATE_EXTENSION}",
            glob::Pattern::escape(&dir.to_string_lossy())
        );
        let paths = glob::glob(&pattern).map_err(|source| TemplateError::Pattern { pattern: pattern.clone(), source })?;

        let mut registry = Handlebars::new();
        for entry in paths {
            let path = entry?;
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping template with non-UTF-8 name");
                continue;
            };
            registry
                .register_template_file(name, &path)
                .map_err(|source| TemplateError::Register { path: path.clone(), source: Box::new(source) })?;
            tracing::debug!(view = name, path = %path.display(), "registered template");
        }

        if registry.get_templates().is_empty() {
            return Err(TemplateError::Empty(dir.to_path_buf()));
        }

        Ok(Self { registry: Arc::new(registry) })
    }

    #[must_use]
    pub fn has_view(&self, view: &str) -> bool {
        self.registry.has_template(view)
    }

    /// Number of registered views, partials included.
    #[must_use]
    pub fn view_count(&self) -> usize {
        self.registry.get_templates().len()
    }

    /// Render `view` with `data` as its context.
    ///
    /// # Errors
    ///
    /// Fails if the view is not registered or rendering it fails. Output is
    /// never partially returned.
    pub fn render<T: Serialize>(&self, view: &str, data: &T) -> Result<String, TemplateError> {
        self.registry
            .render(view, data)
            .map_err(|source| TemplateError::Render { view: view.to_string(), source: Box::new(source) })
    }
}

#[cfg(test)]
#[path = "templates_test.rs"]
mod tests;
