//! Server-rendered three-step form wizard with htmx partial updates.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod templates;
pub mod wizard;
