//! htmx request/response headers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use crate::wizard::RequestMode;

pub const HX_REQUEST: &str = "hx-request";
pub const HX_BOOSTED: &str = "hx-boosted";
pub const HX_REDIRECT: &str = "hx-redirect";

/// Request mode read from `HX-Request` / `HX-Boosted`.
/// Use as a handler parameter; never rejects.
#[derive(Debug, Clone, Copy)]
pub struct HxHeaders(pub RequestMode);

impl HxHeaders {
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self(RequestMode { fragment: header_is_true(headers, HX_REQUEST), boosted: header_is_true(headers, HX_BOOSTED) })
    }
}

impl<S> FromRequestParts<S> for HxHeaders
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// Only the exact value `true` counts.
fn header_is_true(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == "true")
}
