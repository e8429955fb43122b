//! Error types for openrelay.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Result type alias for openrelay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Plain-text body returned for every relay failure.
pub const RELAY_ERROR_BODY: &str = "relay error";

/// Main error type for openrelay.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("failed to parse upstream response as JSON: {0}")]
    UpstreamBody(#[source] reqwest::Error),
}

impl IntoResponse for Error {
    /// Every failure on the relay path collapses to one generic signal:
    /// HTTP 500 with a fixed plain-text body. The underlying cause is
    /// logged server-side and never exposed to the caller.
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "relay request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, RELAY_ERROR_BODY).into_response()
    }
}
