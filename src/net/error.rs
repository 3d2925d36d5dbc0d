//! API failure type shared by every request helper.
//!
//! DESIGN
//! ======
//! Server error bodies carry a `detail` message; callers prefer it and
//! keep their own fallback copy, so failure text stays next to the action
//! that produced it instead of living in one generic table here.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response. `detail` holds the server-supplied message when
    /// the error body carried one.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A success response carried a body that did not decode.
    #[error("malformed response body: {0}")]
    Body(String),
}

impl ApiError {
    /// Server-supplied detail when present, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Pull the server's `detail` message out of an error body, if any.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(ToOwned::to_owned)
}
