//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the HTTP boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// The HTTP status for a non-2xx response, if that is what failed.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ApiError::Status(status) => Some(*status),
            ApiError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// True when the backend rejected the request for lack of permission.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(reqwest::StatusCode::FORBIDDEN)
    }
}

/// Client-side filter validation failures, raised before any request is sent.
///
/// The display text doubles as the user-facing alert message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FilterError {
    #[error("시작일은 종료일보다 이전이어야 합니다.")]
    StartAfterEnd,
}
