//! `NrkError` - error values returned by every API operation.
//!
//! HTTP-level failures are ordinary `Err` values. The three statuses the API
//! uses meaningfully (404, 429, 403) get dedicated variants; every other
//! status and every network fault is handed back as the `reqwest::Error`
//! the HTTP client produced.

use reqwest::StatusCode;
use thiserror::Error;

/// Default message for an upstream 404 when the call site does not supply one.
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "Tv Page doesn't exist";

/// Message carried by [`NrkError::RateLimited`].
pub const RATE_LIMITED_MESSAGE: &str = "Rate limit exceeded, try again later (429)";

/// Message carried by [`NrkError::AgeRestricted`].
pub const AGE_RESTRICTED_MESSAGE: &str = "This item is age restricted";

/// Errors returned by `NrkClient` operations.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum NrkError {
    /// Upstream answered 404.
    #[error("{0}")]
    NotFound(String),

    /// Upstream answered 429.
    #[error("{0}")]
    RateLimited(String),

    /// Upstream answered 403.
    #[error("{0}")]
    AgeRestricted(String),

    /// A program or series identifier failed validation. No request was sent.
    #[error("{0}")]
    InvalidIdentifier(String),

    /// A search query exceeded the maximum length. No request was sent.
    #[error("{0}")]
    QueryTooLong(String),

    /// Any other argument rejected before sending.
    #[error("{0}")]
    InvalidArgument(String),

    /// The request URL could not be parsed.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Unmapped HTTP status or network-level failure, as reported by the HTTP client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A 2xx body did not deserialize into the type requested via `request_json`.
    #[error("failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fieldless discriminant of [`NrkError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::module_name_repetitions)]
pub enum ErrorKind {
    /// See [`NrkError::NotFound`].
    NotFound,
    /// See [`NrkError::RateLimited`].
    RateLimited,
    /// See [`NrkError::AgeRestricted`].
    AgeRestricted,
    /// See [`NrkError::InvalidIdentifier`].
    InvalidIdentifier,
    /// See [`NrkError::QueryTooLong`].
    QueryTooLong,
    /// See [`NrkError::InvalidArgument`].
    InvalidArgument,
    /// See [`NrkError::InvalidUrl`].
    InvalidUrl,
    /// See [`NrkError::Transport`].
    Transport,
    /// See [`NrkError::Decode`].
    Decode,
}

impl NrkError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::RateLimited(_) => ErrorKind::RateLimited,
            Self::AgeRestricted(_) => ErrorKind::AgeRestricted,
            Self::InvalidIdentifier(_) => ErrorKind::InvalidIdentifier,
            Self::QueryTooLong(_) => ErrorKind::QueryTooLong,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::InvalidUrl(_) => ErrorKind::InvalidUrl,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Returns the HTTP status behind this error, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND),
            Self::RateLimited(_) => Some(StatusCode::TOO_MANY_REQUESTS),
            Self::AgeRestricted(_) => Some(StatusCode::FORBIDDEN),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Maps an error status to its dedicated variant.
    ///
    /// Returns `None` for statuses that are passed through unchanged.
    pub(crate) fn from_status(status: StatusCode, not_found_message: &str) -> Option<Self> {
        match status {
            StatusCode::NOT_FOUND => Some(Self::NotFound(String::from(not_found_message))),
            StatusCode::TOO_MANY_REQUESTS => {
                Some(Self::RateLimited(String::from(RATE_LIMITED_MESSAGE)))
            }
            StatusCode::FORBIDDEN => Some(Self::AgeRestricted(String::from(AGE_RESTRICTED_MESSAGE))),
            _ => None,
        }
    }
}

/// Result alias for API operations.
pub type Result<T> = std::result::Result<T, NrkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_404_uses_call_site_message() {
        // Arrange & Act
        let err = NrkError::from_status(StatusCode::NOT_FOUND, "Program not found");

        // Assert
        assert!(matches!(err, Some(NrkError::NotFound(ref m)) if m == "Program not found"));
    }

    #[test]
    fn test_from_status_429() {
        // Arrange & Act
        let err = NrkError::from_status(StatusCode::TOO_MANY_REQUESTS, DEFAULT_NOT_FOUND_MESSAGE);

        // Assert
        assert!(matches!(
            err,
            Some(NrkError::RateLimited(ref m)) if m == "Rate limit exceeded, try again later (429)"
        ));
    }

    #[test]
    fn test_from_status_403() {
        // Arrange & Act
        let err = NrkError::from_status(StatusCode::FORBIDDEN, DEFAULT_NOT_FOUND_MESSAGE);

        // Assert
        assert!(matches!(
            err,
            Some(NrkError::AgeRestricted(ref m)) if m == "This item is age restricted"
        ));
    }

    #[test]
    fn test_from_status_unmapped_is_none() {
        // Arrange
        let statuses = [
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
        ];

        // Act & Assert
        for status in statuses {
            assert!(NrkError::from_status(status, DEFAULT_NOT_FOUND_MESSAGE).is_none());
        }
    }

    #[test]
    fn test_kind_and_status() {
        // Arrange
        let err = NrkError::QueryTooLong(String::from("Query too long, max 30 characters"));

        // Act & Assert
        assert_eq!(err.kind(), ErrorKind::QueryTooLong);
        assert_eq!(err.status(), None);
        assert_eq!(
            NrkError::NotFound(String::new()).status(),
            Some(StatusCode::NOT_FOUND)
        );
    }

    #[test]
    fn test_display_is_bare_message() {
        // Arrange
        let err = NrkError::AgeRestricted(String::from(AGE_RESTRICTED_MESSAGE));

        // Act & Assert
        assert_eq!(err.to_string(), "This item is age restricted");
    }
}
