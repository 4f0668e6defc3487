//! # Common Error Types
//!
//! Consolidated error handling for the terminal application.
//!
//! ## Error Categories
//!
//! - [`ApiError`]: backend gateway failures, carrying the HTTP status
//!   when one was received
//! - [`AppError`]: synchronous-path failures (session persistence,
//!   input validation)
//!
//! Background tasks render errors to operator-facing strings before
//! sending them through the event channel; the structured types live at
//! the layer that produced them.

use thiserror::Error;

/// Failure reported by the backend gateway.
///
/// `status` is the HTTP status code of the response, or `None` when the
/// request never produced one (connection refused, timeout). `Display`
/// yields the operator-facing message, so callers that only show the
/// error can treat it as text while the status stays inspectable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    /// A failure below HTTP: the request never got an answer.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// A non-2xx answer (or an unreadable body) with its status code.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

/// Error type for the synchronous paths where an error travels via `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Persisted session error.
    ///
    /// Covers session file read/write failures and corrupt JSON content.
    #[error("Session error: {0}")]
    Session(String),

    /// Input validation error. Displayed verbatim next to the field.
    #[error("{0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Session(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Session(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failure_has_no_status() {
        let error = ApiError::transport("Network error: connection refused");
        assert_eq!(error.status, None);
        assert_eq!(error.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_http_failure_keeps_status_inspectable() {
        let denied = ApiError::http(401, "Token has expired");
        let conflict = ApiError::http(409, "Product name already in use");

        assert_eq!(denied.status, Some(401));
        assert_eq!(conflict.status, Some(409));
        // The rendered text is the server message alone.
        assert_eq!(conflict.to_string(), "Product name already in use");
    }
}
