//! Client error model.

use thiserror::Error;

/// Result type used across the client layers.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client-level error.
///
/// Keep this focused on the three failure classes every view handles:
/// validation (caught before any network call), network/HTTP (caught per
/// call site), and authorization (handled as a redirect, not a banner).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A required or malformed field was detected before submission.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Transport failure (DNS, connect, timeout, aborted socket).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The session is missing or the role is not allowed.
    #[error("unauthorized")]
    Unauthorized,

    /// Persisted session state could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
