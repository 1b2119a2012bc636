//! User-facing feedback for views.
//!
//! Every view used to keep its own ad-hoc error string; this is the one
//! shared shape a banner renders instead.

use serde::{Deserialize, Serialize};

use crate::ClientError;

/// What a view shows the user after an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "message")]
pub enum Feedback {
    /// Operation succeeded; optional confirmation text.
    Success(String),

    /// Input must be corrected before retrying. Shown inline.
    ValidationError(String),

    /// The backend could not be reached or rejected the call. Shown as a
    /// dismissable banner; the view stays usable.
    NetworkError(String),
}

impl Feedback {
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::NetworkError(msg.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Feedback::Success(m) | Feedback::ValidationError(m) | Feedback::NetworkError(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Feedback::Success(_))
    }
}

impl From<&ClientError> for Feedback {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Validation(msg) => Feedback::ValidationError(msg.clone()),
            other => Feedback::NetworkError(other.to_string()),
        }
    }
}
