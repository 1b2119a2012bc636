//! Error surface of the HTTP client.

use ecoobra_core::{ClientError, Feedback};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection,
    /// timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status. `detail` carries the
    /// backend's own message when its error body had one.
    #[error("backend error ({status}): {detail}")]
    Http { status: u16, detail: String },

    /// The response body was not the JSON shape we expected.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The caller cancelled the request before it finished.
    #[error("request aborted")]
    Aborted,
}

impl ApiError {
    /// Status-carrying error with the backend's `detail` message extracted
    /// from its error body, falling back to the raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            detail: detail_message(body),
        }
    }

    /// User-facing feedback for this failure. Backend rejections show the
    /// backend's own message verbatim, without the status prefix.
    pub fn to_feedback(&self) -> Feedback {
        match self {
            ApiError::Http { detail, .. } => Feedback::network(detail.clone()),
            other => Feedback::from(&other.to_client_error()),
        }
    }

    /// Fold into the client-wide error taxonomy.
    pub fn to_client_error(&self) -> ClientError {
        match self {
            ApiError::Http { status, detail } => ClientError::http(*status, detail.clone()),
            other => ClientError::network(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Pull the `detail` field out of a backend error body.
///
/// The backend reports failures as `{"detail": "..."}`; anything else (HTML
/// error pages, empty bodies) falls back to the raw text or a generic line.
fn detail_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|v| v.as_str()) {
            return detail.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "request failed".to_string()
    } else {
        trimmed.to_string()
    }
}
