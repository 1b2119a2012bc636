//! Backend endpoint configuration.

/// Default backend origin for local development.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build from an explicit base URL. A trailing slash is stripped so that
    /// endpoint paths can always start with `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read `API_URL` from the environment, falling back to the local
    /// development backend.
    pub fn from_env() -> Self {
        let base_url = std::env::var("API_URL").unwrap_or_else(|_| {
            tracing::warn!("API_URL not set; using local dev backend");
            DEFAULT_API_URL.to_string()
        });
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path (`/api/...`).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
