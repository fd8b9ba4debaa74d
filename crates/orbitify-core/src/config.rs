use crate::time_range::TimeRange;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hosted backend used when no URL is configured.
pub const DEFAULT_BACKEND_URL: &str = "https://spotify-solar-system-backend.onrender.com";

/// Client configuration passed to the pipeline's collaborators at construction.
///
/// Loaded from `config.toml` by the infrastructure layer; every field has a
/// default so a partial file is valid.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the OAuth/proxy backend, without a trailing slash.
    pub backend_url: String,
    /// Per-request timeout. `None` lets a hung request hang.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    /// Range selected when the pipeline starts.
    pub default_time_range: TimeRange,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: None,
            default_time_range: TimeRange::default(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration pointing at `backend_url`.
    pub fn with_backend_url(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            ..Self::default()
        }
    }

    /// Backend base URL with any trailing `/` removed.
    pub fn base_url(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }

    /// Joins an endpoint path such as `"me"` onto the backend URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    /// Navigation target that starts the OAuth flow.
    pub fn login_url(&self) -> String {
        self.endpoint("login")
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.default_time_range, TimeRange::ShortTerm);
    }

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        let config = ClientConfig::with_backend_url("http://localhost:8888/");
        assert_eq!(config.endpoint("me"), "http://localhost:8888/me");
        assert_eq!(config.endpoint("/top-tracks"), "http://localhost:8888/top-tracks");
        assert_eq!(config.login_url(), "http://localhost:8888/login");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str("request_timeout_secs = 15").unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
    }
}
