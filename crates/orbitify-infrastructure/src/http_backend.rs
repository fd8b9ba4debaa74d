//! HttpMusicBackend - REST client for the Orbitify OAuth/proxy backend.
//!
//! The backend holds the Spotify client secret and forwards `/me` and
//! `/top-tracks` to the Spotify Web API on behalf of the bearer token.

use async_trait::async_trait;
use orbitify_core::backend::{BackendResponse, MusicBackend};
use orbitify_core::config::ClientConfig;
use orbitify_core::error::{OrbitifyError, Result};
use orbitify_core::TimeRange;
use reqwest::{Client, RequestBuilder};
use tracing::debug;

/// [`MusicBackend`] over HTTP.
#[derive(Clone)]
pub struct HttpMusicBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpMusicBackend {
    /// Creates a backend client for the configured base URL.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self.client.get(self.config.endpoint(path));
        match self.config.request_timeout() {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    /// Sends the request and reads the body whatever the status.
    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<BackendResponse> {
        let response = request.send().await.map_err(|e| {
            OrbitifyError::network(format!("Failed to reach {endpoint}: {e}"))
        })?;

        let status = response.status().as_u16();
        debug!(endpoint, status, "Backend responded");

        let body = response.text().await.map_err(|e| {
            OrbitifyError::network(format!("Failed to read {endpoint} response: {e}"))
        })?;

        Ok(BackendResponse::new(status, body))
    }
}

#[async_trait]
impl MusicBackend for HttpMusicBackend {
    async fn fetch_profile(&self, token: &str) -> Result<BackendResponse> {
        let request = self.get("me").query(&[("access_token", token)]);
        self.send(request, "/me").await
    }

    async fn fetch_top_tracks(&self, token: &str, range: TimeRange) -> Result<BackendResponse> {
        let request = self
            .get("top-tracks")
            .query(&[("access_token", token), ("time_range", range.as_str())]);
        self.send(request, "/top-tracks").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_target_configured_backend() {
        let backend = HttpMusicBackend::new(ClientConfig::with_backend_url("http://localhost:8888/"));
        let request = backend
            .get("top-tracks")
            .query(&[("access_token", "tok"), ("time_range", TimeRange::LongTerm.as_str())])
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8888/top-tracks?access_token=tok&time_range=long_term"
        );
        assert!(request.timeout().is_none());
    }

    #[test]
    fn test_timeout_applied_when_configured() {
        let config = ClientConfig {
            request_timeout_secs: Some(5),
            ..ClientConfig::with_backend_url("http://localhost:8888")
        };
        let request = HttpMusicBackend::new(config).get("me").build().unwrap();
        assert_eq!(request.timeout(), Some(&std::time::Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // port 9 (discard) on loopback is not expected to accept HTTP
        let backend = HttpMusicBackend::new(ClientConfig {
            request_timeout_secs: Some(2),
            ..ClientConfig::with_backend_url("http://127.0.0.1:9")
        });
        let err = backend.fetch_profile("tok").await.unwrap_err();
        assert!(err.is_network(), "{err}");
    }
}
