//! Album artwork probe over HTTP.

use async_trait::async_trait;
use orbitify_core::image_probe::ImageProber;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// An image is usable when the GET succeeds and, if the server names a
/// content type, it is `image/*`.
#[derive(Clone)]
pub struct HttpImageProber {
    client: Client,
    timeout: Duration,
}

impl HttpImageProber {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for HttpImageProber {
    fn default() -> Self {
        Self::new()
    }
}

/// Content-type check applied to successful responses.
pub(crate) fn is_image_content_type(content_type: Option<&str>) -> bool {
    content_type.is_none_or(|value| value.trim().to_ascii_lowercase().starts_with("image/"))
}

#[async_trait]
impl ImageProber for HttpImageProber {
    async fn probe(&self, url: &str) -> bool {
        let response = match self.client.get(url).timeout(self.timeout).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(url, error = %e, "Image request failed");
                return false;
            }
        };

        if !response.status().is_success() {
            debug!(url, status = response.status().as_u16(), "Image request rejected");
            return false;
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        is_image_content_type(content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_check() {
        assert!(is_image_content_type(None));
        assert!(is_image_content_type(Some("image/jpeg")));
        assert!(is_image_content_type(Some("Image/PNG")));
        assert!(!is_image_content_type(Some("text/html; charset=utf-8")));
    }

    #[tokio::test]
    async fn test_invalid_url_is_unusable() {
        let prober = HttpImageProber::new().with_timeout(Duration::from_secs(1));
        assert!(!prober.probe("not a url").await);
    }
}
