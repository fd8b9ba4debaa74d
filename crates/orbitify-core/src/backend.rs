//! Seam between the pipeline and the OAuth/proxy backend.

use crate::error::Result;
use crate::time_range::TimeRange;

/// Raw HTTP answer: status plus body text.
///
/// The pipeline decides what a status means per endpoint (a failed profile
/// fetch is tolerated, a failed track fetch is not), so backends hand back
/// every status instead of turning non-2xx into errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendResponse {
    pub status: u16,
    pub body: String,
}

impl BackendResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Backend endpoints used by the pipeline.
///
/// Implementations return `Err` only for transport failures; HTTP error
/// statuses come back as a [`BackendResponse`].
#[async_trait::async_trait]
pub trait MusicBackend: Send + Sync {
    /// `GET {backend}/me?access_token=<token>`
    async fn fetch_profile(&self, token: &str) -> Result<BackendResponse>;

    /// `GET {backend}/top-tracks?access_token=<token>&time_range=<range>`
    async fn fetch_top_tracks(&self, token: &str, range: TimeRange) -> Result<BackendResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(BackendResponse::ok("{}").is_success());
        assert!(BackendResponse::new(204, "").is_success());
        assert!(!BackendResponse::new(301, "").is_success());
        assert!(!BackendResponse::new(401, "expired").is_success());
    }
}
