//! Authentication session held by the pipeline.

use serde::{Deserialize, Serialize};

/// Bearer token plus the last user-facing error message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token from the OAuth redirect.
    pub token: Option<String>,
    /// Human-readable error or informational message.
    pub error: Option<String>,
}

impl Session {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            error: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }

    /// Clears token and error.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Shortens a token for logs: first 10 characters followed by `...`.
pub fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(10).collect();
    format!("{prefix}...")
}
