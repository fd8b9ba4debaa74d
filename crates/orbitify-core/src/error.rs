//! Error types for the Orbitify client.

use thiserror::Error;

/// A shared error type for the entire Orbitify client.
///
/// Every failure inside a pipeline run ends up here before it is flattened into
/// the single human-readable error string exposed to the presentation layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrbitifyError {
    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The top-tracks payload was neither an array nor an object carrying one.
    #[error("Unexpected response format from backend")]
    UnexpectedFormat,

    /// Transport failure (connection refused, DNS, timeout, truncated body)
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// A time range value outside short_term/medium_term/long_term
    #[error("Invalid time range '{0}' (expected short_term, medium_term or long_term)")]
    InvalidTimeRange(String),
}

impl OrbitifyError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an Http error
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an Http error
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    /// Returns the HTTP status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for OrbitifyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for OrbitifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for OrbitifyError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for OrbitifyError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, OrbitifyError>`.
pub type Result<T> = std::result::Result<T, OrbitifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display_carries_status_and_body() {
        let err = OrbitifyError::http(502, "Bad Gateway");
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
        assert_eq!(err.status(), Some(502));
        assert!(err.is_http());
    }

    #[test]
    fn test_unexpected_format_display() {
        assert_eq!(
            OrbitifyError::UnexpectedFormat.to_string(),
            "Unexpected response format from backend"
        );
        assert_eq!(OrbitifyError::UnexpectedFormat.status(), None);
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: OrbitifyError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("Serialization error: JSON - "));
    }
}
