//! Configuration service implementation.
//!
//! Loads [`ClientConfig`] from `config.toml` and layers environment
//! overrides on top. Priority: environment variables > config file > defaults.

use crate::paths::OrbitifyPaths;
use orbitify_core::config::ClientConfig;
use orbitify_core::error::{OrbitifyError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const ENV_BACKEND_URL: &str = "ORBITIFY_BACKEND_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "ORBITIFY_REQUEST_TIMEOUT_SECS";
pub const ENV_TIME_RANGE: &str = "ORBITIFY_TIME_RANGE";

/// Configuration service bound to one config file path.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses the platform default path (`~/.config/orbitify/config.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(OrbitifyPaths::config_file()?))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file (defaults if missing) and applies process environment overrides.
    pub fn load(&self) -> Result<ClientConfig> {
        let config = self.load_file()?;
        apply_env_overrides(config, |key| env::var(key).ok())
    }

    /// Loads the file only. A missing file yields the defaults.
    pub fn load_file(&self) -> Result<ClientConfig> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Config file not found, using defaults");
            return Ok(ClientConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        debug!(path = %self.path.display(), "Loaded config file");
        validate(config)
    }

    /// Writes `config` as TOML, creating parent directories.
    pub fn save(&self, config: &ClientConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(config)?)?;
        Ok(())
    }
}

/// Applies `ORBITIFY_*` overrides read through `lookup`.
pub fn apply_env_overrides<F>(mut config: ClientConfig, lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_BACKEND_URL) {
        debug!(url = %url, "Backend URL overridden from environment");
        config.backend_url = url;
    }

    if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
        let secs = raw.trim().parse::<u64>().map_err(|e| {
            OrbitifyError::config(format!("Invalid {ENV_REQUEST_TIMEOUT_SECS} '{raw}': {e}"))
        })?;
        config.request_timeout_secs = Some(secs);
    }

    if let Some(raw) = lookup(ENV_TIME_RANGE) {
        config.default_time_range = raw
            .parse()
            .map_err(|e| OrbitifyError::config(format!("Invalid {ENV_TIME_RANGE}: {e}")))?;
    }

    validate(config)
}

/// Rejects non-http(s) backends. A zero timeout from either source means no timeout.
fn validate(mut config: ClientConfig) -> Result<ClientConfig> {
    config.request_timeout_secs = config.request_timeout_secs.filter(|secs| *secs > 0);
    let url = config.base_url();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(OrbitifyError::config(format!(
            "backend_url must be an http(s) URL, got '{}'",
            config.backend_url
        )));
    }
    Ok(config)
}
