//! Path management for orbitify configuration files.
//!
//! ```text
//! ~/.config/orbitify/          # Config directory (platform config dir)
//! └── config.toml              # Client configuration
//! ```

use orbitify_core::OrbitifyError;
use std::path::PathBuf;

const APP_DIR: &str = "orbitify";
const CONFIG_FILE: &str = "config.toml";

pub struct OrbitifyPaths;

impl OrbitifyPaths {
    /// Returns the orbitify configuration directory, e.g. `~/.config/orbitify/`.
    pub fn config_dir() -> Result<PathBuf, OrbitifyError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| OrbitifyError::config("Cannot find the configuration directory"))
    }

    /// Returns the configuration file path.
    pub fn config_file() -> Result<PathBuf, OrbitifyError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
