//! Configuration types and loading for openclaw-migrate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::error::Result;
use crate::paths;

/// Migration configuration.
///
/// Every field has a default, so an absent config file means "migrate the
/// current user's `~/.openclaw` into `~/.config/nexus`".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the OpenClaw installation to read from.
    pub openclaw_home: PathBuf,

    /// Root of the Nexus configuration directory to write into.
    pub nexus_home: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openclaw_home: paths::default_openclaw_home(),
            nexus_home: paths::default_nexus_home(),
        }
    }
}

impl Config {
    /// Load configuration from the default config file, if present.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        config.expand_paths();
        Ok(config)
    }

    /// Get the default config file path.
    pub fn default_config_path() -> PathBuf {
        paths::default_nexus_home().join(format!("{}.toml", crate::APP_NAME))
    }

    /// Expand a path, replacing ~ with home directory.
    pub fn expand_path(path: &str) -> PathBuf {
        let expanded = shellexpand::full(path)
            .map(std::borrow::Cow::into_owned)
            .unwrap_or_else(|_| path.to_string());
        PathBuf::from(expanded)
    }

    fn expand_paths(&mut self) {
        self.openclaw_home = Self::expand_path(&self.openclaw_home.to_string_lossy());
        self.nexus_home = Self::expand_path(&self.nexus_home.to_string_lossy());
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
