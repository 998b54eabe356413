//! User configuration loaded from a TOML file.

use crate::calculator::AngleMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Angle mode a new session starts in.
    pub angle_mode: AngleMode,
    /// How long the error display stays before clearing itself.
    pub error_reset_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Degrees,
            error_reset_ms: 1500,
        }
    }
}

impl Config {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.error_reset_ms)
    }

    /// `~/.config/calcpro/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcpro").join("config.toml"))
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one the default location is
    /// tried, and a missing file there means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        Self::from_toml(&text).map_err(|source| ConfigError::Parse { path, source })
    }
}
