use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Profiles;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}'")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}'")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Profile '{profile}' not found in {path}. Available profiles: {available}")]
    ProfileNotFound {
        profile: String,
        path: PathBuf,
        available: String,
    },
}

impl Profiles {
    /// Returns the path to the profiles file, `~/.lacework.toml`.
    ///
    /// Falls back to the current directory if the home directory is unknown.
    pub fn config_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".lacework.toml")
    }

    /// Loads profiles from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads profiles from a specific file.
    ///
    /// A missing file is not an error: the CLI can run purely on flags and
    /// environment variables.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Profiles::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
