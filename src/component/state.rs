use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ComponentError;

/// File name of the component registry inside [`components_dir`].
pub const STATE_FILE: &str = "components";

/// `~/.config/lacework`, where the registry and component binaries live.
pub fn components_dir() -> Result<PathBuf, ComponentError> {
    let home = dirs::home_dir().ok_or(ComponentError::NoHomeDir)?;
    Ok(home.join(".config").join("lacework"))
}

/// Registry of known components, persisted as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentState {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentStatus {
    #[serde(rename = "Installed")]
    Installed,
    #[default]
    #[serde(rename = "Not Installed")]
    NotInstalled,
}

impl std::fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentStatus::Installed => write!(f, "Installed"),
            ComponentStatus::NotInstalled => write!(f, "Not Installed"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub status: ComponentStatus,
    /// Hex sha256 of the binary.
    #[serde(default)]
    pub signature: String,
    /// Exposed as a top-level CLI command named `command_name`.
    #[serde(default)]
    pub cli_command: bool,
    #[serde(default)]
    pub command_name: String,
    /// Executable; library components only provide content.
    #[serde(default)]
    pub binary: bool,
    #[serde(default)]
    pub library: bool,
}

impl Component {
    /// Location of the binary: `<dir>/<name>/<name>`.
    pub fn path(&self, dir: &Path) -> Result<PathBuf, ComponentError> {
        let path = dir.join(&self.name).join(&self.name);
        if !path.is_file() {
            return Err(ComponentError::Missing { path });
        }
        Ok(path)
    }

    pub fn is_installed(&self) -> bool {
        self.status == ComponentStatus::Installed
    }
}

impl ComponentState {
    /// Loads the registry from the default location.
    pub fn load() -> Result<Self, ComponentError> {
        Self::load_from(&components_dir()?.join(STATE_FILE))
    }

    /// Loads the registry from a file; a missing file yields an empty registry.
    pub fn load_from(path: &Path) -> Result<Self, ComponentError> {
        if !path.exists() {
            debug!(path = %path.display(), "no component state");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ComponentError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| ComponentError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Writes the registry, creating the parent directory when needed.
    pub fn store_at(&self, path: &Path) -> Result<(), ComponentError> {
        let write_err = |e: std::io::Error| ComponentError::WriteError {
            path: path.to_path_buf(),
            source: e,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            write_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;
        fs::write(path, content).map_err(write_err)
    }

    /// Installed component exposed as the CLI command `command`.
    pub fn find_command(&self, command: &str) -> Option<&Component> {
        self.components
            .iter()
            .find(|c| c.is_installed() && c.cli_command && c.command_name == command)
    }

    /// Update the status of the component called `name`.
    pub fn set_status(&mut self, name: &str, status: ComponentStatus) -> Result<(), ComponentError> {
        let component = self
            .components
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| ComponentError::NotFound {
                name: name.to_string(),
            })?;
        component.status = status;
        Ok(())
    }
}
