//! Installed components: registry file, verification and execution.

mod runner;
mod state;

pub use runner::{run_component, sha256_hex, ComponentRun};
pub use state::{components_dir, Component, ComponentState, ComponentStatus, STATE_FILE};

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading, verifying or running components.
#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("unable to locate home directory")]
    NoHomeDir,

    #[error("Failed to read component state '{path}'")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse component state '{path}'")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write component state '{path}'")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("component '{name}' not found. Try running 'lwcli component list'")]
    NotFound { name: String },

    #[error("component does not exist at '{path}'")]
    Missing { path: PathBuf },

    #[error("unable to run component '{name}': component is not a binary")]
    NotBinary { name: String },

    #[error("unable to verify component '{name}': {reason}")]
    Unverified { name: String, reason: String },

    #[error("unable to run component '{name}'")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
