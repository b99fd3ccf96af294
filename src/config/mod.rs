//! Profiles file and effective CLI state.

pub mod credentials;
pub mod loader;
pub mod state;
pub mod types;

pub use credentials::SecureString;
pub use loader::ConfigError;
pub use state::CliState;
pub use types::{Profile, Profiles, DEFAULT_PROFILE};
