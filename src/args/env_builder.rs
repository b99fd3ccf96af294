//! Environment builder: all `LW_*` variables handed to components.

use crate::config::CliState;

/// Builder for environment variables passed to the component process.
#[derive(Debug, Clone, Default)]
pub struct EnvSet {
    vars: Vec<(String, String)>,
}

impl EnvSet {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Profile, credentials and output switches from the resolved state.
    pub fn with_state(mut self, state: &CliState) -> Self {
        let flag = |on: bool| on.to_string();
        self.vars.extend([
            ("LW_PROFILE".into(), state.profile.clone()),
            ("LW_ACCOUNT".into(), state.account.clone()),
            ("LW_SUBACCOUNT".into(), state.subaccount.clone()),
            ("LW_API_KEY".into(), state.api_key.expose().to_string()),
            ("LW_API_SECRET".into(), state.api_secret.expose().to_string()),
            ("LW_API_TOKEN".into(), state.api_token.expose().to_string()),
            ("LW_ORGANIZATION".into(), flag(state.organization)),
            ("LW_NONINTERACTIVE".into(), flag(state.non_interactive)),
            ("LW_NOCACHE".into(), flag(state.no_cache)),
            ("LW_NOCOLOR".into(), flag(state.no_color)),
            ("LW_LOG".into(), state.log_level().to_string()),
            ("LW_JSON".into(), flag(state.json)),
        ]);
        self
    }

    /// Version of the host CLI.
    pub fn with_cli_version(mut self, version: &str) -> Self {
        self.vars.push(("LW_CLI_VERSION".into(), version.into()));
        self
    }

    pub fn build(self) -> Vec<(String, String)> {
        self.vars
    }
}
