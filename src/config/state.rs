//! Effective CLI state: flags, then `LW_*` environment, then the profile.

use tracing::debug;

use crate::cli::GlobalArgs;
use crate::config::credentials::SecureString;
use crate::config::loader::ConfigError;
use crate::config::types::{Profile, Profiles, DEFAULT_PROFILE};

/// Settings the CLI runs with, after all sources are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliState {
    pub profile: String,
    pub account: String,
    pub subaccount: String,
    pub api_key: SecureString,
    pub api_secret: SecureString,
    pub api_token: SecureString,
    pub organization: bool,
    pub debug: bool,
    pub no_color: bool,
    pub no_cache: bool,
    pub non_interactive: bool,
    pub json: bool,
}

impl CliState {
    /// Merge command-line flags, environment and profiles.
    ///
    /// `env` looks up a variable by name; pass `|k| std::env::var(k).ok()`
    /// for the process environment.
    ///
    /// An explicitly selected profile must exist; a missing `default`
    /// profile just means everything comes from flags and environment.
    pub fn resolve<F>(
        flags: &GlobalArgs,
        profiles: &Profiles,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| env(key).filter(|v| !v.is_empty());
        let env_bool = |key: &str| {
            var(key)
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false)
        };

        let profile_name = flags
            .profile
            .clone()
            .filter(|p| !p.is_empty())
            .or_else(|| var("LW_PROFILE"))
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

        let profile = match profiles.get(&profile_name) {
            Some(profile) => profile.clone(),
            None if profile_name == DEFAULT_PROFILE => {
                debug!(profile = %profile_name, "profile not configured, using flags and env only");
                Profile::default()
            }
            None => {
                return Err(ConfigError::ProfileNotFound {
                    profile: profile_name,
                    path: Profiles::config_path(),
                    available: profiles.names().collect::<Vec<_>>().join(", "),
                })
            }
        };

        let pick = |flag: &Option<String>, key: &str, from_profile: &str| -> String {
            flag.clone()
                .filter(|v| !v.is_empty())
                .or_else(|| var(key))
                .unwrap_or_else(|| from_profile.to_string())
        };

        let state = CliState {
            account: pick(&flags.account, "LW_ACCOUNT", &profile.account),
            subaccount: pick(&flags.subaccount, "LW_SUBACCOUNT", &profile.subaccount),
            api_key: SecureString::new(pick(&flags.api_key, "LW_API_KEY", &profile.api_key)),
            api_secret: SecureString::new(pick(
                &flags.api_secret,
                "LW_API_SECRET",
                &profile.api_secret,
            )),
            api_token: SecureString::new(pick(&flags.api_token, "LW_API_TOKEN", "")),
            organization: flags.organization || env_bool("LW_ORGANIZATION"),
            debug: flags.debug || env_bool("LW_DEBUG"),
            no_color: flags.nocolor || env_bool("LW_NOCOLOR") || var("NO_COLOR").is_some(),
            no_cache: flags.nocache || env_bool("LW_NOCACHE"),
            non_interactive: flags.noninteractive || env_bool("LW_NONINTERACTIVE"),
            json: flags.json || env_bool("LW_JSON"),
            profile: profile_name,
        };

        debug!(
            profile = %state.profile,
            account = %state.account,
            "resolved cli state"
        );
        Ok(state)
    }

    /// Log level name handed to components.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "DEBUG"
        } else {
            "INFO"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn profiles() -> Profiles {
        toml::from_str(
            r#"
            [default]
            account = "acme"
            api_key = "DEFAULT_KEY"
            api_secret = "DEFAULT_SECRET"

            [prod]
            account = "acme-prod"
            subaccount = "eu"
            api_key = "PROD_KEY"
            api_secret = "PROD_SECRET"
            "#,
        )
        .expect("valid toml")
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn default_profile_is_used_without_flags() {
        let state = CliState::resolve(&GlobalArgs::default(), &profiles(), env_of(&[])).unwrap();
        assert_eq!(state.profile, "default");
        assert_eq!(state.account, "acme");
        assert_eq!(state.api_key.expose(), "DEFAULT_KEY");
        assert!(state.api_token.is_empty());
    }

    #[test]
    fn flag_beats_env_beats_profile() {
        let flags = GlobalArgs {
            profile: Some("prod".into()),
            account: Some("from-flag".into()),
            ..Default::default()
        };
        let env = env_of(&[("LW_ACCOUNT", "from-env"), ("LW_API_KEY", "ENV_KEY")]);

        let state = CliState::resolve(&flags, &profiles(), env).unwrap();
        assert_eq!(state.profile, "prod");
        assert_eq!(state.account, "from-flag");
        assert_eq!(state.api_key.expose(), "ENV_KEY");
        assert_eq!(state.api_secret.expose(), "PROD_SECRET");
        assert_eq!(state.subaccount, "eu");
    }

    #[test]
    fn profile_can_come_from_env() {
        let env = env_of(&[("LW_PROFILE", "prod"), ("LW_JSON", "true")]);
        let state = CliState::resolve(&GlobalArgs::default(), &profiles(), env).unwrap();
        assert_eq!(state.account, "acme-prod");
        assert!(state.json);
    }

    #[test]
    fn unknown_explicit_profile_is_an_error() {
        let flags = GlobalArgs {
            profile: Some("staging".into()),
            ..Default::default()
        };
        let err = CliState::resolve(&flags, &profiles(), env_of(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::ProfileNotFound { ref profile, .. } if profile == "staging"));
        assert!(err.to_string().contains("default, prod"));
    }

    #[test]
    fn missing_default_profile_is_fine() {
        let flags = GlobalArgs {
            api_token: Some("TOKEN".into()),
            debug: true,
            ..Default::default()
        };
        let state = CliState::resolve(&flags, &Profiles::default(), env_of(&[])).unwrap();
        assert_eq!(state.account, "");
        assert_eq!(state.api_token.expose(), "TOKEN");
        assert_eq!(state.log_level(), "DEBUG");
    }
}
