use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name of the profile used when none is selected.
pub const DEFAULT_PROFILE: &str = "default";

/// All profiles from the configuration file, keyed by profile name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profiles(pub BTreeMap<String, Profile>);

/// Access settings for one account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Account subdomain (e.g., "acme" for acme.lacework.net).
    #[serde(default)]
    pub account: String,
    /// Sub-account inside an organization.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subaccount: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
    /// Configuration format version.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub version: u32,
}

fn is_zero(v: &u32) -> bool {
    *v == 0
}

impl Profiles {
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.0.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
