use std::fs;

use lwcli::config::{ConfigError, Profile, Profiles};
use tempfile::TempDir;

fn sample_profile() -> Profile {
    Profile {
        account: "acme".to_string(),
        subaccount: String::new(),
        api_key: "ACME_0123456789".to_string(),
        api_secret: "_abcdef0123456789".to_string(),
        version: 2,
    }
}

/// Test that Profiles::config_path() points at the home dotfile.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Profiles::config_path();
    assert!(path.ends_with(".lacework.toml"));
}

/// Test a missing file yields no profiles rather than an error.
#[test]
fn test_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let profiles = Profiles::load_from(&dir.path().join(".lacework.toml")).unwrap();
    assert_eq!(profiles, Profiles::default());
}

/// Test that valid TOML parses correctly.
#[test]
fn test_load_valid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".lacework.toml");
    fs::write(
        &path,
        r#"
[default]
account = "acme"
api_key = "ACME_KEY"
api_secret = "_secret"
version = 2

[dev]
account = "acme-dev"
subaccount = "team-a"
api_key = "DEV_KEY"
api_secret = "_dev_secret"
"#,
    )
    .unwrap();

    let profiles = Profiles::load_from(&path).unwrap();

    assert_eq!(profiles.names().collect::<Vec<_>>(), vec!["default", "dev"]);
    let dev = profiles.get("dev").unwrap();
    assert_eq!(dev.account, "acme-dev");
    assert_eq!(dev.subaccount, "team-a");
    assert_eq!(dev.version, 0);
    assert_eq!(profiles.get("default").unwrap().version, 2);
}

/// Test that invalid TOML produces a parse error naming the file.
#[test]
fn test_load_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".lacework.toml");
    fs::write(&path, "this is not valid toml [[[").unwrap();

    match Profiles::load_from(&path) {
        Err(ConfigError::ParseError { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

/// Test round-trip serialization/deserialization.
#[test]
fn test_profiles_roundtrip() {
    let mut profiles = Profiles::default();
    profiles.0.insert("default".to_string(), sample_profile());

    let text = toml::to_string(&profiles).unwrap();
    assert!(!text.contains("subaccount"));
    let back: Profiles = toml::from_str(&text).unwrap();
    assert_eq!(back, profiles);
}
