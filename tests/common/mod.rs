//! Shared test utilities.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use clap::CommandFactory;
use lwcli::args::FlagSet;
use lwcli::cli::Cli;
use lwcli::component::{Component, ComponentState, STATE_FILE};

pub fn raw_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// The host CLI's real root flags.
pub fn root_flags() -> FlagSet {
    FlagSet::from_command(Cli::command())
}

/// `<home>/.config/lacework`, as the binary resolves it with `HOME=<home>`.
pub fn components_dir(home: &Path) -> PathBuf {
    home.join(".config").join("lacework")
}

/// Install a shell script as a signed component command under `home`.
#[cfg(unix)]
pub fn install_script_component(home: &Path, name: &str, body: &str) -> Component {
    use lwcli::component::{sha256_hex, ComponentStatus};
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let dir = components_dir(home);
    let bin_dir = dir.join(name);
    fs::create_dir_all(&bin_dir).expect("create component dir");
    let path = bin_dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write component");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod component");

    let component = Component {
        name: name.to_string(),
        description: format!("{name} component"),
        version: "0.1.0".to_string(),
        status: ComponentStatus::Installed,
        signature: sha256_hex(&path).expect("hash component"),
        cli_command: true,
        command_name: name.to_string(),
        binary: true,
        library: false,
    };
    write_state(home, vec![component.clone()]);
    component
}

pub fn write_state(home: &Path, components: Vec<Component>) {
    let state = ComponentState {
        version: "0.1.0".to_string(),
        components,
    };
    state
        .store_at(&components_dir(home).join(STATE_FILE))
        .expect("store component state");
}
