use std::fs::File;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use super::{Component, ComponentError};

/// Everything needed to execute one component.
#[derive(Debug, Clone, Default)]
pub struct ComponentRun {
    /// Arguments after the component's command name.
    pub args: Vec<String>,
    /// Variables added on top of the inherited environment.
    pub env: Vec<(String, String)>,
}

/// Hex-encoded sha256 of a file's contents.
pub fn sha256_hex(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

impl Component {
    /// Check the binary under `dir` against the registered signature.
    pub fn verify(&self, dir: &Path) -> Result<(), ComponentError> {
        let unverified = |reason: String| ComponentError::Unverified {
            name: self.name.clone(),
            reason,
        };

        if self.signature.is_empty() {
            return Err(unverified("component has no signature".into()));
        }
        let path = self.path(dir)?;
        let digest =
            sha256_hex(&path).map_err(|e| unverified(format!("unable to hash component: {e}")))?;
        if !digest.eq_ignore_ascii_case(&self.signature) {
            return Err(unverified("signature mismatch".into()));
        }
        Ok(())
    }
}

/// Run a verified component binary with inherited stdio and wait for it.
///
/// Returns the component's exit code so the caller can propagate it.
pub fn run_component(
    component: &Component,
    dir: &Path,
    run: &ComponentRun,
) -> Result<i32, ComponentError> {
    if !component.binary {
        return Err(ComponentError::NotBinary {
            name: component.name.clone(),
        });
    }
    component.verify(dir)?;

    let path = component.path(dir)?;
    info!(component = %component.name, path = %path.display(), "running component");
    debug!(component = %component.name, args = ?run.args, "component args");

    let status = Command::new(&path)
        .args(&run.args)
        .envs(run.env.iter().map(|(k, v)| (k, v)))
        .status()
        .map_err(|e| ComponentError::Spawn {
            name: component.name.clone(),
            source: e,
        })?;

    let code = exit_code(status);
    debug!(component = %component.name, code, "component exited");
    Ok(code)
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
