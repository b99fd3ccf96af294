//! Pipeline: decide who handles a command line and build the component run.

use tracing::debug;

use crate::args::env_builder::EnvSet;
use crate::args::partition::partition;
use crate::args::registry::FlagSet;
use crate::component::{Component, ComponentRun, ComponentState};
use crate::config::CliState;

/// Who handles the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A built-in command; the raw args go to the host parser untouched.
    Host(Vec<String>),
    /// An installed component command.
    Component(ComponentDispatch),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDispatch {
    pub component: Component,
    /// Host flags found on the command line, for the host parser.
    pub host_args: Vec<String>,
    /// Component argv, without the component's command name.
    pub component_args: Vec<String>,
}

/// Route `raw_args` to a component or to the host CLI.
///
/// The command line is partitioned first; if the first component-bound
/// token names an installed component command, that component owns the
/// invocation.
pub fn plan_dispatch(raw_args: &[String], flags: &FlagSet, components: &ComponentState) -> Dispatch {
    let split = partition(flags, raw_args);

    let Some(command) = split
        .component_args
        .first()
        .filter(|first| !first.starts_with('-'))
    else {
        return Dispatch::Host(raw_args.to_vec());
    };

    match components.find_command(command) {
        Some(component) => {
            debug!(
                component = %component.name,
                host_args = ?split.host_args,
                "dispatching to component"
            );
            Dispatch::Component(ComponentDispatch {
                component: component.clone(),
                host_args: split.host_args,
                component_args: split.component_args[1..].to_vec(),
            })
        }
        None => Dispatch::Host(raw_args.to_vec()),
    }
}

/// Build the argv and environment for a component run.
pub fn build_component_run(
    dispatch: &ComponentDispatch,
    state: &CliState,
    cli_version: &str,
) -> ComponentRun {
    let env = EnvSet::new()
        .with_state(state)
        .with_cli_version(cli_version)
        .build();

    ComponentRun {
        args: dispatch.component_args.clone(),
        env,
    }
}
