//! Top-level flow: route the command line, then run a built-in command or
//! hand over to a component.

use std::io::{self, Write};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing::{debug, warn};

use crate::args::{build_component_run, plan_dispatch, ComponentDispatch, Dispatch, FlagSet};
use crate::cli::{version_string, Cli, Commands, ComponentAction};
use crate::component::{
    components_dir, run_component, ComponentState, ComponentStatus, STATE_FILE,
};
use crate::config::{CliState, Profiles};
use crate::logging::init_tracing;

/// Exit code when no command was given at all.
pub const NO_COMMAND_EXIT: i32 = 127;

/// Run the CLI for `raw_args` (program name excluded) and return the exit code.
pub fn run(raw_args: Vec<String>) -> anyhow::Result<i32> {
    if raw_args.is_empty() {
        Cli::command().print_help()?;
        return Ok(NO_COMMAND_EXIT);
    }

    let flags = FlagSet::from_command(Cli::command());
    let components = ComponentState::load();
    let empty = ComponentState::default();
    let registry = components.as_ref().unwrap_or(&empty);

    match plan_dispatch(&raw_args, &flags, registry) {
        Dispatch::Component(dispatch) => run_component_command(&dispatch),
        Dispatch::Host(args) => {
            let cli = match parse_cli(&args) {
                Ok(cli) => cli,
                // an unreadable registry hides every component command
                Err(err) if err.use_stderr() => match components {
                    Err(load) => {
                        return Err(anyhow::Error::new(load).context(
                            "unable to load components, component commands are unavailable",
                        ))
                    }
                    Ok(_) => err.exit(),
                },
                Err(err) => err.exit(),
            };
            init_tracing(cli.global.debug);
            if let Err(err) = &components {
                warn!(error = %err, "unable to load components");
            }
            run_host_command(cli)
        }
    }
}

fn parse_cli(args: &[String]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("lwcli".to_string()).chain(args.iter().cloned()))
}

fn run_component_command(dispatch: &ComponentDispatch) -> anyhow::Result<i32> {
    let cli = parse_cli(&dispatch.host_args).unwrap_or_else(|err| err.exit());
    init_tracing(cli.global.debug);

    if cli.global.version {
        println!("{}", version_string());
        return Ok(0);
    }

    let profiles = Profiles::load()?;
    let state = CliState::resolve(&cli.global, &profiles, |key| std::env::var(key).ok())?;
    let dir = components_dir()?;

    let run = build_component_run(dispatch, &state, &version_string());
    let code = run_component(&dispatch.component, &dir, &run)?;
    debug!(component = %dispatch.component.name, code, "component finished");
    Ok(code)
}

fn run_host_command(cli: Cli) -> anyhow::Result<i32> {
    if cli.global.version {
        println!("{}", version_string());
        return Ok(0);
    }

    match cli.command {
        None => {
            Cli::command().print_help()?;
            Ok(0)
        }
        Some(Commands::Version) => {
            println!("{}", version_string());
            Ok(0)
        }
        Some(Commands::Component { action }) => {
            let path = components_dir()?.join(STATE_FILE);
            let mut state = ComponentState::load_from(&path)?;

            match action {
                ComponentAction::List => {
                    list_components(&state, &mut io::stdout().lock())?;
                }
                ComponentAction::Install { name } => {
                    state.set_status(&name, ComponentStatus::Installed)?;
                    state
                        .store_at(&path)
                        .with_context(|| format!("unable to install component '{name}'"))?;
                    println!("The component {name} was installed.");
                }
                ComponentAction::Delete { name } => {
                    state.set_status(&name, ComponentStatus::NotInstalled)?;
                    state
                        .store_at(&path)
                        .with_context(|| format!("unable to delete component '{name}'"))?;
                    println!("The component {name} was deleted.");
                }
            }
            Ok(0)
        }
    }
}

/// Plain listing of the registry: status, name and description per line.
pub fn list_components<W: Write>(state: &ComponentState, out: &mut W) -> io::Result<()> {
    let status_width = state
        .components
        .iter()
        .map(|c| c.status.to_string().len())
        .max()
        .unwrap_or(0);
    let name_width = state
        .components
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0);

    for c in &state.components {
        writeln!(
            out,
            "{:<sw$}  {:<nw$}  {}",
            c.status.to_string(),
            c.name,
            c.description,
            sw = status_width,
            nw = name_width
        )?;
    }
    writeln!(out, "\nComponents version: {}", state.version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;

    #[test]
    fn list_aligns_columns() {
        let state = ComponentState {
            version: "0.1.0".into(),
            components: vec![
                Component {
                    name: "iac".into(),
                    description: "iac scanning".into(),
                    status: ComponentStatus::Installed,
                    ..Default::default()
                },
                Component {
                    name: "sca".into(),
                    description: "sca scanning".into(),
                    ..Default::default()
                },
            ],
        };

        let mut out = Vec::new();
        list_components(&state, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Installed      iac  iac scanning\n\
             Not Installed  sca  sca scanning\n\
             \nComponents version: 0.1.0\n"
        );
    }
}
