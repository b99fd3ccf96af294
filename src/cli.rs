//! Root command definition for the host CLI.
//!
//! Every flag here is global: it is accepted in front of built-in commands
//! and is recognized by the partitioner in front of component commands.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "lwcli",
    about = "A tool to manage the Lacework cloud security platform.",
    long_about = "A tool to manage the Lacework cloud security platform.\n\n\
                  Installed components extend the CLI with their own commands; \
                  any argument the CLI does not recognize is forwarded to them."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags shared by every command and forwarded to components as `LW_*`.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// turn on debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// turn off colors
    #[arg(long, global = true)]
    pub nocolor: bool,

    /// turn off caching
    #[arg(long, global = true)]
    pub nocache: bool,

    /// turn off interactive mode (disable spinners, prompts, etc.)
    #[arg(long, global = true)]
    pub noninteractive: bool,

    /// switch commands output from human-readable to json format
    #[arg(long, global = true)]
    pub json: bool,

    /// switch between profiles configured at ~/.lacework.toml
    #[arg(short = 'p', long, global = true)]
    pub profile: Option<String>,

    /// access key id
    #[arg(short = 'k', long = "api_key", global = true)]
    pub api_key: Option<String>,

    /// secret access key
    #[arg(short = 's', long = "api_secret", global = true)]
    pub api_secret: Option<String>,

    /// access token (replaces the use of api_key and api_secret)
    #[arg(long = "api_token", global = true)]
    pub api_token: Option<String>,

    /// account subdomain of URL (i.e. <ACCOUNT>.lacework.net)
    #[arg(short = 'a', long, global = true)]
    pub account: Option<String>,

    /// sub-account name inside your organization (org admins only)
    #[arg(long, global = true)]
    pub subaccount: Option<String>,

    /// access organization level data sets (org admins only)
    #[arg(long, global = true)]
    pub organization: bool,

    /// print the CLI version
    #[arg(short = 'v', long, global = true)]
    pub version: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// manage components
    #[command(alias = "components")]
    Component {
        #[command(subcommand)]
        action: ComponentAction,
    },
    /// print the CLI version
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ComponentAction {
    /// list all components
    #[command(alias = "ls")]
    List,
    /// install a new component
    Install { name: String },
    /// delete an existing component
    Delete { name: String },
}

/// `lwcli v0.3.0`
pub fn version_string() -> String {
    format!("lwcli v{}", env!("CARGO_PKG_VERSION"))
}
