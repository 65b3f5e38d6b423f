//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::SettingsOverrides;
use crate::shell::ShellKind;

/// venvy - find, activate, list, and create Python virtual environments.
#[derive(Debug, Parser)]
#[command(name = "venvy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct Cli {
    /// Path to config file (overrides the default location)
    #[arg(short, long, global = true, env = "VENVY_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding named environments
    #[arg(long, global = true, env = "VENVY_BASE_DIR", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Show verbose output (including environment tool output)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings overrides carried by the global flags.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            config: self.config.clone(),
            base_dir: self.base_dir.clone(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the command that activates an environment
    Activate(ActivateArgs),

    /// List named and project environments
    List(ListArgs),

    /// Create a named environment with the environment tool
    Create(CreateArgs),

    /// Print the shell hook that makes `venvy activate` work
    Init(InitArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `activate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ActivateArgs {
    /// Environment name, or a path to search upwards from (default: current directory)
    pub target: Option<String>,

    /// Shell to emit the activation command for (default: from $SHELL)
    #[arg(long, value_enum)]
    pub shell: Option<ShellKind>,

    /// Print the environment root instead of an activation command
    #[arg(long)]
    pub path: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CreateArgs {
    /// Name of the new environment
    pub name: String,

    /// Extra arguments passed to the environment tool
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "TOOL_ARGS")]
    pub extra: Vec<String>,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InitArgs {
    /// Shell to print the hook for
    #[arg(value_enum)]
    pub shell: ShellKind,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
