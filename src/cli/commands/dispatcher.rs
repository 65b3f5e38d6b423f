//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{Settings, SettingsOverrides};
use crate::error::Result;
use crate::ui::UserInterface;

use super::activate::ActivateCommand;
use super::completions::CompletionsCommand;
use super::config::ConfigCommand;
use super::create::CreateCommand;
use super::init::InitCommand;
use super::list::ListCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for diagnostics (stderr)
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// Failures travel as [`VenvyError`](crate::error::VenvyError)s instead.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    cwd: PathBuf,
    overrides: SettingsOverrides,
}

impl CommandDispatcher {
    /// Create a new dispatcher rooted at the caller's working directory.
    pub fn new(cwd: PathBuf, overrides: SettingsOverrides) -> Self {
        Self { cwd, overrides }
    }

    /// Get the working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Dispatch and execute a command.
    ///
    /// Settings are loaded once, and only for commands that use them, so
    /// `init` and `completions` keep working with a broken config file.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Activate(args) => {
                let settings = Settings::load(&self.overrides)?;
                ActivateCommand::new(&settings, &self.cwd, args.clone()).execute(ui)
            }
            Commands::List(args) => {
                let settings = Settings::load(&self.overrides)?;
                ListCommand::new(&settings, args.clone()).execute(ui)
            }
            Commands::Create(args) => {
                let settings = Settings::load(&self.overrides)?;
                CreateCommand::new(&settings, args.clone()).execute(ui)
            }
            Commands::Config(args) => {
                let settings = Settings::load(&self.overrides)?;
                ConfigCommand::new(&settings, args.clone()).execute(ui)
            }
            Commands::Init(args) => InitCommand::new(args.clone()).execute(ui),
            Commands::Completions(args) => CompletionsCommand::new(args.clone()).execute(ui),
        }
    }
}
