//! Activate command implementation.
//!
//! `venvy activate [TARGET]` resolves an environment and prints the command
//! that activates it. The shell hook installed by `venvy init` evaluates
//! that output, so nothing but the command itself may reach stdout.

use std::path::{Path, PathBuf};

use crate::cli::args::ActivateArgs;
use crate::config::Settings;
use crate::environment::Resolver;
use crate::error::Result;
use crate::shell::{activation_command, detect_shell};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The activate command implementation.
pub struct ActivateCommand<'a> {
    settings: &'a Settings,
    cwd: PathBuf,
    args: ActivateArgs,
}

impl<'a> ActivateCommand<'a> {
    /// Create a new activate command.
    pub fn new(settings: &'a Settings, cwd: &Path, args: ActivateArgs) -> Self {
        Self {
            settings,
            cwd: cwd.to_path_buf(),
            args,
        }
    }

    /// Resolve the target and build the line to print.
    pub fn render(&self) -> Result<String> {
        let env = Resolver::new(self.settings).resolve(self.args.target.as_deref(), &self.cwd)?;
        tracing::debug!("Activating {} ({})", env.name(), env.root().display());

        if self.args.path {
            return Ok(env.root().display().to_string());
        }

        let shell = self.args.shell.unwrap_or_else(detect_shell);
        Ok(activation_command(&env, &self.settings.marker, shell))
    }
}

impl Command for ActivateCommand<'_> {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        println!("{}", self.render()?);
        Ok(CommandResult::success())
    }
}
