//! Init command implementation.
//!
//! The `venvy init <SHELL>` command prints the shell hook.

use crate::cli::args::InitArgs;
use crate::error::Result;
use crate::shell::{hook_script, install_line};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(args: InitArgs) -> Self {
        Self { args }
    }

    /// The hook script for the requested shell.
    pub fn render(&self) -> String {
        hook_script(self.args.shell)
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        print!("{}", self.render());

        if console::Term::stdout().is_term() {
            ui.show_hint(&format!(
                "Add this line to your shell startup file: {}",
                install_line(self.args.shell)
            ));
        }

        Ok(CommandResult::success())
    }
}
