//! Create command implementation.
//!
//! The `venvy create <NAME> [TOOL_ARGS…]` command creates a named
//! environment under the base directory.

use crate::cli::args::CreateArgs;
use crate::config::Settings;
use crate::environment::create_environment;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The create command implementation.
pub struct CreateCommand<'a> {
    settings: &'a Settings,
    args: CreateArgs,
}

impl<'a> CreateCommand<'a> {
    /// Create a new create command.
    pub fn new(settings: &'a Settings, args: CreateArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for CreateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = create_environment(self.settings, &self.args.name, &self.args.extra, ui)?;

        ui.message(&format!("  {}", env.root().display()));
        ui.show_hint(&format!("Activate it with: venvy activate {}", env.name()));
        Ok(CommandResult::success())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::ToolSettings;
    use crate::environment::Resolver;
    use crate::error::VenvyError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn settings(temp: &TempDir) -> Settings {
        let script = temp.path().join("tool.sh");
        fs::write(&script, "mkdir -p \"$1/bin\" && touch \"$1/bin/activate\"\n").unwrap();
        Settings {
            base_dir: Some(temp.path().join("envs")),
            tool: ToolSettings {
                program: "/bin/sh".to_string(),
                args: vec![script.display().to_string()],
            },
            ..Settings::default()
        }
    }

    #[test]
    fn created_environment_resolves_by_name() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let cmd = CreateCommand::new(
            &settings,
            CreateArgs {
                name: "api".to_string(),
                extra: vec![],
            },
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 0);
        assert!(ui.has_hint("venvy activate api"));

        let env = Resolver::new(&settings)
            .resolve(Some("api"), temp.path())
            .unwrap();
        assert_eq!(env.name(), "api");
    }

    #[test]
    fn second_create_fails() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let args = CreateArgs {
            name: "api".to_string(),
            extra: vec![],
        };
        let mut ui = MockUI::new();

        CreateCommand::new(&settings, args.clone())
            .execute(&mut ui)
            .unwrap();
        let err = CreateCommand::new(&settings, args)
            .execute(&mut ui)
            .unwrap_err();
        assert!(matches!(err, VenvyError::AlreadyExists { .. }));
    }
}
