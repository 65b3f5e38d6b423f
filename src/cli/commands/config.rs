//! Config command implementation.
//!
//! The `venvy config` command shows resolved settings.

use crate::cli::args::ConfigArgs;
use crate::config::Settings;
use crate::error::{Result, VenvyError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand<'a> {
    settings: &'a Settings,
    args: ConfigArgs,
}

impl<'a> ConfigCommand<'a> {
    /// Create a new config command.
    pub fn new(settings: &'a Settings, args: ConfigArgs) -> Self {
        Self { settings, args }
    }

    /// Serialize the settings as YAML or JSON.
    pub fn render(&self) -> Result<String> {
        if self.args.json {
            serde_json::to_string_pretty(self.settings).map_err(|e| VenvyError::Other(e.into()))
        } else {
            serde_yaml::to_string(self.settings).map_err(|e| VenvyError::Other(e.into()))
        }
    }
}

impl Command for ConfigCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.settings.config_path {
            Some(path) => ui.message(&format!("# {}", path.display())),
            None => ui.message("# no config file, using defaults"),
        }

        println!("{}", self.render()?.trim_end());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::path::PathBuf;

    fn settings() -> Settings {
        Settings {
            base_dir: Some(PathBuf::from("/envs")),
            search_roots: vec![PathBuf::from("/work")],
            ..Settings::default()
        }
    }

    #[test]
    fn yaml_lists_resolved_values() {
        let settings = settings();
        let cmd = ConfigCommand::new(&settings, ConfigArgs::default());
        let yaml = cmd.render().unwrap();

        assert!(yaml.contains("base_dir: /envs"));
        assert!(yaml.contains("- /work"));
        assert!(yaml.contains("env_dir: .venv"));
        assert!(yaml.contains("program: uv"));
    }

    #[test]
    fn json_round_trips_through_value() {
        let settings = settings();
        let cmd = ConfigCommand::new(&settings, ConfigArgs { json: true });
        let value: serde_json::Value = serde_json::from_str(&cmd.render().unwrap()).unwrap();

        assert_eq!(value["base_dir"], "/envs");
        assert_eq!(value["marker"]["env_dir"], ".venv");
        assert_eq!(value["tool"]["args"][0], "venv");
        assert!(value["config_path"].is_null());
    }

    #[test]
    fn reports_config_source_on_ui() {
        let settings = settings();
        let cmd = ConfigCommand::new(&settings, ConfigArgs::default());
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        assert!(ui.has_message("no config file"));
    }
}
