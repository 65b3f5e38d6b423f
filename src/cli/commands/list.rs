//! List command implementation.
//!
//! The `venvy list` command shows named and project environments.

use crate::cli::args::ListArgs;
use crate::config::Settings;
use crate::environment::{list_environments, ListedEnvironment};
use crate::error::{Result, VenvyError};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    settings: &'a Settings,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(settings: &'a Settings, args: ListArgs) -> Self {
        Self { settings, args }
    }

    /// Enumerate environments, sorted by source then name then path.
    pub fn collect(&self) -> Vec<ListedEnvironment> {
        let mut found = list_environments(self.settings);
        found.sort_by(|a, b| {
            (a.source, a.environment.name(), a.environment.root()).cmp(&(
                b.source,
                b.environment.name(),
                b.environment.root(),
            ))
        });
        found
    }

    /// Render environments as a table or JSON.
    pub fn render(&self, found: &[ListedEnvironment]) -> Result<String> {
        if self.args.json {
            return serde_json::to_string_pretty(found).map_err(|e| VenvyError::Other(e.into()));
        }

        let mut table = Table::new(vec!["NAME", "SOURCE", "PATH"]);
        for listed in found {
            table.add_row(vec![
                listed.environment.name().to_string(),
                listed.source.to_string(),
                listed.environment.root().display().to_string(),
            ]);
        }
        Ok(table.render())
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let found = self.collect();

        if found.is_empty() && !self.args.json {
            ui.message("No environments found.");
            ui.show_hint(
                "Set base_dir or search_roots in the config file, or run `venvy create <NAME>`",
            );
            return Ok(CommandResult::success());
        }

        println!("{}", self.render(&found)?);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{EnvironmentSource, Marker};
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn make_env(root: &Path) {
        let script = Marker::default().activate_script(root);
        fs::create_dir_all(script.parent().unwrap()).unwrap();
        fs::write(script, "").unwrap();
    }

    fn fixture() -> (TempDir, Settings) {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("envs");
        let projects = temp.path().join("projects");
        make_env(&base.join("zeta"));
        make_env(&base.join("alpha"));
        make_env(&projects.join("web"));
        let settings = Settings {
            base_dir: Some(base),
            search_roots: vec![projects],
            ..Settings::default()
        };
        (temp, settings)
    }

    #[test]
    fn collect_sorts_named_first() {
        let (_temp, settings) = fixture();
        let cmd = ListCommand::new(&settings, ListArgs::default());

        let names: Vec<_> = cmd
            .collect()
            .iter()
            .map(|l| (l.source, l.environment.name().to_string()))
            .collect();
        assert_eq!(
            names,
            vec![
                (EnvironmentSource::Named, "alpha".to_string()),
                (EnvironmentSource::Named, "zeta".to_string()),
                (EnvironmentSource::Project, "web".to_string()),
            ]
        );
    }

    #[test]
    fn table_lists_every_environment() {
        let (_temp, settings) = fixture();
        let cmd = ListCommand::new(&settings, ListArgs::default());
        let output = cmd.render(&cmd.collect()).unwrap();

        assert!(output.contains("NAME"));
        assert!(output.contains("alpha"));
        assert!(output.contains("project"));
        assert_eq!(output.lines().count(), 7);
    }

    #[test]
    fn json_output_is_an_array() {
        let (_temp, settings) = fixture();
        let cmd = ListCommand::new(&settings, ListArgs { json: true });
        let output = cmd.render(&cmd.collect()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["name"], "alpha");
        assert_eq!(entries[0]["source"], "named");
    }

    #[test]
    fn empty_listing_is_reported_on_ui() {
        let settings = Settings::default();
        let cmd = ListCommand::new(&settings, ListArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 0);
        assert!(ui.has_message("No environments found"));
    }
}
