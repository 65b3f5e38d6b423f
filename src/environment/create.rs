//! Named environment creation.
//!
//! Creation delegates to the configured environment tool (`uv venv` by
//! default). The check for an existing target and the creation itself are
//! not atomic; two concurrent `venvy create` runs for the same name race.

use std::fs;
use std::path::{Component, Path};

use crate::config::Settings;
use crate::error::{Result, VenvyError};
use crate::shell::{display_command, execute, find_program, CommandOptions};
use crate::ui::UserInterface;

use super::marker::EnvironmentRef;

/// Check that `name` is usable as a single directory under the base directory.
///
/// Touches no filesystem state.
///
/// # Errors
///
/// Returns `InvalidName` for an empty name, `.`, `..`, or anything containing
/// a path separator.
pub fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name == "." || name == ".." {
        Some("name refers to a directory, not an environment")
    } else if name.chars().any(std::path::is_separator) {
        Some("name must not contain a path separator")
    } else if !matches!(
        Path::new(name).components().collect::<Vec<_>>().as_slice(),
        [Component::Normal(_)]
    ) {
        Some("name must be a single path component")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(VenvyError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Create the named environment `name` under the base directory.
///
/// Runs `<tool.program> <tool.args…> <root>/<env_dir> <extra_args…>` with
/// the new root as working directory. The tool's output is captured and
/// shown only on failure, unless the UI is verbose, in which case it is
/// streamed to stderr.
///
/// # Errors
///
/// - `InvalidName` if `name` fails [`validate_name`]
/// - `BaseDirNotConfigured` if no base directory could be derived
/// - `AlreadyExists` if `<base_dir>/<name>` exists
/// - `ExternalToolMissing` if the tool cannot be found
/// - `ExternalToolFailure` if the tool exits non-zero (the new root is removed)
pub fn create_environment(
    settings: &Settings,
    name: &str,
    extra_args: &[String],
    ui: &mut dyn UserInterface,
) -> Result<EnvironmentRef> {
    validate_name(name)?;

    let base_dir = settings
        .base_dir
        .as_deref()
        .ok_or(VenvyError::BaseDirNotConfigured)?;

    // The tool runs inside the new root, so relative paths would resolve twice.
    let root = std::path::absolute(base_dir.join(name))?;
    if root.symlink_metadata().is_ok() {
        return Err(VenvyError::AlreadyExists {
            name: name.to_string(),
            path: root,
        });
    }

    let program =
        find_program(&settings.tool.program).ok_or_else(|| VenvyError::ExternalToolMissing {
            tool: settings.tool.program.clone(),
        })?;
    tracing::debug!("Using environment tool at {}", program.display());

    fs::create_dir_all(&root)?;

    let mut args = settings.tool.args.clone();
    args.push(settings.marker.env_path(&root).display().to_string());
    args.extend(extra_args.iter().cloned());

    let options = CommandOptions {
        cwd: Some(root.clone()),
        capture: !ui.output_mode().shows_command_output(),
    };
    let command_line = display_command(&program, &args);

    let mut spinner = ui.start_spinner(&format!("Creating environment '{}'", name));
    let outcome = execute(&program, &args, &options);

    let result = match outcome {
        Ok(result) if result.success => result,
        Ok(result) => {
            spinner.finish_error(&format!("Failed to create '{}'", name));
            remove_partial(&root, ui);
            ui.show_error_block(&command_line, &result.combined_output(), None);
            return Err(VenvyError::ExternalToolFailure {
                tool: settings.tool.program.clone(),
                code: result.exit_code,
            });
        }
        Err(e) => {
            spinner.finish_error(&format!("Failed to create '{}'", name));
            remove_partial(&root, ui);
            return Err(e);
        }
    };

    tracing::debug!("Environment tool finished in {:?}", result.duration);
    spinner.finish_success(&format!("Created '{}'", name));

    if !settings.marker.is_present(&root) {
        ui.warning(&format!(
            "{} finished but {} is missing",
            settings.tool.program,
            settings.marker.activate_script(&root).display()
        ));
    }

    EnvironmentRef::named(&root, name).ok_or_else(|| VenvyError::PathNotFound {
        path: root.display().to_string(),
    })
}

fn remove_partial(root: &Path, ui: &mut dyn UserInterface) {
    if let Err(e) = fs::remove_dir_all(root) {
        tracing::debug!("Cleanup of {} failed: {}", root.display(), e);
        ui.warning(&format!("Could not remove {}: {}", root.display(), e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolSettings;
    use crate::environment::marker::Marker;
    use crate::ui::MockUI;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn valid_names_pass() {
        for name in ["api", "data-science", "py3.12", ".hidden"] {
            assert!(validate_name(name).is_ok(), "rejected {}", name);
        }
    }

    #[test]
    fn invalid_names_fail() {
        for name in ["", ".", "..", "a/b", "/abs", "trailing/"] {
            assert!(
                matches!(validate_name(name), Err(VenvyError::InvalidName { .. })),
                "accepted {:?}",
                name
            );
        }
    }

    #[test]
    fn invalid_name_is_checked_before_anything_else() {
        // No base dir and a missing tool: the name error must still win.
        let settings = Settings {
            tool: ToolSettings {
                program: "/definitely/not/a/tool".to_string(),
                args: vec![],
            },
            ..Settings::default()
        };
        let mut ui = MockUI::new();
        let err = create_environment(&settings, "../escape", &[], &mut ui).unwrap_err();
        assert!(matches!(err, VenvyError::InvalidName { .. }));
        assert!(ui.spinners().is_empty());
    }

    #[test]
    fn missing_base_dir_is_reported() {
        let settings = Settings::default();
        let mut ui = MockUI::new();
        let err = create_environment(&settings, "api", &[], &mut ui).unwrap_err();
        assert!(matches!(err, VenvyError::BaseDirNotConfigured));
    }

    #[test]
    fn existing_target_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("api")).unwrap();
        let settings = Settings {
            base_dir: Some(temp.path().to_path_buf()),
            ..Settings::default()
        };
        let mut ui = MockUI::new();

        let err = create_environment(&settings, "api", &[], &mut ui).unwrap_err();
        match err {
            VenvyError::AlreadyExists { name, path } => {
                assert_eq!(name, "api");
                assert_eq!(path, temp.path().join("api"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn missing_tool_leaves_nothing_behind() {
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            base_dir: Some(temp.path().to_path_buf()),
            tool: ToolSettings {
                program: "venvy-test-no-such-tool".to_string(),
                args: vec![],
            },
            ..Settings::default()
        };
        let mut ui = MockUI::new();

        let err = create_environment(&settings, "api", &[], &mut ui).unwrap_err();
        assert!(matches!(err, VenvyError::ExternalToolMissing { .. }));
        assert!(!temp.path().join("api").exists());
    }

    #[cfg(unix)]
    mod with_fake_tool {
        use super::*;

        const MAKE_ENV: &str = r#"mkdir -p "$1/bin" && touch "$1/bin/activate"
shift
printf '%s\n' "$@" > extra-args.txt
"#;

        /// Settings whose tool is `/bin/sh <script>`.
        fn settings_with_script(temp: &TempDir, body: &str) -> Settings {
            let script = temp.path().join("tool.sh");
            fs::write(&script, body).unwrap();
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
        fn creates_environment_with_marker() {
            let temp = TempDir::new().unwrap();
            let settings = settings_with_script(&temp, MAKE_ENV);
            let mut ui = MockUI::new();

            let env = create_environment(&settings, "api", &[], &mut ui).unwrap();

            let expected: PathBuf = dunce::canonicalize(temp.path().join("envs/api")).unwrap();
            assert_eq!(env.root(), expected);
            assert_eq!(env.name(), "api");
            assert!(Marker::default().is_present(env.root()));
            assert!(ui.warnings().is_empty());
            assert_eq!(
                ui.spinner_results(),
                vec![Ok("Created 'api'".to_string())]
            );
        }

        #[test]
        fn extra_args_pass_through_in_order() {
            let temp = TempDir::new().unwrap();
            let settings = settings_with_script(&temp, MAKE_ENV);
            let mut ui = MockUI::new();
            let extra = vec!["--python".to_string(), "3.12".to_string()];

            let env = create_environment(&settings, "ds", &extra, &mut ui).unwrap();

            let recorded = fs::read_to_string(env.root().join("extra-args.txt")).unwrap();
            assert_eq!(recorded, "--python\n3.12\n");
        }

        #[test]
        fn failing_tool_removes_root_and_shows_output() {
            let temp = TempDir::new().unwrap();
            let settings = settings_with_script(&temp, "echo 'no interpreter' >&2\nexit 2\n");
            let mut ui = MockUI::new();

            let err = create_environment(&settings, "api", &[], &mut ui).unwrap_err();

            match err {
                VenvyError::ExternalToolFailure { tool, code } => {
                    assert_eq!(tool, "/bin/sh");
                    assert_eq!(code, Some(2));
                }
                other => panic!("unexpected: {other:?}"),
            }
            assert!(!temp.path().join("envs/api").exists());
            let (command, output, _) = &ui.error_blocks()[0];
            assert!(command.contains("tool.sh"));
            assert!(output.contains("no interpreter"));
        }

        #[test]
        fn missing_marker_after_success_is_a_warning() {
            let temp = TempDir::new().unwrap();
            let settings = settings_with_script(&temp, "exit 0\n");
            let mut ui = MockUI::new();

            let env = create_environment(&settings, "empty", &[], &mut ui).unwrap();

            assert_eq!(env.name(), "empty");
            assert!(ui.has_warning("is missing"));
        }

        #[test]
        fn custom_env_dir_is_passed_to_tool() {
            let temp = TempDir::new().unwrap();
            let mut settings = settings_with_script(&temp, MAKE_ENV);
            settings.marker = Marker::new("venv");
            let mut ui = MockUI::new();

            let env = create_environment(&settings, "api", &[], &mut ui).unwrap();
            assert!(env.root().join("venv/bin/activate").is_file());
            assert!(ui.warnings().is_empty());
        }
    }
}
