//! External program execution.
//!
//! The environment tool is spawned directly (no intermediate shell) so that
//! user-supplied pass-through arguments reach it verbatim.

use crate::error::{Result, VenvyError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing an external program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Captured stdout and stderr joined for display.
    pub fn combined_output(&self) -> String {
        let mut out = self.stdout.trim_end().to_string();
        let err = self.stderr.trim_end();
        if !err.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(err);
        }
        out
    }
}

/// Options for program execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout and stderr (if false, both inherit from the parent).
    pub capture: bool,
}

/// Execute `program` with `args`.
///
/// A non-zero exit is not an error here; inspect [`CommandResult::success`].
///
/// # Errors
///
/// Returns `ExternalToolMissing` if the program cannot be found and `Io`
/// for any other spawn failure.
pub fn execute(program: &Path, args: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    if options.capture {
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
    } else {
        // stdout may be eval'd by the shell hook, so tool chatter goes to stderr.
        cmd.stdout(std::io::stderr());
        cmd.stderr(Stdio::inherit());
    }

    tracing::debug!("Running {}", display_command(program, args));

    let output = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VenvyError::ExternalToolMissing {
                tool: program.display().to_string(),
            }
        } else {
            VenvyError::Io(e)
        }
    })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    tracing::debug!(
        "{} exited with {:?} after {:?}",
        program.display(),
        output.status.code(),
        duration
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Render a program invocation as a copy-pasteable command line.
pub fn display_command(program: &Path, args: &[String]) -> String {
    let program = program.to_string_lossy();
    std::iter::once(program.as_ref())
        .chain(args.iter().map(String::as_str))
        .map(|part| shlex::try_quote(part).map_or_else(|_| part.to_string(), |q| q.into_owned()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh() -> PathBuf {
        PathBuf::from("/bin/sh")
    }

    fn script(body: &str) -> Vec<String> {
        vec!["-c".to_string(), body.to_string()]
    }

    fn captured() -> CommandOptions {
        CommandOptions {
            capture: true,
            ..Default::default()
        }
    }

    #[test]
    fn execute_successful_program() {
        let result = execute(&sh(), &script("echo hello"), &captured()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_program() {
        let result = execute(&sh(), &script("echo oops >&2; exit 3"), &captured()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(result.stderr.contains("oops"));
    }

    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            capture: true,
        };

        let result = execute(&sh(), &script("pwd"), &options).unwrap();

        assert!(result.success);
        let reported = PathBuf::from(result.stdout.trim());
        assert_eq!(
            dunce::canonicalize(reported).unwrap(),
            dunce::canonicalize(temp.path()).unwrap()
        );
    }

    #[test]
    fn missing_program_is_tool_missing() {
        let err = execute(
            Path::new("/definitely/not/a/venvy-tool"),
            &[],
            &captured(),
        )
        .unwrap_err();
        assert!(matches!(err, VenvyError::ExternalToolMissing { .. }));
    }

    #[test]
    fn combined_output_joins_streams() {
        let result = CommandResult::failure(
            Some(1),
            "out\n".to_string(),
            "err\n".to_string(),
            Duration::ZERO,
        );
        assert_eq!(result.combined_output(), "out\nerr");
    }

    #[test]
    fn display_command_quotes_arguments() {
        let shown = display_command(
            Path::new("uv"),
            &["venv".to_string(), "/tmp/my env".to_string()],
        );
        assert_eq!(shown, "uv venv '/tmp/my env'");
    }
}
