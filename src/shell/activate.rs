//! Activation snippets.
//!
//! A child process cannot change its parent shell's environment, so venvy
//! prints the command that does and the shell hook evaluates it.

use std::path::{Path, PathBuf};

use crate::environment::{EnvironmentRef, Marker};

use super::platform::ShellKind;

/// Activation script for `shell` inside an environment.
pub fn activation_script(env: &EnvironmentRef, marker: &Marker, shell: ShellKind) -> PathBuf {
    let script = marker.activate_script(env.root());
    match shell {
        ShellKind::Fish => script.with_file_name("activate.fish"),
        ShellKind::Bash | ShellKind::Zsh | ShellKind::Posix => script,
    }
}

/// The command a shell should evaluate to activate `env`.
pub fn activation_command(env: &EnvironmentRef, marker: &Marker, shell: ShellKind) -> String {
    let script = quote_path(&activation_script(env, marker, shell));
    match shell {
        ShellKind::Bash | ShellKind::Zsh | ShellKind::Fish => format!("source {}", script),
        ShellKind::Posix => format!(". {}", script),
    }
}

fn quote_path(path: &Path) -> String {
    let raw = path.to_string_lossy();
    shlex::try_quote(&raw).map_or_else(|_| raw.to_string(), |q| q.into_owned())
}
