//! Shell detection.

use clap::ValueEnum;
use std::path::Path;

/// Shells venvy can emit activation snippets and hooks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShellKind {
    Bash,
    Zsh,
    Fish,
    /// Any other POSIX `sh`-compatible shell.
    Posix,
}

impl ShellKind {
    /// Parse shell kind from an executable path or name.
    ///
    /// Unknown shells are treated as POSIX.
    pub fn from_executable(exe: &str) -> Self {
        let name = Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "bash" => Self::Bash,
            "zsh" => Self::Zsh,
            "fish" => Self::Fish,
            _ => Self::Posix,
        }
    }

    /// Shell name as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Fish => "fish",
            Self::Posix => "posix",
        }
    }
}

impl std::fmt::Display for ShellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Detect the user's shell from `$SHELL`.
pub fn detect_shell() -> ShellKind {
    std::env::var("SHELL")
        .map(|shell| ShellKind::from_executable(&shell))
        .unwrap_or(ShellKind::Posix)
}
