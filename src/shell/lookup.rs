//! Locating programs on PATH.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command; its behavior varies across systems.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for candidate in candidates(dir, tool) {
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(windows)]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool), dir.join(format!("{}.exe", tool))]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool)]
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Find a program by name on the system PATH.
///
/// A program given with a path separator is resolved against the current
/// directory instead, and returned absolute so it can be spawned from any
/// working directory.
pub fn find_program(program: &str) -> Option<PathBuf> {
    if program.chars().any(std::path::is_separator) {
        let cwd = std::env::current_dir().ok()?;
        return resolve_explicit_path(program, &cwd);
    }
    resolve_tool_path(program, &parse_system_path())
}

/// Resolve a program path containing a separator against `cwd`.
///
/// `~` is expanded first. The result is absolute whenever `cwd` is.
pub fn resolve_explicit_path(program: &str, cwd: &Path) -> Option<PathBuf> {
    let path = cwd.join(shellexpand::tilde(program).as_ref());
    (path.is_file() && is_executable(&path)).then_some(path)
}
