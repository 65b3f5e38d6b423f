//! Environment marker convention and environment references.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Default name of the environment directory inside a project.
pub const DEFAULT_ENV_DIR: &str = ".venv";

/// The fixed relative layout that marks an activatable environment:
/// `<root>/<env_dir>/bin/activate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    env_dir: String,
}

impl Default for Marker {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_DIR)
    }
}

impl Marker {
    /// Create a marker for the given environment directory name.
    pub fn new(env_dir: impl Into<String>) -> Self {
        Self {
            env_dir: env_dir.into(),
        }
    }

    /// Name of the environment directory (e.g. `.venv`).
    pub fn env_dir(&self) -> &str {
        &self.env_dir
    }

    /// Marker path relative to an environment root.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(&self.env_dir).join("bin").join("activate")
    }

    /// The environment directory beneath `root`.
    pub fn env_path(&self, root: &Path) -> PathBuf {
        root.join(&self.env_dir)
    }

    /// The activation script beneath `root`.
    pub fn activate_script(&self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }

    /// Whether `root` holds the marker as a regular file.
    pub fn is_present(&self, root: &Path) -> bool {
        self.activate_script(root).is_file()
    }
}

/// A discovered environment.
///
/// `root` is the canonical directory that *contains* the marker, not the
/// environment directory itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentRef {
    root: PathBuf,
    name: String,
}

impl EnvironmentRef {
    /// Build a reference from an already-canonical root directory.
    pub fn new(root: PathBuf) -> Self {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        Self { root, name }
    }

    /// Canonicalize `root` and build a reference.
    ///
    /// Returns `None` if the path cannot be canonicalized or is not a directory.
    pub fn from_root(root: &Path) -> Option<Self> {
        let root = dunce::canonicalize(root).ok()?;
        if !root.is_dir() {
            return None;
        }
        Some(Self::new(root))
    }

    /// Canonicalize `root` but keep `name` as the display name.
    ///
    /// Named environments are known by their entry under the base directory,
    /// even when that entry is a symlink to a directory called something else.
    pub fn named(root: &Path, name: &str) -> Option<Self> {
        let mut env = Self::from_root(root)?;
        env.name = name.to_string();
        Some(env)
    }

    /// Directory containing the marker.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Display name (base name of the root).
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_marker_uses_dot_venv() {
        let marker = Marker::default();
        assert_eq!(marker.env_dir(), ".venv");
        assert_eq!(
            marker.relative_path(),
            Path::new(".venv").join("bin").join("activate")
        );
    }

    #[test]
    fn marker_requires_regular_file() {
        let temp = TempDir::new().unwrap();
        let marker = Marker::default();
        assert!(!marker.is_present(temp.path()));

        // A directory at the marker path does not count.
        fs::create_dir_all(marker.activate_script(temp.path())).unwrap();
        assert!(!marker.is_present(temp.path()));
    }

    #[test]
    fn marker_detects_activate_script() {
        let temp = TempDir::new().unwrap();
        let marker = Marker::new("env");
        let script = marker.activate_script(temp.path());
        fs::create_dir_all(script.parent().unwrap()).unwrap();
        fs::write(&script, "").unwrap();

        assert!(marker.is_present(temp.path()));
        assert_eq!(marker.env_path(temp.path()), temp.path().join("env"));
    }

    #[test]
    fn name_is_base_name_of_root() {
        let env = EnvironmentRef::new(PathBuf::from("/work/app"));
        assert_eq!(env.name(), "app");
        assert_eq!(env.root(), Path::new("/work/app"));
    }

    #[test]
    fn from_root_rejects_missing_directory() {
        let temp = TempDir::new().unwrap();
        assert!(EnvironmentRef::from_root(&temp.path().join("missing")).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn named_keeps_link_name() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("python-3.12");
        fs::create_dir(&target).unwrap();
        let link = temp.path().join("api");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let env = EnvironmentRef::named(&link, "api").unwrap();
        assert_eq!(env.name(), "api");
        assert_eq!(env.root(), dunce::canonicalize(&target).unwrap());
        assert_eq!(EnvironmentRef::from_root(&link).unwrap().name(), "python-3.12");
    }

    #[test]
    fn from_root_canonicalizes() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("proj");
        fs::create_dir(&nested).unwrap();

        let env = EnvironmentRef::from_root(&nested.join("..").join("proj")).unwrap();
        assert_eq!(env.root(), dunce::canonicalize(&nested).unwrap());
        assert_eq!(env.name(), "proj");
    }
}
