//! Resolved, immutable settings.
//!
//! [`Settings`] is built once at startup from the config file, environment
//! variables, and command-line overrides, then passed by reference to every
//! operation. Nothing re-reads configuration after that.

use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::environment::Marker;
use crate::error::Result;

use super::loader::load_config;
use super::schema::ConfigFile;

/// Environment variable overriding the cache directory.
pub const CACHE_DIR_ENV: &str = "VENVY_CACHE_DIR";

/// Environment variable overriding the search roots (platform path list).
pub const SEARCH_ROOTS_ENV: &str = "VENVY_SEARCH_ROOTS";

/// Subdirectory of the cache directory used when no base directory is set.
const DEFAULT_BASE_SUBDIR: &str = "venvs";

/// External environment tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSettings {
    /// Program name (looked up on PATH) or path.
    pub program: String,
    /// Arguments placed before the target directory.
    pub args: Vec<String>,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            program: "uv".to_string(),
            args: vec!["venv".to_string()],
        }
    }
}

/// Values given on the command line (or their `env` fallbacks via clap).
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Explicit base directory.
    pub base_dir: Option<PathBuf>,
}

/// Resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Directory holding named environments, if one could be derived.
    pub base_dir: Option<PathBuf>,
    /// Ordered project search roots for listing.
    pub search_roots: Vec<PathBuf>,
    /// Environment marker layout.
    pub marker: Marker,
    /// External environment tool.
    pub tool: ToolSettings,
    /// Config file the settings were read from.
    pub config_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the real environment.
    ///
    /// # Errors
    ///
    /// Fails if an explicit config file is missing or any config file is invalid.
    pub fn load(overrides: &SettingsOverrides) -> Result<Self> {
        let (file, path) = load_config(overrides.config.as_deref())?;
        Ok(Self::resolve_with_env(file, path, overrides, |key| {
            std::env::var_os(key)
        }))
    }

    /// Build settings with a custom environment variable lookup.
    ///
    /// Precedence for the base directory: override, then `base_dir`, then
    /// `<cache>/venvs` where the cache comes from `VENVY_CACHE_DIR`, then
    /// `cache_dir`, then the platform cache directory.
    pub fn resolve_with_env<F>(
        file: ConfigFile,
        config_path: Option<PathBuf>,
        overrides: &SettingsOverrides,
        env_fn: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let cache_dir = env_fn(CACHE_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| file.cache_dir.as_deref().map(expand_path))
            .or_else(dirs::cache_dir);

        let base_dir = overrides
            .base_dir
            .clone()
            .or_else(|| file.base_dir.as_deref().map(expand_path))
            .or_else(|| cache_dir.map(|c| c.join(DEFAULT_BASE_SUBDIR)));

        let search_roots = match env_fn(SEARCH_ROOTS_ENV).filter(|v| !v.is_empty()) {
            Some(value) => std::env::split_paths(&value).collect(),
            None => file
                .search_roots
                .unwrap_or_default()
                .iter()
                .map(|root| expand_path(root))
                .collect(),
        };

        let marker = file.env_dir.map(Marker::new).unwrap_or_default();

        let mut tool = ToolSettings::default();
        if let Some(section) = file.tool {
            if let Some(program) = section.program {
                tool.program = program;
            }
            if let Some(args) = section.args {
                tool.args = args;
            }
        }

        let settings = Self {
            base_dir,
            search_roots,
            marker,
            tool,
            config_path,
        };
        tracing::debug!("Resolved settings: {:?}", settings);
        settings
    }

    /// Base directory, if configured and present on disk.
    pub fn existing_base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref().filter(|dir| dir.is_dir())
    }
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}
