//! Configuration loading for venvy.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Resolution into the immutable [`Settings`] record in [`settings`]
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use venvy::config::{ConfigFile, Settings, SettingsOverrides};
//!
//! let overrides = SettingsOverrides {
//!     base_dir: Some(PathBuf::from("/envs")),
//!     ..Default::default()
//! };
//! let settings = Settings::resolve_with_env(ConfigFile::default(), None, &overrides, |_| None);
//! assert_eq!(settings.base_dir, Some(PathBuf::from("/envs")));
//! assert_eq!(settings.tool.program, "uv");
//! ```
//!
//! # Configuration File Location
//!
//! `--config <path>` / `VENVY_CONFIG`, else `<config_dir>/venvy/config.yml`
//! when it exists.

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{default_config_path, load_config, load_config_file, parse_config};
pub use schema::{ConfigFile, ToolConfig};
pub use settings::{
    Settings, SettingsOverrides, ToolSettings, CACHE_DIR_ENV, SEARCH_ROOTS_ENV,
};
