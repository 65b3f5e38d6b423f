//! Configuration file discovery and loading.

use crate::config::schema::ConfigFile;
use crate::error::{Result, VenvyError};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config location: `<config_dir>/venvy/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("venvy").join("config.yml"))
}

/// Load the config file, if there is one.
///
/// An explicit path must exist. The default path is optional; when it is
/// missing the returned config is empty and the path is `None`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `explicit` does not exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(explicit: Option<&Path>) -> Result<(ConfigFile, Option<PathBuf>)> {
    if let Some(path) = explicit {
        return Ok((load_config_file(path)?, Some(path.to_path_buf())));
    }

    match default_config_path().filter(|p| p.is_file()) {
        Some(path) => Ok((load_config_file(&path)?, Some(path))),
        None => {
            tracing::debug!("No config file, using defaults");
            Ok((ConfigFile::default(), None))
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VenvyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VenvyError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`ConfigFile`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ConfigFile> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile =
        serde_yaml::from_str(content).map_err(|e| VenvyError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    if let Some(env_dir) = &config.env_dir {
        if env_dir.is_empty()
            || env_dir == "."
            || env_dir == ".."
            || env_dir.chars().any(std::path::is_separator)
        {
            return Err(VenvyError::ConfigParseError {
                path: source_path.to_path_buf(),
                message: format!("env_dir must be a single directory name, got '{}'", env_dir),
            });
        }
    }

    Ok(config)
}
