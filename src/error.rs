//! Error types for venvy operations.
//!
//! This module defines [`VenvyError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure a user can cause (bad token, missing environment, broken
//!   tool) has its own variant with an actionable message
//! - None of them are fatal: the binary prints the message and exits 1
//! - Use `anyhow::Error` (via `VenvyError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for venvy operations.
#[derive(Debug, Error)]
pub enum VenvyError {
    /// No environment marker in the start directory or any ancestor.
    #[error("No virtual environment found in {start} or any parent directory")]
    EnvironmentNotFound { start: PathBuf },

    /// A path-like argument does not name an existing directory.
    #[error("Directory not found: {path}")]
    PathNotFound { path: String },

    /// Named lookup missed and no local directory fallback applied.
    #[error("No environment named '{name}'")]
    NamedEnvironmentNotFound { name: String },

    /// Bare token with no base directory and no matching local directory.
    #[error("Cannot resolve '{token}': not a directory and no base directory is configured")]
    Unresolvable { token: String },

    /// Creation target already exists.
    #[error("Environment '{name}' already exists at {path}")]
    AlreadyExists { name: String, path: PathBuf },

    /// Creation name is not a single path component.
    #[error("Invalid environment name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The environment tool exited unsuccessfully.
    #[error("Environment tool '{tool}' failed with exit code {code:?}")]
    ExternalToolFailure { tool: String, code: Option<i32> },

    /// The environment tool is not on PATH.
    #[error("Environment tool '{tool}' not found on PATH")]
    ExternalToolMissing { tool: String },

    /// An operation needs the base directory but none could be derived.
    #[error("No base directory configured for named environments")]
    BaseDirNotConfigured,

    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VenvyError {
    /// A follow-up suggestion to show under the error, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::EnvironmentNotFound { .. } => {
                Some("Create one with `uv venv`, or pass a project path or environment name")
            }
            Self::NamedEnvironmentNotFound { .. } => {
                Some("Run `venvy list` to see available environments")
            }
            Self::Unresolvable { .. } | Self::BaseDirNotConfigured => {
                Some("Set `base_dir` in the config file or export VENVY_BASE_DIR")
            }
            Self::ExternalToolMissing { .. } => {
                Some("Install the tool or set `tool.program` in the config file")
            }
            _ => None,
        }
    }
}

/// Result type alias for venvy operations.
pub type Result<T> = std::result::Result<T, VenvyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_not_found_mentions_name() {
        let err = VenvyError::NamedEnvironmentNotFound {
            name: "data".to_string(),
        };
        assert_eq!(err.to_string(), "No environment named 'data'");
        assert!(err.hint().unwrap().contains("venvy list"));
    }

    #[test]
    fn tool_failure_reports_code() {
        let err = VenvyError::ExternalToolFailure {
            tool: "uv".to_string(),
            code: Some(2),
        };
        assert!(err.to_string().contains("uv"));
        assert!(err.to_string().contains('2'));
        assert!(err.hint().is_none());
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: VenvyError = io.into();
        assert!(matches!(err, VenvyError::Io(_)));
    }
}
