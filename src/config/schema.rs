//! On-disk configuration schema.
//!
//! ```yaml
//! base_dir: ~/venvs
//! cache_dir: ~/.cache
//! search_roots: [~/projects, ~/src]
//! env_dir: .venv
//! tool:
//!   program: uv
//!   args: [venv]
//! ```
//!
//! Every key is optional. Paths may start with `~`.

use serde::Deserialize;

/// Contents of `config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Directory holding named environments.
    #[serde(default)]
    pub base_dir: Option<String>,

    /// Cache directory; named environments default to `<cache_dir>/venvs`.
    #[serde(default)]
    pub cache_dir: Option<String>,

    /// Directories scanned by `venvy list` for project environments.
    #[serde(default)]
    pub search_roots: Option<Vec<String>>,

    /// Environment directory name inside a project (default `.venv`).
    #[serde(default)]
    pub env_dir: Option<String>,

    /// External environment tool.
    #[serde(default)]
    pub tool: Option<ToolConfig>,
}

/// `tool:` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Program name or path.
    #[serde(default)]
    pub program: Option<String>,

    /// Arguments placed before the target directory.
    #[serde(default)]
    pub args: Option<Vec<String>>,
}
