//! Read-only enumeration of known environments.
//!
//! Two places are scanned:
//! - immediate children of the base directory (named environments)
//! - each search root, one or two levels deep (project-local environments)
//!
//! Project environments that live under the base directory are dropped so
//! nothing is reported twice.

use serde::Serialize;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::config::Settings;

use super::marker::{EnvironmentRef, Marker};

/// Deepest level below a search root at which projects are recognized.
const SEARCH_ROOT_MAX_DEPTH: usize = 2;

/// Where a listed environment was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentSource {
    /// Directly under the base directory.
    Named,
    /// Under one of the project search roots.
    Project,
}

impl std::fmt::Display for EnvironmentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named => write!(f, "named"),
            Self::Project => write!(f, "project"),
        }
    }
}

/// An environment reported by [`list_environments`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedEnvironment {
    /// Where it was found.
    pub source: EnvironmentSource,
    /// The environment itself.
    #[serde(flatten)]
    pub environment: EnvironmentRef,
}

/// Enumerate named and project-local environments.
///
/// Ordering is whatever the filesystem yields; callers that display the
/// result should sort it.
pub fn list_environments(settings: &Settings) -> Vec<ListedEnvironment> {
    let mut found = Vec::new();

    let base = settings
        .base_dir
        .as_deref()
        .and_then(|dir| dunce::canonicalize(dir).ok());

    if let Some(base) = &base {
        found.extend(
            list_named(base, &settings.marker)
                .into_iter()
                .map(|environment| ListedEnvironment {
                    source: EnvironmentSource::Named,
                    environment,
                }),
        );
    }

    for root in &settings.search_roots {
        for environment in list_projects(root, &settings.marker) {
            if base
                .as_ref()
                .is_some_and(|b| environment.root().starts_with(b))
            {
                tracing::debug!(
                    "Skipping {} (inside base directory)",
                    environment.root().display()
                );
                continue;
            }
            found.push(ListedEnvironment {
                source: EnvironmentSource::Project,
                environment,
            });
        }
    }

    found
}

/// Environments exactly one level below `base`.
pub fn list_named(base: &Path, marker: &Marker) -> Vec<EnvironmentRef> {
    let entries = match std::fs::read_dir(base) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Cannot read base directory {}: {}", base.display(), e);
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| (entry.path(), entry.file_name()))
        .filter(|(path, _)| path.is_dir() && marker.is_present(path))
        .filter_map(|(path, name)| EnvironmentRef::named(&path, &name.to_string_lossy()))
        .collect()
}

/// Environments one or two levels below a search root.
pub fn list_projects(root: &Path, marker: &Marker) -> Vec<EnvironmentRef> {
    if !root.is_dir() {
        tracing::debug!("Search root {} does not exist", root.display());
        return Vec::new();
    }

    WalkDir::new(root)
        .min_depth(1)
        .max_depth(SEARCH_ROOT_MAX_DEPTH)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || (entry.file_type().is_dir() && !is_hidden(entry))
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| marker.is_present(entry.path()))
        .filter_map(|entry| EnvironmentRef::from_root(entry.path()))
        .collect()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
