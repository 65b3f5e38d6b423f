//! Upward search for an environment marker.
//!
//! Starting from a directory, walk the ancestors until one of them holds the
//! marker. The walk never looks sideways and keeps no cache, so every call
//! reflects the filesystem as it is now.

use std::path::Path;

use super::marker::{EnvironmentRef, Marker};

/// Something that can find the nearest environment above a directory.
///
/// The resolver depends on this trait rather than on [`MarkerLocator`]
/// directly so tests can observe (or forbid) the walk.
pub trait Locate {
    /// Find the nearest environment at or above `start`.
    ///
    /// Returns `None` when `start` is not an existing directory or when no
    /// ancestor holds the marker.
    fn locate(&self, start: &Path) -> Option<EnvironmentRef>;
}

/// Filesystem-backed [`Locate`] implementation.
#[derive(Debug, Clone)]
pub struct MarkerLocator<'a> {
    marker: &'a Marker,
}

impl<'a> MarkerLocator<'a> {
    /// Create a locator for the given marker layout.
    pub fn new(marker: &'a Marker) -> Self {
        Self { marker }
    }
}

impl Locate for MarkerLocator<'_> {
    fn locate(&self, start: &Path) -> Option<EnvironmentRef> {
        let mut current = match dunce::canonicalize(start) {
            Ok(path) if path.is_dir() => path,
            Ok(path) => {
                tracing::debug!("Start {} is not a directory", path.display());
                return None;
            }
            Err(e) => {
                tracing::debug!("Cannot canonicalize {}: {}", start.display(), e);
                return None;
            }
        };

        loop {
            tracing::trace!("Checking {}", current.display());
            if self.marker.is_present(&current) {
                return Some(EnvironmentRef::new(current));
            }

            let parent = match current.parent() {
                Some(parent) if parent != current => parent.to_path_buf(),
                _ => return None,
            };
            current = parent;
        }
    }
}
