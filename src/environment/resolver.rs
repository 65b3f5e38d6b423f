//! Target resolution.
//!
//! Turns the optional token a user passes to `venvy activate` into an
//! environment. A token is classified in this order (first match wins):
//!
//! 1. No token: look in the working directory, then walk upwards
//! 2. Contains a path separator, or is `.` / `..`: treat as a path
//! 3. A base directory exists: look up a named environment, falling back to
//!    a local directory of the same name when the named marker is missing
//! 4. Names a local directory: treat as a path
//! 5. Anything else cannot be resolved

use std::path::Path;

use crate::config::Settings;
use crate::error::{Result, VenvyError};

use super::locator::{Locate, MarkerLocator};
use super::marker::EnvironmentRef;

/// The parsed intent behind a user token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionRequest {
    /// No token given.
    Implicit,
    /// A filesystem path to search upwards from.
    PathLike(String),
    /// A name to look up under the base directory.
    NamedLookup(String),
}

/// Whether a token must be read as a path regardless of what exists on disk.
pub fn is_path_like(token: &str) -> bool {
    token == "." || token == ".." || token.chars().any(std::path::is_separator)
}

/// Resolves user tokens to environments.
pub struct Resolver<'a, L: Locate> {
    settings: &'a Settings,
    locator: L,
}

impl<'a> Resolver<'a, MarkerLocator<'a>> {
    /// Create a resolver that walks the real filesystem.
    pub fn new(settings: &'a Settings) -> Self {
        Self::with_locator(settings, MarkerLocator::new(&settings.marker))
    }
}

impl<'a, L: Locate> Resolver<'a, L> {
    /// Create a resolver with a custom locator.
    pub fn with_locator(settings: &'a Settings, locator: L) -> Self {
        Self { settings, locator }
    }

    /// Classify a token without resolving it.
    ///
    /// # Errors
    ///
    /// Returns `Unresolvable` for a bare word when there is neither a base
    /// directory nor a local directory of that name.
    pub fn classify(&self, token: Option<&str>, cwd: &Path) -> Result<ResolutionRequest> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => return Ok(ResolutionRequest::Implicit),
        };

        if is_path_like(token) {
            return Ok(ResolutionRequest::PathLike(token.to_string()));
        }

        if self.base_dir().is_some() {
            return Ok(ResolutionRequest::NamedLookup(token.to_string()));
        }

        if cwd.join(token).is_dir() {
            return Ok(ResolutionRequest::PathLike(token.to_string()));
        }

        Err(VenvyError::Unresolvable {
            token: token.to_string(),
        })
    }

    /// Resolve a token to an environment.
    ///
    /// # Errors
    ///
    /// - `PathNotFound` if a path-like token is not an existing directory
    /// - `EnvironmentNotFound` if an upward search finds nothing
    /// - `NamedEnvironmentNotFound` if a named lookup misses with no fallback
    /// - `Unresolvable` as described in [`Resolver::classify`]
    pub fn resolve(&self, token: Option<&str>, cwd: &Path) -> Result<EnvironmentRef> {
        let request = self.classify(token, cwd)?;
        tracing::debug!("Resolving {:?} from {}", request, cwd.display());

        match request {
            ResolutionRequest::Implicit => self.resolve_implicit(cwd),
            ResolutionRequest::PathLike(value) => self.resolve_path(&value, cwd),
            ResolutionRequest::NamedLookup(name) => {
                if let Some(env) = self.lookup_named(&name) {
                    return Ok(env);
                }
                if cwd.join(&name).is_dir() {
                    tracing::debug!("No named environment '{}', using local directory", name);
                    return self.resolve_path(&name, cwd);
                }
                Err(VenvyError::NamedEnvironmentNotFound { name })
            }
        }
    }

    fn resolve_implicit(&self, cwd: &Path) -> Result<EnvironmentRef> {
        if self.settings.marker.is_present(cwd) {
            tracing::debug!("Marker found directly in {}", cwd.display());
            if let Some(env) = EnvironmentRef::from_root(cwd) {
                return Ok(env);
            }
        }

        self.locator
            .locate(cwd)
            .ok_or_else(|| VenvyError::EnvironmentNotFound {
                start: cwd.to_path_buf(),
            })
    }

    fn resolve_path(&self, value: &str, cwd: &Path) -> Result<EnvironmentRef> {
        let path = cwd.join(value);
        if !path.is_dir() {
            return Err(VenvyError::PathNotFound {
                path: value.to_string(),
            });
        }

        self.locator
            .locate(&path)
            .ok_or(VenvyError::EnvironmentNotFound { start: path })
    }

    fn lookup_named(&self, name: &str) -> Option<EnvironmentRef> {
        let root = self.base_dir()?.join(name);
        if !self.settings.marker.is_present(&root) {
            tracing::debug!("No marker under {}", root.display());
            return None;
        }
        EnvironmentRef::named(&root, name)
    }

    fn base_dir(&self) -> Option<&Path> {
        self.settings.existing_base_dir()
    }
}
