//! Environment discovery, resolution, listing, and creation.
//!
//! An environment is any directory holding the [`Marker`]
//! (`<env_dir>/bin/activate`). It is found one of three ways:
//!
//! 1. Upward search from the working directory or a given path
//! 2. By name under the configured base directory
//! 3. By enumerating the base directory and project search roots

pub mod create;
pub mod listing;
pub mod locator;
pub mod marker;
pub mod resolver;

pub use create::{create_environment, validate_name};
pub use listing::{
    list_environments, list_named, list_projects, EnvironmentSource, ListedEnvironment,
};
pub use locator::{Locate, MarkerLocator};
pub use marker::{EnvironmentRef, Marker, DEFAULT_ENV_DIR};
pub use resolver::{is_path_like, ResolutionRequest, Resolver};
