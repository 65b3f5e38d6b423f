//! venvy - find, activate, list, and create Python virtual environments.
//!
//! venvy locates the nearest environment marker (`.venv/bin/activate` by
//! default) above a directory, looks up named environments under a base
//! directory, and prints the shell command that activates them. A small
//! shell hook (`venvy init <shell>`) evaluates that command in the calling
//! shell.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and resolved settings
//! - [`environment`] - Location, resolution, listing, and creation
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Activation snippets, shell hooks, and external programs
//! - [`ui`] - Spinners, tables, and terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use venvy::config::Settings;
//! use venvy::environment::{ResolutionRequest, Resolver};
//!
//! let settings = Settings::default();
//! let resolver = Resolver::new(&settings);
//! let request = resolver.classify(Some("./app"), Path::new("/work")).unwrap();
//! assert_eq!(request, ResolutionRequest::PathLike("./app".to_string()));
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{Result, VenvyError};
