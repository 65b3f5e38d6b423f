//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands print their payload to
//! stdout and everything else through the [`UserInterface`](crate::ui::UserInterface),
//! which writes to stderr.

pub mod activate;
pub mod completions;
pub mod config;
pub mod create;
pub mod dispatcher;
pub mod init;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
