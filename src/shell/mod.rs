//! Shell integration and external program execution.

pub mod activate;
pub mod command;
pub mod hook;
pub mod lookup;
pub mod platform;

pub use activate::{activation_command, activation_script};
pub use command::{display_command, execute, CommandOptions, CommandResult};
pub use hook::{hook_script, install_line};
pub use lookup::{
    find_program, is_executable, parse_system_path, resolve_explicit_path, resolve_tool_path,
};
pub use platform::{detect_shell, ShellKind};
