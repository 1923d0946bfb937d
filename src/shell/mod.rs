//! External process execution and tool lookup.

pub mod command;
pub mod lookup;

pub use command::{execute, execute_capture, CommandOptions, CommandResult};
pub use lookup::{find_python, is_executable, parse_system_path, resolve_tool_path};
