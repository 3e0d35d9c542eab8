//! Shell command execution.

pub mod command;
pub mod platform;

pub use command::{execute_merged, CommandResult};
pub use platform::{is_ci, merge_stderr_script, shell_flag, shell_program};
