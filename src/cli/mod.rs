//! Command-line interface for daykit.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, NewArgs, ReadmeArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
