//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, DaykitConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Usage line printed when a unit command is missing its day.
pub const UNIT_USAGE: &str = "Usage: daykit <new|readme> <day>";

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: None,
        }
    }

    /// Use an explicit config file instead of `.daykit/config.yml`.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn config(&self) -> Result<DaykitConfig> {
        load_config(&self.project_root, self.config_path.as_deref())
    }

    /// Dispatch and execute a command.
    ///
    /// Configuration is loaded only for commands that touch the project.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::New(args) => {
                let cmd =
                    super::new::NewCommand::new(&self.project_root, self.config()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Readme(args) => {
                let cmd = super::readme::ReadmeCommand::new(
                    &self.project_root,
                    self.config()?,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(
                    &self.project_root,
                    self.config()?,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
