//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// daykit - Scaffold, register, and report daily puzzle solutions.
#[derive(Debug, Parser)]
#[command(name = "daykit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .daykit/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true, env = "DAYKIT_PROJECT")]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output (repeat for errors only)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a unit's skeleton and register it
    New(NewArgs),

    /// Run both parts of a unit and write its report
    Readme(ReadmeArgs),

    /// Verify every unit directory has a report
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NewArgs {
    /// Unit number (e.g. 7 for day07)
    pub day: Option<u32>,

    /// Show what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Fail when a registry lacks the unit's marker line
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `readme` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReadmeArgs {
    /// Unit number (e.g. 7 for day07)
    pub day: Option<u32>,

    /// Do not write the report when a part exits non-zero
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Stop at the first unit without a report
    #[arg(long)]
    pub fail_fast: bool,

    /// Output format (human, json)
    #[arg(long, default_value = "human")]
    pub format: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
