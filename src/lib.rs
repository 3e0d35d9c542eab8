//! daykit - Scaffold, register, and report daily puzzle solutions.
//!
//! A puzzle workspace keeps one directory per day under a solution crate.
//! daykit creates a day's skeleton, activates its module line, points the
//! binary's dispatcher at it, captures the output of both parts into a
//! per-day report, and checks that every day has one.
//!
//! # Modules
//!
//! - [`checker`] - Report consistency checking
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and template interpolation
//! - [`error`] - Error types and result aliases
//! - [`report`] - Running both parts and writing reports
//! - [`scaffold`] - Skeleton creation and registry patching
//! - [`shell`] - Shell command execution
//! - [`templates`] - Project and built-in templates
//! - [`ui`] - Spinners and terminal output
//! - [`unit`] - Day numbers, padding, and paths
//!
//! # Example
//!
//! ```
//! use daykit::config::{render, TemplateContext};
//!
//! let ctx = TemplateContext::new()
//!     .with("day", "7")
//!     .with("padded_day", "07");
//! let line = render("pub mod day${padded_day};", &ctx).unwrap();
//! assert_eq!(line, "pub mod day07;");
//! ```

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod scaffold;
pub mod shell;
pub mod templates;
pub mod ui;
pub mod unit;

pub use error::{DaykitError, Result};
