//! Error types for daykit operations.
//!
//! This module defines [`DaykitError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DaykitError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DaykitError::Other`) for unexpected errors
//! - Subprocess exit codes are data ([`RunStatus`](crate::report::RunStatus)),
//!   not errors; only a failure to spawn the runner is an error

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for daykit operations.
#[derive(Debug, Error)]
pub enum DaykitError {
    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Neither the project nor the built-in templates provide this template.
    #[error("Template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// A `${name}` slot in a template has no value.
    #[error("Unresolved template variable: ${{{name}}}")]
    UnresolvedVariable { name: String },

    /// A `${` in a template is never closed.
    #[error("Unterminated template variable: ${{{name}")]
    UnterminatedVariable { name: String },

    /// The runner command could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The directory holding the unit subdirectories does not exist.
    #[error("Solution root not found: {path}")]
    SolutionRootMissing { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for daykit operations.
pub type Result<T> = std::result::Result<T, DaykitError>;
