//! Error types for CLI commands
//!
//! Structured errors for command execution. Library failures are wrapped
//! as-is so their messages (which name the offending manifest entry) reach
//! the user unchanged.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during command execution
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// Manifest loading or validation failed
    #[error(transparent)]
    Manifest(#[from] hookpin_core::Error),

    /// One or more manifests did not validate
    #[error("Validation failed: {failed} out of {total} file(s)")]
    ValidationFailed {
        /// Number of files that failed
        failed: usize,
        /// Total number of files checked
        total: usize,
    },

    /// `fmt --check` found a file that is not normalised
    #[error("{} is not formatted", .0.display())]
    NotFormatted(PathBuf),

    /// No hook with the requested id
    #[error("Hook '{0}' not found")]
    HookNotFound(String),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;
