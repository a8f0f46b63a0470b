//! Base error types for hookpin
//!
//! This module provides the foundation error types that all crates can use.
//! Schema problems carry an [`Entry`] so every message names the group or
//! hook it is about.

use crate::Entry;
use std::path::PathBuf;
use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reading a manifest or settings file
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a manifest file
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML
    #[error("Failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },

    /// A required key is absent
    #[error("{entry}: missing required field '{field}'")]
    MissingField { entry: Entry, field: &'static str },

    /// A key that must be a non-empty string is empty
    #[error("{entry}: field '{field}' must not be empty")]
    EmptyField { entry: Entry, field: &'static str },

    /// A group or hook (or the document itself) is not a mapping
    #[error("{entry}: must be a mapping")]
    NotAMapping { entry: Entry },

    /// A key holds a value of the wrong kind
    #[error("{entry}: field '{field}' must be {expected}")]
    InvalidType {
        entry: Entry,
        field: String,
        expected: &'static str,
    },

    /// A key holds a value of the right kind that is not acceptable
    #[error("{entry}: field '{field}' {message}")]
    InvalidValue {
        entry: Entry,
        field: &'static str,
        message: String,
    },

    /// A hook group declares no hooks
    #[error("{entry}: 'hooks' must contain at least one hook")]
    EmptyHooks { entry: Entry },

    /// The same hook is declared twice in one group
    #[error("{entry}: duplicate hook id '{id}'")]
    DuplicateHook { entry: Entry, id: String },

    /// A hook id that the group's source cannot provide
    #[error("{entry}: unknown hook id '{id}' (expected one of: {known})")]
    UnknownHook {
        entry: Entry,
        id: String,
        known: String,
    },

    /// A warning promoted to an error by strict mode
    #[error("{entry}: {message}")]
    Strict { entry: Entry, message: String },

    /// Aggregate of every problem found in one manifest
    #[error("{origin}: {} problem(s) found\n{}", .errors.len(), render_list(.errors))]
    Validation { origin: String, errors: Vec<Error> },

    /// No manifest at the expected location
    #[error("No pre-commit configuration found in {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Tool settings could not be loaded
    #[error("Settings error: {0}")]
    Settings(String),

    /// Manifest could not be serialized
    #[error("Failed to serialize manifest: {0}")]
    Serialize(String),

    /// Generic error message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Number of individual problems this error stands for
    #[must_use]
    pub fn problem_count(&self) -> usize {
        match self {
            Error::Validation { errors, .. } => errors.len(),
            _ => 1,
        }
    }

    /// The entry this error points at, if it is a schema problem
    #[must_use]
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Error::NotAMapping { entry }
            | Error::MissingField { entry, .. }
            | Error::EmptyField { entry, .. }
            | Error::InvalidType { entry, .. }
            | Error::InvalidValue { entry, .. }
            | Error::EmptyHooks { entry }
            | Error::DuplicateHook { entry, .. }
            | Error::UnknownHook { entry, .. }
            | Error::Strict { entry, .. } => Some(entry),
            _ => None,
        }
    }
}

fn render_list(errors: &[Error]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
