//! Validation report
//!
//! Schema and semantic checks push into a [`Report`] instead of returning on
//! the first problem, so one run shows everything wrong with a manifest.

use hookpin_core::{Entry, Error, Result};
use serde::Serialize;
use std::fmt;

/// A non-fatal finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// Where the finding applies
    #[serde(serialize_with = "serialize_entry")]
    pub entry: Entry,
    /// What is wrong
    pub message: String,
}

impl Warning {
    /// Create a warning
    pub fn new(entry: Entry, message: impl Into<String>) -> Self {
        Self {
            entry,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.entry, self.message)
    }
}

fn serialize_entry<S: serde::Serializer>(entry: &Entry, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(entry)
}

/// Errors and warnings collected while checking one manifest
#[derive(Debug, Default)]
pub struct Report {
    errors: Vec<Error>,
    warnings: Vec<Warning>,
}

impl Report {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn error(&mut self, error: Error) {
        tracing::debug!(%error, "validation error");
        self.errors.push(error);
    }

    /// Record a warning
    pub fn warn(&mut self, entry: Entry, message: impl Into<String>) {
        self.warnings.push(Warning::new(entry, message));
    }

    /// Errors recorded so far
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Warnings recorded so far
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if no errors were recorded
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if nothing at all was recorded
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Split into errors and warnings
    #[must_use]
    pub fn into_parts(self) -> (Vec<Error>, Vec<Warning>) {
        (self.errors, self.warnings)
    }

    /// Turn the report into a result for `origin`
    ///
    /// In strict mode every warning counts as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] holding every problem when the report is
    /// not acceptable
    pub fn into_result(self, origin: &str, strict: bool) -> Result<Vec<Warning>> {
        let Report {
            mut errors,
            warnings,
        } = self;

        if strict {
            errors.extend(warnings.iter().map(|w| Error::Strict {
                entry: w.entry.clone(),
                message: w.message.clone(),
            }));
        }

        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(Error::Validation {
                origin: origin.to_string(),
                errors,
            })
        }
    }
}
