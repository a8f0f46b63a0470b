//! Manifest handling for hookpin
//!
//! This crate handles:
//! - The typed manifest model (hook groups and hook references)
//! - Structural and semantic validation
//! - Manifest discovery and loading
//! - Tool settings
//! - Logging initialization

pub mod loader;
pub mod logging;
pub mod manifest;
pub mod report;
pub mod sample;
pub mod schema;
pub mod settings;
pub mod validate;

// Re-export error types from core
pub use hookpin_core::{Entry, Error, Result};

// Re-export main types
pub use loader::{CONFIG_FILE_NAMES, CheckOutcome, LoadedManifest, ManifestLoader};
pub use manifest::{HookGroup, HookRef, Manifest, ManifestSummary, RepoKind};
pub use report::{Report, Warning};
pub use settings::Settings;
pub use validate::ValidationOptions;
