//! Common utilities and types shared across CLI commands

use crate::error::Result;
use clap::ValueEnum;
use hookpin_config::{ManifestLoader, Settings, ValidationOptions};
use std::path::{Path, PathBuf};

/// Output format for listing commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Shared state handed to every command
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    /// Loaded tool settings
    pub settings: Settings,
    /// Explicit manifest path from `--config`
    pub config_path: Option<PathBuf>,
    /// Directory manifest discovery starts from
    pub working_dir: PathBuf,
}

impl RuntimeContext {
    /// Create a context
    #[must_use]
    pub fn new(settings: Settings, config_path: Option<PathBuf>, working_dir: PathBuf) -> Self {
        Self {
            settings,
            config_path,
            working_dir,
        }
    }

    /// Validation options from settings
    #[must_use]
    pub fn options(&self) -> ValidationOptions {
        self.settings.validation_options()
    }

    /// Loader configured from settings
    #[must_use]
    pub fn loader(&self) -> ManifestLoader {
        ManifestLoader::new(self.options())
    }

    /// Loader with strict mode forced on or left as configured
    #[must_use]
    pub fn loader_with_strict(&self, strict: bool) -> ManifestLoader {
        let mut options = self.options();
        options.strict |= strict;
        ManifestLoader::new(options)
    }

    /// Path of the manifest to operate on
    ///
    /// Uses `--config` when given, otherwise discovers the manifest from the
    /// working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no manifest can be found
    pub fn manifest_path(&self) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => Ok(ManifestLoader::discover(&self.working_dir)?),
        }
    }
}

/// Path relative to `base` for display, falling back to the full path
#[must_use]
pub fn display_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
