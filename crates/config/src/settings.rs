//! Tool settings
//!
//! hookpin's own settings live in a small TOML file, separate from the
//! manifest it validates:
//!
//! ```toml
//! [validate]
//! strict = false
//! warn_mutable_revs = true
//! ```
//!
//! The file is optional. Command-line flags override whatever it sets.

use crate::validate::ValidationOptions;
use hookpin_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Validation behaviour
    #[serde(default)]
    pub validate: ValidateSettings,
}

/// `[validate]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidateSettings {
    /// Treat warnings as errors
    #[serde(default)]
    pub strict: bool,

    /// Warn about `rev` values that look like branch names
    #[serde(default = "default_warn_mutable_revs")]
    pub warn_mutable_revs: bool,
}

impl Default for ValidateSettings {
    fn default() -> Self {
        Self {
            strict: false,
            warn_mutable_revs: default_warn_mutable_revs(),
        }
    }
}

fn default_warn_mutable_revs() -> bool {
    true
}

impl Settings {
    /// Load settings from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or TOML parsing fails
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
            .map_err(|e| Error::Settings(format!("{}: {e}", path.display())))
    }

    /// Parse settings from a TOML string
    ///
    /// # Errors
    ///
    /// Returns error if TOML parsing fails
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Settings(e.to_string()))
    }

    /// Load settings from `path`, or from the default location
    ///
    /// An explicit path must exist. The default file is optional and
    /// defaults are used when it is absent.
    ///
    /// # Errors
    ///
    /// Returns error if an existing file cannot be read or parsed
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_settings_file() {
            Some(path) if path.is_file() => {
                tracing::debug!("Using settings file: {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Validation options derived from these settings
    #[must_use]
    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            strict: self.validate.strict,
            warn_mutable_revs: self.validate.warn_mutable_revs,
        }
    }
}

/// Default settings file path
///
/// Returns `$XDG_CONFIG_HOME/hookpin/config.toml` (or the platform equivalent)
#[must_use]
pub fn default_settings_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("hookpin").join("config.toml"))
}
