//! Manifest discovery and loading
//!
//! Finds the manifest for a working tree and runs it through the full
//! pipeline: YAML parse, structural check, typed deserialization and the
//! semantic pass.

use crate::manifest::Manifest;
use crate::report::{Report, Warning};
use crate::schema;
use crate::validate::{self, ValidationOptions};
use hookpin_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File names looked for, in order of preference
pub const CONFIG_FILE_NAMES: &[&str] = &[".pre-commit-config.yaml", ".pre-commit-config.yml"];

/// A manifest that passed validation, with any warnings it produced
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    /// The typed manifest
    pub manifest: Manifest,
    /// Non-fatal findings
    pub warnings: Vec<Warning>,
}

/// Outcome of checking a manifest without failing on problems
#[derive(Debug)]
pub struct CheckOutcome {
    /// The typed manifest, when the document was structurally sound
    pub manifest: Option<Manifest>,
    /// Everything found
    pub report: Report,
}

/// Load and validate hook manifests
#[derive(Debug, Clone, Default)]
pub struct ManifestLoader {
    options: ValidationOptions,
}

impl ManifestLoader {
    /// Create a loader with the given validation options
    #[must_use]
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// Options this loader validates with
    #[must_use]
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Locate the manifest for the working tree containing `start`
    ///
    /// The manifest lives at the root of the git work tree. When `start` is not
    /// inside a git repository, `start` itself is searched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if no manifest exists there
    pub fn discover(start: &Path) -> Result<PathBuf> {
        let root = match git2::Repository::discover(start) {
            Ok(repo) => repo
                .workdir()
                .map_or_else(|| start.to_path_buf(), Path::to_path_buf),
            Err(e) => {
                tracing::debug!("Not inside a git repository ({}), using {}", e.message(), start.display());
                start.to_path_buf()
            }
        };

        CONFIG_FILE_NAMES
            .iter()
            .map(|name| root.join(name))
            .find(|path| path.is_file())
            .ok_or(Error::ConfigNotFound { path: root })
    }

    /// Load and validate a manifest file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or
    /// fails validation
    pub fn load_path(&self, path: &Path) -> Result<LoadedManifest> {
        tracing::debug!("Loading manifest: {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_str(&path.display().to_string(), &content)
    }

    /// Load and validate a manifest from a string
    ///
    /// `origin` names the document in error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid YAML or fails validation
    pub fn load_str(&self, origin: &str, content: &str) -> Result<LoadedManifest> {
        let CheckOutcome { manifest, report } = self.check_str(origin, content)?;

        for warning in report.warnings() {
            tracing::warn!(origin, "{warning}");
        }

        let warnings = report.into_result(origin, self.options.strict)?;
        let manifest =
            manifest.ok_or_else(|| Error::Message(format!("{origin}: manifest could not be built")))?;

        Ok(LoadedManifest { manifest, warnings })
    }

    /// Check a manifest and return every finding instead of failing
    ///
    /// # Errors
    ///
    /// Returns an error only if the content is not valid YAML
    pub fn check_str(&self, origin: &str, content: &str) -> Result<CheckOutcome> {
        let document: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| Error::Parse {
                origin: origin.to_string(),
                message: e.to_string(),
            })?;

        let mut report = Report::new();
        let document = schema::normalize(document, &mut report);
        schema::check(&document, &mut report);

        if !report.is_ok() {
            return Ok(CheckOutcome {
                manifest: None,
                report,
            });
        }

        let manifest: Manifest = serde_yaml::from_value(document).map_err(|e| Error::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

        validate::validate(&manifest, &self.options, &mut report);

        tracing::debug!(
            origin,
            groups = manifest.repos.len(),
            hooks = manifest.hook_count(),
            errors = report.errors().len(),
            warnings = report.warnings().len(),
            "Checked manifest"
        );

        Ok(CheckOutcome {
            manifest: Some(manifest),
            report,
        })
    }

    /// Check several manifest files in parallel
    ///
    /// Results come back in the order of `paths`.
    pub fn check_many(&self, paths: &[PathBuf]) -> Vec<(PathBuf, Result<CheckOutcome>)> {
        use rayon::prelude::*;

        paths
            .par_iter()
            .map(|path| {
                let outcome = fs::read_to_string(path)
                    .map_err(|source| Error::FileRead {
                        path: path.clone(),
                        source,
                    })
                    .and_then(|content| self.check_str(&path.display().to_string(), &content));
                (path.clone(), outcome)
            })
            .collect()
    }
}
