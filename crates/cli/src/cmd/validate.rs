//! Validate command implementation
//!
//! Checks one or more manifests and reports every problem found.

use clap::Args;
use hookpin_config::{CheckOutcome, ManifestSummary, Warning};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

use crate::command::Command;
use crate::common::{OutputFormat, RuntimeContext, display_path};
use crate::error::{CommandError, Result};
use crate::ui::StatusIcon;

/// Validate pre-commit manifests
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Manifest files to validate (default: the discovered manifest)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Result of validating one file
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// File as shown to the user
    pub path: String,
    /// Whether the file passed
    pub valid: bool,
    /// Counts, when the manifest could be built
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ManifestSummary>,
    /// Error messages
    pub errors: Vec<String>,
    /// Warnings
    pub warnings: Vec<Warning>,
}

impl FileReport {
    fn from_outcome(path: String, outcome: CheckOutcome, strict: bool) -> Self {
        let summary = outcome.manifest.as_ref().map(hookpin_config::Manifest::summary);
        let (errors, warnings) = outcome.report.into_parts();
        let valid = errors.is_empty() && !(strict && !warnings.is_empty());

        Self {
            path,
            valid,
            summary,
            errors: errors.iter().map(ToString::to_string).collect(),
            warnings,
        }
    }

    fn from_error(path: String, error: &hookpin_core::Error) -> Self {
        Self {
            path,
            valid: false,
            summary: None,
            errors: vec![error.to_string()],
            warnings: Vec::new(),
        }
    }
}

impl Command for ValidateCommand {
    type Output = Vec<FileReport>;

    fn execute(&self, context: &RuntimeContext) -> Result<Vec<FileReport>> {
        let files = if self.files.is_empty() {
            vec![context.manifest_path()?]
        } else {
            self.files.clone()
        };

        let loader = context.loader_with_strict(self.strict);
        let strict = loader.options().strict;

        let reports: Vec<FileReport> = loader
            .check_many(&files)
            .into_iter()
            .map(|(path, outcome)| {
                let shown = display_path(&path, &context.working_dir);
                match outcome {
                    Ok(outcome) => FileReport::from_outcome(shown, outcome, strict),
                    Err(e) => FileReport::from_error(shown, &e),
                }
            })
            .collect();

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
            OutputFormat::Text => print_text(&reports),
        }

        let failed = reports.iter().filter(|r| !r.valid).count();
        tracing::debug!(failed, total = reports.len(), "Validation finished");

        if failed > 0 {
            return Err(CommandError::ValidationFailed {
                failed,
                total: reports.len(),
            });
        }

        Ok(reports)
    }
}

fn print_text(reports: &[FileReport]) {
    for report in reports {
        for warning in &report.warnings {
            println!(
                "{} {}: {}",
                StatusIcon::Warning.get().yellow(),
                report.path,
                warning
            );
        }
        for error in &report.errors {
            println!("{} {}: {}", StatusIcon::Error.get().red(), report.path, error);
        }

        if report.valid {
            let counts = report
                .summary
                .map(|s| format!(" ({} groups, {} hooks)", s.groups, s.hooks))
                .unwrap_or_default();
            println!(
                "{} {}{}",
                StatusIcon::Success.get().green(),
                report.path.bold(),
                counts.dimmed()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use hookpin_config::Settings;
    use hookpin_config::sample::SAMPLE_CONFIG;
    use std::fs;
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> RuntimeContext {
        RuntimeContext::new(Settings::default(), None, dir.path().to_path_buf())
    }

    fn command(files: Vec<PathBuf>, strict: bool) -> ValidateCommand {
        ValidateCommand {
            files,
            strict,
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_validate_discovered_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".pre-commit-config.yaml"), SAMPLE_CONFIG).unwrap();

        let reports = command(vec![], false).execute(&context(&dir)).unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].valid);
        assert_eq!(reports[0].path, ".pre-commit-config.yaml");
        assert_eq!(reports[0].summary.unwrap().hooks, 6);
    }

    #[test]
    fn test_validate_reports_failure() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.yaml");
        let bad = dir.path().join("bad.yaml");
        fs::write(&good, SAMPLE_CONFIG).unwrap();
        fs::write(
            &bad,
            "repos:\n  - repo: https://example.com/tool\n    hooks:\n      - id: mytool\n",
        )
        .unwrap();

        let err = command(vec![good, bad], false)
            .execute(&context(&dir))
            .unwrap_err();
        assert!(matches!(
            err,
            CommandError::ValidationFailed {
                failed: 1,
                total: 2
            }
        ));
    }

    #[test]
    fn test_strict_flag_fails_on_warnings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mutable.yaml");
        fs::write(
            &path,
            "repos:\n  - repo: https://github.com/psf/black\n    rev: main\n    hooks:\n      - id: black\n",
        )
        .unwrap();

        let reports = command(vec![path.clone()], false)
            .execute(&context(&dir))
            .unwrap();
        assert_eq!(reports[0].warnings.len(), 1);

        assert!(command(vec![path], true).execute(&context(&dir)).is_err());
    }

    #[test]
    fn test_file_report_from_error() {
        let err = hookpin_core::Error::Parse {
            origin: "x.yaml".to_string(),
            message: "bad indentation".to_string(),
        };
        let report = FileReport::from_error("x.yaml".to_string(), &err);
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["Failed to parse x.yaml: bad indentation"]);
    }

    #[test]
    fn test_file_report_json_shape() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".pre-commit-config.yaml"), SAMPLE_CONFIG).unwrap();

        let reports = command(vec![], false).execute(&context(&dir)).unwrap();
        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["valid"], true);
        assert_eq!(json[0]["summary"]["groups"], 4);
        assert_eq!(json[0]["errors"].as_array().unwrap().len(), 0);
    }
}
