//! Fmt command implementation
//!
//! Rewrites a manifest in normalised form: the mapping layout, fields in
//! model order, unset optional fields dropped. Legacy list-format manifests
//! come out migrated. Comments are not preserved.

use clap::Args;
use owo_colors::OwoColorize;
use std::fs;

use crate::command::Command;
use crate::common::{RuntimeContext, display_path};
use crate::error::{CommandError, Result};
use crate::ui::{self, StatusIcon};

/// Normalise a manifest
#[derive(Debug, Args)]
pub struct FmtCommand {
    /// Fail if the manifest is not normalised, printing a diff
    #[arg(long, conflicts_with = "write")]
    pub check: bool,

    /// Rewrite the manifest in place
    #[arg(long)]
    pub write: bool,
}

/// What `fmt` found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FmtOutcome {
    /// Already normalised
    Unchanged,
    /// Differs from normalised form (and was rewritten with `--write`)
    Changed,
}

impl Command for FmtCommand {
    type Output = FmtOutcome;

    fn execute(&self, context: &RuntimeContext) -> Result<FmtOutcome> {
        let path = context.manifest_path()?;
        let original = fs::read_to_string(&path).map_err(|source| hookpin_core::Error::FileRead {
            path: path.clone(),
            source,
        })?;

        let loaded = context
            .loader()
            .load_str(&path.display().to_string(), &original)?;
        let formatted = loaded.manifest.to_yaml()?;

        let outcome = if formatted == original {
            FmtOutcome::Unchanged
        } else {
            FmtOutcome::Changed
        };
        let shown = display_path(&path, &context.working_dir);

        if self.check {
            let mut stdout = std::io::stdout().lock();
            ui::diff::write_unified(
                &mut stdout,
                &original,
                &formatted,
                &format!("a/{shown}"),
                &format!("b/{shown}"),
                ui::use_color(),
            )?;

            if outcome == FmtOutcome::Changed {
                return Err(CommandError::NotFormatted(path));
            }
            println!("{} {} is formatted", StatusIcon::Success.get().green(), shown);
        } else if self.write {
            if outcome == FmtOutcome::Changed {
                fs::write(&path, &formatted).map_err(|source| hookpin_core::Error::FileWrite {
                    path: path.clone(),
                    source,
                })?;
                tracing::info!("Rewrote {}", path.display());
                println!("{} Formatted {}", StatusIcon::Success.get().green(), shown);
            } else {
                println!("{} {} unchanged", StatusIcon::Info.get(), shown);
            }
        } else {
            print!("{formatted}");
        }

        Ok(outcome)
    }
}
