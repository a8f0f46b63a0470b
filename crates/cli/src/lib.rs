//! hookpin CLI library
//!
//! This library contains all the CLI logic for hookpin, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod command;
pub mod common;
pub mod error;
pub mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use command::Command;
use common::RuntimeContext;
use hookpin_config::Settings;

/// hookpin - Validate and inspect pre-commit hook manifests
#[derive(Parser)]
#[command(name = "hookpin")]
#[command(about = "Validate and inspect pre-commit hook manifests")]
#[command(version)]
#[command(long_about = "Validate and inspect pre-commit hook manifests

Checks .pre-commit-config.yaml files for structural and semantic problems,
naming the offending hook group or hook in every message.")]
pub struct Cli {
    /// Path to the manifest (default: discovered from the repository root)
    #[arg(long, env = "HOOKPIN_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the hookpin settings file
    #[arg(long, env = "HOOKPIN_SETTINGS", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "HOOKPIN_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for hookpin CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Validate one or more manifests
    Validate(cmd::validate::ValidateCommand),

    /// List hook groups and the hooks they declare
    List(cmd::list::ListCommand),

    /// Show details for a hook
    Show(cmd::show::ShowCommand),

    /// Print the manifest in normalised form, check it, or rewrite it
    Fmt(cmd::fmt::FmtCommand),

    /// Print a sample manifest
    SampleConfig(cmd::sample::SampleConfigCommand),
}

/// Execute the command based on the command type
fn execute_command(command: Commands, context: &RuntimeContext) -> Result<()> {
    match command {
        Commands::Validate(validate_cmd) => {
            validate_cmd.execute(context)?;
        }
        Commands::List(list_cmd) => {
            list_cmd.execute(context)?;
        }
        Commands::Show(show_cmd) => {
            show_cmd.execute(context)?;
        }
        Commands::Fmt(fmt_cmd) => {
            fmt_cmd.execute(context)?;
        }
        Commands::SampleConfig(sample_cmd) => {
            sample_cmd.execute(context)?;
        }
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if:
/// - Logging initialization fails
/// - The settings file cannot be loaded
/// - Command execution fails
pub fn run(cli: Cli) -> Result<()> {
    // Initialize logging based on verbosity
    hookpin_config::logging::init(cli.verbose, cli.log_file.as_deref())?;

    let settings = Settings::resolve(cli.settings.as_deref())?;
    let working_dir = std::env::current_dir().context("Failed to get current directory")?;
    tracing::debug!(dir = %working_dir.display(), "Working directory");

    let context = RuntimeContext::new(settings, cli.config, working_dir);
    execute_command(cli.command, &context)
}
