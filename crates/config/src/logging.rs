//! Logging configuration for hookpin
//!
//! Terminal output on stderr plus optional file logging, using tracing.

use hookpin_core::Result;
use std::path::Path;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable debug level logging
/// * `log_file` - Optional path to write logs to a file
///
/// # Examples
/// ```ignore
/// // Basic usage with info level
/// init(false, None)?;
///
/// // Verbose mode with debug level
/// init(true, None)?;
///
/// // Write logs to file
/// init(true, Some(Path::new("debug.log")))?;
/// ```
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let env_filter = default_filter(verbose);

    // Timestamps only in verbose mode; stdout stays free for command output
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_ansi(true);

    let stderr_layer = if verbose {
        stderr_layer.with_filter(env_filter).boxed()
    } else {
        stderr_layer.without_time().with_filter(env_filter).boxed()
    };

    match log_file {
        Some(log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)?;

            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .pretty()
                .with_filter(EnvFilter::new("debug"));

            tracing_subscriber::registry()
                .with(stderr_layer)
                .with(file_layer)
                .init();
        }
        None => {
            tracing_subscriber::registry().with(stderr_layer).init();
        }
    }

    Ok(())
}

/// Filter used when `RUST_LOG` is not set
fn default_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "warn" };

    // Allows overriding with RUST_LOG env var
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "hookpin={level},hookpin_config={level},hookpin_core={level}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_filter_levels() {
        temp_env::with_var_unset("RUST_LOG", || {
            assert!(default_filter(true).to_string().contains("hookpin=debug"));
            assert!(default_filter(false).to_string().contains("hookpin_config=warn"));
        });
    }

    #[test]
    #[serial]
    fn test_rust_log_overrides_default() {
        temp_env::with_var("RUST_LOG", Some("hookpin_core=trace"), || {
            let filter = default_filter(false).to_string();
            assert!(filter.contains("hookpin_core=trace"));
            assert!(!filter.contains("hookpin_config=warn"));
        });
    }
}
