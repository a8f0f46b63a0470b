//! Sample-config command implementation

use clap::Args;
use hookpin_config::sample::SAMPLE_CONFIG;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Print a sample manifest
#[derive(Debug, Args)]
pub struct SampleConfigCommand {}

impl Command for SampleConfigCommand {
    type Output = &'static str;

    fn execute(&self, _context: &RuntimeContext) -> Result<&'static str> {
        print!("{SAMPLE_CONFIG}");
        Ok(SAMPLE_CONFIG)
    }
}
