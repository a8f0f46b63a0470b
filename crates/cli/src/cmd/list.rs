//! List command implementation
//!
//! Prints every hook group with its pin and the hooks it declares.

use clap::Args;
use hookpin_config::{HookGroup, HookRef, ManifestSummary};
use owo_colors::OwoColorize;

use crate::command::Command;
use crate::common::{OutputFormat, RuntimeContext};
use crate::error::Result;
use crate::ui::Icons;

/// List hook groups and hooks
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Command for ListCommand {
    type Output = ManifestSummary;

    fn execute(&self, context: &RuntimeContext) -> Result<ManifestSummary> {
        let path = context.manifest_path()?;
        let loaded = context.loader().load_path(&path)?;
        let manifest = &loaded.manifest;
        let summary = manifest.summary();

        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "path": path,
                    "summary": summary,
                    "repos": manifest.repos,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Text => {
                for group in &manifest.repos {
                    print_group(group);
                }
                println!(
                    "\n{} groups, {} hooks",
                    summary.groups.bold(),
                    summary.hooks.bold()
                );
            }
        }

        Ok(summary)
    }
}

fn print_group(group: &HookGroup) {
    match &group.rev {
        Some(rev) => println!("{} {}", group.repo.cyan(), format!("@ {rev}").dimmed()),
        None => println!("{} {}", group.repo.cyan(), format!("({:?})", group.kind()).dimmed()),
    }

    for hook in &group.hooks {
        println!("  {} {}{}", Icons::BULLET, hook.id.green(), hook_details(hook).dimmed());
    }
}

/// Arguments and dependencies rendered after the hook id
fn hook_details(hook: &HookRef) -> String {
    let mut details = String::new();

    if let Some(alias) = &hook.alias {
        details.push_str(&format!("  alias: {alias}"));
    }
    if !hook.args.is_empty() {
        details.push_str(&format!("  args: {}", hook.args.join(" ")));
    }
    if !hook.additional_dependencies.is_empty() {
        details.push_str(&format!("  deps: {}", hook.additional_dependencies.join(", ")));
    }

    details
}
