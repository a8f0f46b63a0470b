//! Show command implementation

use clap::Args;
use hookpin_config::{HookGroup, HookRef};
use owo_colors::OwoColorize;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::{CommandError, Result};

/// Show details for one hook
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Hook id (or alias)
    #[arg(value_name = "ID")]
    pub id: String,
}

impl Command for ShowCommand {
    /// Number of declarations found
    type Output = usize;

    fn execute(&self, context: &RuntimeContext) -> Result<usize> {
        let path = context.manifest_path()?;
        let loaded = context.loader().load_path(&path)?;

        let matches: Vec<(&HookGroup, &HookRef)> = loaded.manifest.find_hook(&self.id).collect();
        if matches.is_empty() {
            return Err(CommandError::HookNotFound(self.id.clone()));
        }

        for (group, hook) in &matches {
            print_hook(group, hook);
        }

        Ok(matches.len())
    }
}

fn print_hook(group: &HookGroup, hook: &HookRef) {
    println!();
    println!("{} {}", "Hook:".bold(), hook.id.cyan());
    if hook.display_name() != hook.id {
        println!("{} {}", "Name:".bold(), hook.display_name());
    }
    if let Some(alias) = &hook.alias {
        println!("{} {}", "Alias:".bold(), alias);
    }
    println!("{} {}", "Repo:".bold(), group.repo);
    match &group.rev {
        Some(rev) => println!("{} {}", "Rev:".bold(), rev),
        None => println!("{} {:?}", "Kind:".bold(), group.kind()),
    }

    if let Some(entry) = &hook.entry {
        println!("{} {}", "Entry:".bold(), entry);
    }
    if let Some(language) = &hook.language {
        println!("{} {}", "Language:".bold(), language);
    }

    print_list("Args:", &hook.args);
    print_list("Additional dependencies:", &hook.additional_dependencies);
    print_list("Stages:", &hook.stages);
    print_list("Types:", &hook.types);

    if let Some(files) = &hook.files {
        println!("{} {}", "Files:".bold(), files);
    }
    if let Some(exclude) = &hook.exclude {
        println!("{} {}", "Exclude:".bold(), exclude);
    }
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{}", label.bold());
    for item in items {
        println!("  {}", item);
    }
}
