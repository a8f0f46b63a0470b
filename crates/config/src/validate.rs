//! Semantic validation
//!
//! Runs on a structurally sound [`Manifest`] and checks the rules that need
//! more than the shape of the document: duplicate hooks, ids the `meta`
//! source does not provide, the extra keys `local` hooks need, stage and
//! language names, pattern syntax and revision pins that look mutable.

use crate::manifest::{HookGroup, HookRef, Manifest, RepoKind};
use crate::report::Report;
use hookpin_core::{Entry, Error};
use regex::Regex;
use std::collections::HashSet;

/// Hook ids provided by the `meta` source
pub const META_HOOK_IDS: &[&str] = &["check-hooks-apply", "check-useless-excludes", "identity"];

/// Languages a `local` hook may declare
pub const LANGUAGES: &[&str] = &[
    "conda",
    "coursier",
    "dart",
    "docker",
    "docker_image",
    "dotnet",
    "fail",
    "golang",
    "haskell",
    "julia",
    "lua",
    "node",
    "perl",
    "pygrep",
    "python",
    "r",
    "ruby",
    "rust",
    "script",
    "swift",
    "system",
    "unsupported",
    "unsupported_script",
];

/// Stage names
pub const STAGES: &[&str] = &[
    "commit-msg",
    "manual",
    "post-checkout",
    "post-commit",
    "post-merge",
    "post-rewrite",
    "pre-commit",
    "pre-merge-commit",
    "pre-push",
    "pre-rebase",
    "prepare-commit-msg",
];

/// Legacy stage names and their replacements
const LEGACY_STAGES: &[(&str, &str)] = &[
    ("commit", "pre-commit"),
    ("merge-commit", "pre-merge-commit"),
    ("push", "pre-push"),
];

/// Knobs for the semantic pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Treat warnings as errors
    pub strict: bool,
    /// Warn when `rev` looks like a branch or moving tag
    pub warn_mutable_revs: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            strict: false,
            warn_mutable_revs: true,
        }
    }
}

/// Validate a manifest, recording findings in `report`
pub fn validate(manifest: &Manifest, options: &ValidationOptions, report: &mut Report) {
    check_stages(&Entry::Root, &manifest.default_stages, "default_stages", report);
    check_pattern(&Entry::Root, "files", manifest.files.as_deref(), report);
    check_pattern(&Entry::Root, "exclude", manifest.exclude.as_deref(), report);

    for (index, group) in manifest.repos.iter().enumerate() {
        validate_group(index, group, options, report);
    }
}

fn validate_group(index: usize, group: &HookGroup, options: &ValidationOptions, report: &mut Report) {
    let entry = Entry::group(index, Some(&group.repo));
    let kind = group.kind();

    if options.warn_mutable_revs
        && let Some(rev) = &group.rev
        && looks_mutable(rev)
    {
        report.warn(
            entry.clone(),
            format!(
                "'rev' {rev:?} appears to be a mutable reference (moving tag or branch); \
                 pin a release tag or commit sha instead"
            ),
        );
    }

    let mut seen: HashSet<(&str, Option<&str>)> = HashSet::new();

    for (hook_index, hook) in group.hooks.iter().enumerate() {
        let hook_entry = entry.hook(hook_index, Some(&hook.id));

        if !seen.insert((hook.id.as_str(), hook.alias.as_deref())) {
            report.error(Error::DuplicateHook {
                entry: hook_entry.clone(),
                id: hook.id.clone(),
            });
        }

        match kind {
            RepoKind::Meta => check_meta_hook(&hook_entry, hook, report),
            RepoKind::Local => check_local_hook(&hook_entry, hook, report),
            RepoKind::Remote => {}
        }

        check_stages(&hook_entry, &hook.stages, "stages", report);
        check_pattern(&hook_entry, "files", hook.files.as_deref(), report);
        check_pattern(&hook_entry, "exclude", hook.exclude.as_deref(), report);
    }
}

fn check_meta_hook(entry: &Entry, hook: &HookRef, report: &mut Report) {
    if !META_HOOK_IDS.contains(&hook.id.as_str()) {
        report.error(Error::UnknownHook {
            entry: entry.clone(),
            id: hook.id.clone(),
            known: META_HOOK_IDS.join(", "),
        });
    }
}

fn check_local_hook(entry: &Entry, hook: &HookRef, report: &mut Report) {
    let required = [
        ("name", hook.name.as_deref()),
        ("entry", hook.entry.as_deref()),
        ("language", hook.language.as_deref()),
    ];

    for (field, value) in required {
        match value {
            None => report.error(Error::MissingField {
                entry: entry.clone(),
                field,
            }),
            Some(v) if v.trim().is_empty() => report.error(Error::EmptyField {
                entry: entry.clone(),
                field,
            }),
            Some(_) => {}
        }
    }

    if let Some(language) = hook.language.as_deref()
        && !language.trim().is_empty()
        && !LANGUAGES.contains(&language)
    {
        report.error(Error::InvalidValue {
            entry: entry.clone(),
            field: "language",
            message: format!("has unknown language '{language}'"),
        });
    }
}

fn check_stages(entry: &Entry, stages: &[String], field: &'static str, report: &mut Report) {
    for stage in stages {
        if STAGES.contains(&stage.as_str()) {
            continue;
        }

        if let Some((_, replacement)) = LEGACY_STAGES.iter().find(|(old, _)| *old == stage.as_str()) {
            report.warn(
                entry.clone(),
                format!("stage '{stage}' is deprecated, use '{replacement}'"),
            );
        } else {
            report.error(Error::InvalidValue {
                entry: entry.clone(),
                field,
                message: format!("has unknown stage '{stage}'"),
            });
        }
    }
}

/// Patterns are evaluated by the external runner with its own regex
/// dialect, so one this engine cannot compile is only a warning.
fn check_pattern(entry: &Entry, field: &str, pattern: Option<&str>, report: &mut Report) {
    let Some(pattern) = pattern else {
        return;
    };

    if let Err(e) = Regex::new(pattern) {
        report.warn(
            entry.clone(),
            format!("'{field}' pattern {pattern:?} could not be compiled: {e}"),
        );
    }
}

/// A revision with no dot that is not a hex sha is probably a branch name
#[must_use]
pub fn looks_mutable(rev: &str) -> bool {
    !rev.contains('.') && !rev.chars().all(|c| c.is_ascii_hexdigit())
}
