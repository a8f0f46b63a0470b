//! Manifest model
//!
//! Typed representation of a `.pre-commit-config.yaml` file: an ordered list
//! of hook groups, each pinned to a revision of its source repository, and
//! the hook references declared inside them.
//!
//! Keys the model does not know are kept in `extra` maps so that a
//! parse/serialize round trip does not drop anything.

use hookpin_core::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Sentinel `repo` value for hooks defined inside the repository itself
pub const LOCAL: &str = "local";

/// Sentinel `repo` value for hooks provided by the runner
pub const META: &str = "meta";

/// A complete hook manifest
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Hook groups, in declaration order
    pub repos: Vec<HookGroup>,

    /// Default language version per language (e.g. `python: python3.11`)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub default_language_version: IndexMap<String, String>,

    /// Stages hooks run in unless they say otherwise
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_stages: Vec<String>,

    /// Git hook types installed by default
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_install_hook_types: Vec<String>,

    /// Global include pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,

    /// Global exclude pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Stop after the first failing hook
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_fast: Option<bool>,

    /// Minimum runner version this manifest needs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_pre_commit_version: Option<String>,

    /// Settings for hosted CI services, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci: Option<IndexMap<String, Value>>,

    /// Unrecognised top-level keys
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Manifest {
    /// Total number of hook references across all groups
    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.repos.iter().map(|group| group.hooks.len()).sum()
    }

    /// Check if there are no hook groups
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    /// Every declaration of the hook `id`, paired with its group
    pub fn find_hook<'a>(&'a self, id: &'a str) -> impl Iterator<Item = (&'a HookGroup, &'a HookRef)> {
        self.repos.iter().flat_map(move |group| {
            group
                .hooks
                .iter()
                .filter(move |hook| hook.id == id || hook.alias.as_deref() == Some(id))
                .map(move |hook| (group, hook))
        })
    }

    /// Counts used by listing output
    #[must_use]
    pub fn summary(&self) -> ManifestSummary {
        ManifestSummary {
            groups: self.repos.len(),
            hooks: self.hook_count(),
            local_groups: self
                .repos
                .iter()
                .filter(|g| g.kind() == RepoKind::Local)
                .count(),
        }
    }

    /// Serialize to YAML, preserving group and hook order
    ///
    /// # Errors
    ///
    /// Returns an error if a passthrough value cannot be represented in YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Serialize(e.to_string()))
    }
}

/// Aggregate counts for a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManifestSummary {
    /// Number of hook groups
    pub groups: usize,
    /// Number of hook references
    pub hooks: usize,
    /// Number of `repo: local` groups
    pub local_groups: usize,
}

/// What a group's `repo` value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoKind {
    /// An external repository pinned by `rev`
    Remote,
    /// Hooks defined in the current repository
    Local,
    /// Hooks built into the runner
    Meta,
}

impl RepoKind {
    /// Classify a `repo` value
    #[must_use]
    pub fn of(repo: &str) -> Self {
        match repo {
            LOCAL => RepoKind::Local,
            META => RepoKind::Meta,
            _ => RepoKind::Remote,
        }
    }

    /// Whether groups of this kind must carry a `rev`
    #[must_use]
    pub fn requires_rev(self) -> bool {
        self == RepoKind::Remote
    }
}

/// Hooks sourced from one repository at one pinned revision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookGroup {
    /// Source location (URL, `local` or `meta`)
    pub repo: String,

    /// Revision pin; absent for `local` and `meta` groups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,

    /// Hook references, in declaration order
    pub hooks: Vec<HookRef>,

    /// Unrecognised keys
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl HookGroup {
    /// Create a remote group pinned at `rev`
    #[must_use]
    pub fn remote(repo: impl Into<String>, rev: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            rev: Some(rev.into()),
            hooks: Vec::new(),
            extra: IndexMap::new(),
        }
    }

    /// Add a hook reference (builder style)
    #[must_use]
    pub fn with_hook(mut self, hook: HookRef) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Classify this group's source
    #[must_use]
    pub fn kind(&self) -> RepoKind {
        RepoKind::of(&self.repo)
    }

    /// Look up a hook by id
    #[must_use]
    pub fn hook(&self, id: &str) -> Option<&HookRef> {
        self.hooks.iter().find(|hook| hook.id == id)
    }

    /// `repo@rev` label used in listings
    #[must_use]
    pub fn label(&self) -> String {
        match &self.rev {
            Some(rev) => format!("{}@{}", self.repo, rev),
            None => self.repo.clone(),
        }
    }
}

/// A reference to one hook within a group
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HookRef {
    /// Hook identifier within the source repository
    pub id: String,

    /// Alternative id to select this hook by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Command to run (required for local hooks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,

    /// Hook language (required for local hooks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Language version override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_version: Option<String>,

    /// Extra arguments passed to the hook
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Extra packages installed into the hook environment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_dependencies: Vec<String>,

    /// Include pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,

    /// Exclude pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// File types (all must match)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,

    /// File types (any may match)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types_or: Vec<String>,

    /// File types to skip
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_types: Vec<String>,

    /// Stages this hook runs in
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<String>,

    /// Run even when no files match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_run: Option<bool>,

    /// Pass matching filenames as arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_filenames: Option<bool>,

    /// Disable parallel execution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_serial: Option<bool>,

    /// Stop after this hook fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_fast: Option<bool>,

    /// Always print output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,

    /// File to write hook output to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Minimum runner version this hook needs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_pre_commit_version: Option<String>,

    /// Unrecognised keys
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl HookRef {
    /// Create a hook reference with only an id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set arguments (builder style)
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set additional dependencies (builder style)
    #[must_use]
    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    /// Name to show for this hook: `name` when set, otherwise `id`
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
