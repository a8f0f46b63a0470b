//! Entry locators for diagnostics
//!
//! An [`Entry`] names the place in a manifest an error or warning refers to.
//! It carries the positional index together with the human-facing identifier
//! (the group's `repo` value, the hook's `id`) when those are known, so that
//! messages read like `repos[2] (repo: https://github.com/psf/black)`.

use std::fmt;

/// Location of a diagnostic inside a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// The document itself (top-level keys)
    Root,

    /// A hook group (`repos[index]`)
    Group {
        /// Position in the `repos` sequence
        index: usize,
        /// The group's `repo` value, if it is a string
        repo: Option<String>,
    },

    /// A hook reference (`repos[group].hooks[index]`)
    Hook {
        /// Position of the owning group in the `repos` sequence
        group: usize,
        /// The owning group's `repo` value, if it is a string
        repo: Option<String>,
        /// Position in the group's `hooks` sequence
        index: usize,
        /// The hook's `id` value, if it is a string
        id: Option<String>,
    },
}

impl Entry {
    /// Locator for the hook group at `index`
    #[must_use]
    pub fn group(index: usize, repo: Option<&str>) -> Self {
        Entry::Group {
            index,
            repo: repo.map(str::to_owned),
        }
    }

    /// Locator for a hook inside this group
    #[must_use]
    pub fn hook(&self, index: usize, id: Option<&str>) -> Self {
        let (group, repo) = match self {
            Entry::Group { index, repo } | Entry::Hook { group: index, repo, .. } => {
                (*index, repo.clone())
            }
            Entry::Root => (0, None),
        };

        Entry::Hook {
            group,
            repo,
            index,
            id: id.map(str::to_owned),
        }
    }

    /// The `repo` value this entry belongs to, if known
    #[must_use]
    pub fn repo(&self) -> Option<&str> {
        match self {
            Entry::Root => None,
            Entry::Group { repo, .. } | Entry::Hook { repo, .. } => repo.as_deref(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Root => f.write_str("top level"),
            Entry::Group { index, repo: None } => write!(f, "repos[{index}]"),
            Entry::Group {
                index,
                repo: Some(repo),
            } => write!(f, "repos[{index}] (repo: {repo})"),
            Entry::Hook {
                group,
                repo,
                index,
                id,
            } => {
                write!(f, "repos[{group}].hooks[{index}]")?;
                match (id, repo) {
                    (Some(id), Some(repo)) => write!(f, " (id: {id}, repo: {repo})"),
                    (Some(id), None) => write!(f, " (id: {id})"),
                    (None, Some(repo)) => write!(f, " (repo: {repo})"),
                    (None, None) => Ok(()),
                }
            }
        }
    }
}
