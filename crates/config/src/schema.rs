//! Structural schema check
//!
//! Walks the raw YAML tree before it is turned into a [`Manifest`] and
//! records every missing key, wrong value kind and empty identifier it finds.
//! Working on the untyped tree lets each error name the group's `repo` and
//! the hook's `id`, which serde's own errors cannot do.
//!
//! A document that passes this check always deserializes into the typed
//! model.
//!
//! [`Manifest`]: crate::manifest::Manifest

use crate::manifest::RepoKind;
use crate::report::Report;
use hookpin_core::{Entry, Error};
use serde_yaml::{Mapping, Value};

/// Shape a key's value must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Str,
    Bool,
    StrList,
    StrMap,
    KeyedMap,
}

impl Kind {
    fn expected(self) -> &'static str {
        match self {
            Kind::Str => "a string",
            Kind::Bool => "a boolean",
            Kind::StrList => "a list of strings",
            Kind::StrMap => "a mapping of strings to strings",
            Kind::KeyedMap => "a mapping with string keys",
        }
    }
}

/// Optional top-level keys (`repos` is checked separately)
const TOP_LEVEL_KEYS: &[(&str, Kind)] = &[
    ("default_install_hook_types", Kind::StrList),
    ("default_language_version", Kind::StrMap),
    ("default_stages", Kind::StrList),
    ("files", Kind::Str),
    ("exclude", Kind::Str),
    ("fail_fast", Kind::Bool),
    ("minimum_pre_commit_version", Kind::Str),
    ("ci", Kind::KeyedMap),
];

/// Optional hook keys (`id` is checked separately)
const HOOK_KEYS: &[(&str, Kind)] = &[
    ("alias", Kind::Str),
    ("name", Kind::Str),
    ("entry", Kind::Str),
    ("language", Kind::Str),
    ("language_version", Kind::Str),
    ("args", Kind::StrList),
    ("additional_dependencies", Kind::StrList),
    ("files", Kind::Str),
    ("exclude", Kind::Str),
    ("types", Kind::StrList),
    ("types_or", Kind::StrList),
    ("exclude_types", Kind::StrList),
    ("stages", Kind::StrList),
    ("always_run", Kind::Bool),
    ("pass_filenames", Kind::Bool),
    ("require_serial", Kind::Bool),
    ("fail_fast", Kind::Bool),
    ("verbose", Kind::Bool),
    ("log_file", Kind::Str),
    ("description", Kind::Str),
    ("minimum_pre_commit_version", Kind::Str),
];

/// Rewrite the legacy list-only document into the `repos:` mapping form
///
/// Older manifests were a bare list of hook groups. They are still accepted,
/// with a warning, so the rest of the pipeline only sees the mapping form.
pub fn normalize(document: Value, report: &mut Report) -> Value {
    match document {
        Value::Sequence(groups) => {
            report.warn(
                Entry::Root,
                "uses the deprecated top-level list format; run `hookpin fmt --write` to migrate",
            );
            let mut root = Mapping::new();
            root.insert(Value::from("repos"), Value::Sequence(groups));
            Value::Mapping(root)
        }
        other => other,
    }
}

/// Check the structure of a whole document
pub fn check(document: &Value, report: &mut Report) {
    let Some(root) = document.as_mapping() else {
        report.error(Error::NotAMapping { entry: Entry::Root });
        return;
    };

    check_keys(root, &Entry::Root, TOP_LEVEL_KEYS, &["repos"], report);

    match root.get("repos") {
        None => report.error(Error::MissingField {
            entry: Entry::Root,
            field: "repos",
        }),
        Some(Value::Sequence(groups)) => {
            for (index, group) in groups.iter().enumerate() {
                check_group(index, group, report);
            }
        }
        Some(_) => report.error(Error::InvalidType {
            entry: Entry::Root,
            field: "repos".to_string(),
            expected: "a list of hook groups",
        }),
    }
}

fn check_group(index: usize, value: &Value, report: &mut Report) {
    let Some(group) = value.as_mapping() else {
        report.error(Error::NotAMapping {
            entry: Entry::group(index, None),
        });
        return;
    };

    let repo = required_string(group, &Entry::group(index, None), "repo", report);
    let entry = Entry::group(index, repo);
    let kind = repo.map(RepoKind::of);

    match kind {
        Some(kind @ (RepoKind::Local | RepoKind::Meta)) => {
            if group.contains_key("rev") {
                report.error(Error::InvalidValue {
                    entry: entry.clone(),
                    field: "rev",
                    message: format!(
                        "is not allowed for '{}' repos",
                        if kind == RepoKind::Local { "local" } else { "meta" }
                    ),
                });
            }
        }
        _ => {
            required_string(group, &entry, "rev", report);
        }
    }

    match group.get("hooks") {
        None => report.error(Error::MissingField {
            entry: entry.clone(),
            field: "hooks",
        }),
        Some(Value::Sequence(hooks)) if hooks.is_empty() => {
            report.error(Error::EmptyHooks {
                entry: entry.clone(),
            });
        }
        Some(Value::Sequence(hooks)) => {
            for (hook_index, hook) in hooks.iter().enumerate() {
                check_hook(&entry, hook_index, hook, report);
            }
        }
        Some(_) => report.error(Error::InvalidType {
            entry: entry.clone(),
            field: "hooks".to_string(),
            expected: "a list of hooks",
        }),
    }

    check_keys(group, &entry, &[], &["repo", "rev", "hooks"], report);
}

fn check_hook(group: &Entry, index: usize, value: &Value, report: &mut Report) {
    let Some(hook) = value.as_mapping() else {
        report.error(Error::NotAMapping {
            entry: group.hook(index, None),
        });
        return;
    };

    let id = required_string(hook, &group.hook(index, None), "id", report);
    let entry = group.hook(index, id);

    check_keys(hook, &entry, HOOK_KEYS, &["id"], report);
}

/// Check a key that must be present and hold a non-empty string
///
/// Returns the value when it is a non-empty string, so callers can use it to
/// label later diagnostics.
fn required_string<'a>(
    map: &'a Mapping,
    entry: &Entry,
    field: &'static str,
    report: &mut Report,
) -> Option<&'a str> {
    match map.get(field) {
        None => {
            report.error(Error::MissingField {
                entry: entry.clone(),
                field,
            });
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            report.error(Error::EmptyField {
                entry: entry.clone(),
                field,
            });
            None
        }
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            report.error(Error::InvalidType {
                entry: entry.clone(),
                field: field.to_string(),
                expected: Kind::Str.expected(),
            });
            None
        }
    }
}

/// Check optional keys against `known` and warn about unexpected ones
///
/// Keys listed in `handled` are validated by the caller and skipped here.
fn check_keys(
    map: &Mapping,
    entry: &Entry,
    known: &[(&str, Kind)],
    handled: &[&str],
    report: &mut Report,
) {
    for (key, value) in map {
        let Some(key) = key.as_str() else {
            report.error(Error::InvalidType {
                entry: entry.clone(),
                field: describe_key(key),
                expected: "a string key",
            });
            continue;
        };

        if handled.contains(&key) {
            continue;
        }

        match known.iter().find(|(name, _)| *name == key) {
            Some((_, kind)) => check_kind(entry, key, *kind, value, report),
            None if contains_tag(value) => report.error(Error::InvalidType {
                entry: entry.clone(),
                field: key.to_string(),
                expected: "an untagged value",
            }),
            None => report.warn(entry.clone(), format!("unexpected key '{key}'")),
        }
    }
}

fn check_kind(entry: &Entry, key: &str, kind: Kind, value: &Value, report: &mut Report) {
    let mismatch = |field: String| Error::InvalidType {
        entry: entry.clone(),
        field,
        expected: kind.expected(),
    };

    match (kind, value) {
        (Kind::Str, Value::String(_)) | (Kind::Bool, Value::Bool(_)) => {}
        (Kind::StrList, Value::Sequence(items)) => {
            // Name the offending element rather than the whole list
            for (i, item) in items.iter().enumerate() {
                if !item.is_string() {
                    report.error(Error::InvalidType {
                        entry: entry.clone(),
                        field: format!("{key}[{i}]"),
                        expected: Kind::Str.expected(),
                    });
                }
            }
        }
        (Kind::KeyedMap, Value::Mapping(map)) => {
            if let Some(k) = map.keys().find(|k| !k.is_string()) {
                report.error(Error::InvalidType {
                    entry: entry.clone(),
                    field: format!("{key}.{}", describe_key(k)),
                    expected: "keyed by a string",
                });
            }
        }
        (Kind::StrMap, Value::Mapping(map)) => {
            for (k, v) in map {
                if !k.is_string() || !v.is_string() {
                    report.error(mismatch(key.to_string()));
                    break;
                }
            }
        }
        _ => report.error(mismatch(key.to_string())),
    }
}

/// Unknown keys are kept as raw values, which cannot hold YAML tags
fn contains_tag(value: &Value) -> bool {
    match value {
        Value::Tagged(_) => true,
        Value::Sequence(items) => items.iter().any(contains_tag),
        Value::Mapping(map) => map.iter().any(|(k, v)| contains_tag(k) || contains_tag(v)),
        _ => false,
    }
}

fn describe_key(key: &Value) -> String {
    serde_yaml::to_string(key)
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| "<key>".to_string())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    fn run(yaml: &str) -> Report {
        let mut report = Report::new();
        let document = normalize(serde_yaml::from_str(yaml).unwrap(), &mut report);
        check(&document, &mut report);
        report
    }

    fn messages(report: &Report) -> Vec<String> {
        report.errors().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_minimal_group_passes() {
        let report = run(r"
repos:
  - repo: https://example.com/tool
    rev: 1.0.0
    hooks:
      - id: mytool
");
        assert!(report.is_clean(), "{:?}", report.errors());
    }

    #[test]
    fn test_missing_rev_names_repo() {
        let report = run(r"
repos:
  - repo: https://example.com/tool
    hooks:
      - id: mytool
");
        assert_eq!(
            messages(&report),
            vec!["repos[0] (repo: https://example.com/tool): missing required field 'rev'"]
        );
    }

    #[test]
    fn test_missing_repo() {
        let report = run(r"
repos:
  - rev: 1.0.0
    hooks:
      - id: mytool
");
        assert_eq!(messages(&report), vec!["repos[0]: missing required field 'repo'"]);
    }

    #[test]
    fn test_missing_repos_key() {
        let report = run("fail_fast: true\n");
        assert_eq!(messages(&report), vec!["top level: missing required field 'repos'"]);
    }

    #[test]
    fn test_document_must_be_mapping() {
        let report = run("just a string\n");
        assert_eq!(messages(&report), vec!["top level: must be a mapping"]);
    }

    #[test]
    fn test_empty_values_rejected() {
        let report = run(r#"
repos:
  - repo: https://example.com/tool
    rev: ""
    hooks:
      - id: "  "
"#);
        let msgs = messages(&report);
        assert_eq!(msgs.len(), 2);
        assert!(msgs[0].contains("field 'rev' must not be empty"));
        assert!(msgs[1].contains("repos[0].hooks[0]"));
        assert!(msgs[1].contains("field 'id' must not be empty"));
    }

    #[test]
    fn test_empty_hooks_rejected() {
        let report = run(r"
repos:
  - repo: https://example.com/tool
    rev: 1.0.0
    hooks: []
");
        assert!(matches!(report.errors(), [Error::EmptyHooks { .. }]));
    }

    #[test]
    fn test_numeric_rev_is_wrong_type() {
        let report = run(r"
repos:
  - repo: https://example.com/tool
    rev: 1.0
    hooks:
      - id: mytool
");
        assert_eq!(
            messages(&report),
            vec!["repos[0] (repo: https://example.com/tool): field 'rev' must be a string"]
        );
    }

    #[test]
    fn test_args_element_type_named() {
        let report = run(r"
repos:
  - repo: https://github.com/pycqa/isort
    rev: 5.10.1
    hooks:
      - id: isort
        args: [--profile, 3]
        additional_dependencies: toml
");
        let msgs = messages(&report);
        assert_eq!(msgs.len(), 2);
        assert!(msgs[0].contains("(id: isort, repo: https://github.com/pycqa/isort)"));
        assert!(msgs[0].contains("field 'args[1]' must be a string"));
        assert!(msgs[1].contains("field 'additional_dependencies' must be a list of strings"));
    }

    #[test]
    fn test_rev_not_allowed_for_local() {
        let report = run(r"
repos:
  - repo: local
    rev: 1.0.0
    hooks:
      - id: cargo-fmt
        name: cargo fmt
        entry: cargo fmt
        language: system
");
        assert_eq!(
            messages(&report),
            vec!["repos[0] (repo: local): field 'rev' is not allowed for 'local' repos"]
        );
    }

    #[test]
    fn test_meta_needs_no_rev() {
        let report = run(r"
repos:
  - repo: meta
    hooks:
      - id: check-hooks-apply
");
        assert!(report.is_clean());
    }

    #[test]
    fn test_unknown_keys_warn() {
        let report = run(r"
repos:
  - repo: https://example.com/tool
    rev: 1.0.0
    sha: abc
    hooks:
      - id: mytool
        colour: blue
extra_top: 1
");
        assert!(report.is_ok());
        let warnings: Vec<String> = report.warnings().iter().map(ToString::to_string).collect();
        assert_eq!(
            warnings,
            vec![
                "top level: unexpected key 'extra_top'",
                "repos[0].hooks[0] (id: mytool, repo: https://example.com/tool): unexpected key 'colour'",
                "repos[0] (repo: https://example.com/tool): unexpected key 'sha'",
            ]
        );
    }

    #[test]
    fn test_legacy_list_format_warns_and_passes() {
        let report = run(r"
- repo: https://example.com/tool
  rev: 1.0.0
  hooks:
    - id: mytool
");
        assert!(report.is_ok());
        assert_eq!(report.warnings().len(), 1);
        assert!(report.warnings()[0].message.contains("deprecated top-level list"));
    }

    #[test]
    fn test_non_mapping_hook() {
        let report = run(r"
repos:
  - repo: https://example.com/tool
    rev: 1.0.0
    hooks:
      - mytool
");
        assert_eq!(
            messages(&report),
            vec!["repos[0].hooks[0] (repo: https://example.com/tool): must be a mapping"]
        );
    }

    #[test]
    fn test_language_version_map_checked() {
        let report = run(r"
default_language_version:
  python: 3.8
repos:
  - repo: https://example.com/tool
    rev: 1.0.0
    hooks:
      - id: mytool
");
        assert_eq!(
            messages(&report),
            vec!["top level: field 'default_language_version' must be a mapping of strings to strings"]
        );
    }

    #[test]
    fn test_tagged_value_in_unknown_key_rejected() {
        let report = run(r"
repos:
  - repo: https://example.com/tool
    rev: 1.0.0
    hooks:
      - id: mytool
        x-note: !custom foo
        x-list: [a, !custom b]
");
        assert_eq!(
            messages(&report),
            vec![
                "repos[0].hooks[0] (id: mytool, repo: https://example.com/tool): field 'x-note' must be an untagged value",
                "repos[0].hooks[0] (id: mytool, repo: https://example.com/tool): field 'x-list' must be an untagged value",
            ]
        );
    }

    #[test]
    fn test_ci_keys_must_be_strings() {
        let report = run(r"
ci:
  1: a
repos:
  - repo: https://example.com/tool
    rev: 1.0.0
    hooks:
      - id: mytool
");
        assert_eq!(
            messages(&report),
            vec!["top level: field 'ci.1' must be keyed by a string"]
        );
    }

    #[test]
    fn test_all_problems_reported_together() {
        let report = run(r"
repos:
  - repo: https://a.example.com
    hooks:
      - id: a
  - repo: https://b.example.com
    rev: 2.0.0
  - 42
");
        assert_eq!(report.errors().len(), 3);
    }
}
