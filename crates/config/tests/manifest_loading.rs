//! Integration tests for manifest loading and round-tripping

use hookpin_config::sample::SAMPLE_CONFIG;
use hookpin_config::{Error, Manifest, ManifestLoader, RepoKind, ValidationOptions};
use std::path::Path;

fn strict_loader() -> ManifestLoader {
    ManifestLoader::new(ValidationOptions {
        strict: true,
        ..ValidationOptions::default()
    })
}

fn roundtrip(manifest: &Manifest) -> Manifest {
    let yaml = manifest.to_yaml().unwrap();
    ManifestLoader::default()
        .load_str("roundtrip", &yaml)
        .unwrap()
        .manifest
}

#[test]
fn test_repository_manifest_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../.pre-commit-config.yaml");
    let loaded = strict_loader().load_path(&path).unwrap();

    let sample = ManifestLoader::default()
        .load_str("sample", SAMPLE_CONFIG)
        .unwrap();
    assert_eq!(loaded.manifest, sample.manifest);
}

#[test]
fn test_repository_manifest_is_normalised() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../.pre-commit-config.yaml");
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, SAMPLE_CONFIG);

    let loaded = ManifestLoader::default().load_str("repository", &content).unwrap();
    assert_eq!(loaded.manifest.to_yaml().unwrap(), content);
}

#[test]
fn test_repository_manifest_invariants() {
    let loaded = ManifestLoader::default()
        .load_str("sample", SAMPLE_CONFIG)
        .unwrap();

    for group in &loaded.manifest.repos {
        assert!(!group.repo.is_empty());
        assert!(group.rev.as_deref().is_some_and(|rev| !rev.is_empty()));
        assert!(!group.hooks.is_empty());
        for hook in &group.hooks {
            assert!(!hook.id.is_empty());
        }
    }
}

#[test]
fn test_single_hook_scenario() {
    let loaded = ManifestLoader::default()
        .load_str(
            "scenario",
            "repos:\n  - repo: https://example.com/tool\n    rev: 1.0.0\n    hooks:\n      - id: mytool\n",
        )
        .unwrap();

    let summary = loaded.manifest.summary();
    assert_eq!(summary.groups, 1);
    assert_eq!(summary.hooks, 1);

    let hook = &loaded.manifest.repos[0].hooks[0];
    assert_eq!(hook.id, "mytool");
    assert!(hook.args.is_empty());
    assert!(hook.additional_dependencies.is_empty());
}

#[test]
fn test_missing_rev_scenario() {
    let err = ManifestLoader::default()
        .load_str(
            "scenario",
            "repos:\n  - repo: https://example.com/tool\n    hooks:\n      - id: mytool\n",
        )
        .unwrap_err();

    let Error::Validation { errors, .. } = err else {
        panic!("expected a validation error");
    };
    assert_eq!(errors.len(), 1);

    match &errors[0] {
        Error::MissingField { entry, field } => {
            assert_eq!(*field, "rev");
            assert_eq!(entry.repo(), Some("https://example.com/tool"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_sample_roundtrip() {
    let original = ManifestLoader::default()
        .load_str("sample", SAMPLE_CONFIG)
        .unwrap()
        .manifest;

    assert_eq!(roundtrip(&original), original);
}

#[test]
fn test_full_featured_roundtrip_preserves_order_and_extras() {
    let content = r"
default_language_version:
  python: python3.10
default_stages: [pre-commit, pre-push]
exclude: '^docs/'
fail_fast: false
ci:
  autofix_prs: true
  skip: [cargo-check]
repos:
  - repo: local
    hooks:
      - id: cargo-check
        name: cargo check
        entry: cargo check
        language: system
        types: [rust]
        pass_filenames: false
  - repo: meta
    hooks:
      - id: check-useless-excludes
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.1.0
    hooks:
      - id: check-yaml
        args: [--unsafe]
      - id: trailing-whitespace
        x-owner: platform-team
";
    let original = ManifestLoader::default()
        .load_str("full", content)
        .unwrap();
    // x-owner is preserved but reported
    assert_eq!(original.warnings.len(), 1);

    let original = original.manifest;
    let back = roundtrip(&original);
    assert_eq!(back, original);

    let kinds: Vec<RepoKind> = back.repos.iter().map(|g| g.kind()).collect();
    assert_eq!(kinds, vec![RepoKind::Local, RepoKind::Meta, RepoKind::Remote]);
    assert_eq!(back.repos[2].hooks[0].id, "check-yaml");
    assert_eq!(back.repos[2].hooks[1].id, "trailing-whitespace");
    assert!(back.repos[2].hooks[1].extra.contains_key("x-owner"));
    assert_eq!(back.fail_fast, Some(false));
}

#[test]
fn test_legacy_format_roundtrips_into_mapping_form() {
    let legacy = "- repo: https://example.com/tool\n  rev: 1.0.0\n  hooks:\n    - id: mytool\n";
    let loaded = ManifestLoader::default().load_str("legacy", legacy).unwrap();
    assert_eq!(loaded.warnings.len(), 1);

    let yaml = loaded.manifest.to_yaml().unwrap();
    assert!(yaml.starts_with("repos:"));

    let migrated = strict_loader().load_str("migrated", &yaml).unwrap();
    assert_eq!(migrated.manifest, loaded.manifest);
}
