//! Sample manifest
//!
//! The baseline hook set: black, flake8 and isort for Python sources plus
//! the whitespace and merge-conflict checks from `pre-commit-hooks`. Kept in
//! sync with the repository's own `.pre-commit-config.yaml` and stored in
//! the layout `hookpin fmt` writes.

/// Sample manifest printed by `hookpin sample-config`
pub const SAMPLE_CONFIG: &str = r#"repos:
- repo: https://github.com/psf/black
  rev: 22.3.0
  hooks:
  - id: black
    language_version: python3
- repo: https://github.com/pycqa/flake8
  rev: 4.0.1
  hooks:
  - id: flake8
    args:
    - --max-line-length=88
    - --extend-ignore=E203,W503
    additional_dependencies:
    - flake8-bugbear==22.1.11
- repo: https://github.com/pycqa/isort
  rev: 5.10.1
  hooks:
  - id: isort
    args:
    - --profile
    - black
    additional_dependencies:
    - toml
- repo: https://github.com/pre-commit/pre-commit-hooks
  rev: v4.1.0
  hooks:
  - id: trailing-whitespace
  - id: end-of-file-fixer
  - id: check-merge-conflict
"#;
