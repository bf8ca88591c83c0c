//! Integration tests for the DoubleNegative validator
//!
//! Tests the full linting pipeline through the binary, including expression
//! rule matching and negative-word counting.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/double_negative")
}

fn kousei_cmd() -> Command {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("Failed to find workspace root");
    Command::new(workspace_root.join("target/debug/kousei"))
}

/// Writes a config enabling only the validator under test, so findings
/// cannot come from anywhere else.
fn config_dir(config: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(".kousei.jsonc"), config).expect("Failed to write config");
    dir
}

const ENGLISH: &str = r#"{ "validators": { "DoubleNegative": true } }"#;
const JAPANESE: &str = r#"{ "lang": "ja", "validators": { "DoubleNegative": true } }"#;

mod valid_cases {
    use super::*;

    #[test]
    fn allows_a_single_negation() {
        let fixture = fixtures_dir().join("valid_single_negation.md");
        let dir = config_dir(ENGLISH);

        kousei_cmd()
            .current_dir(dir.path())
            .arg("check")
            .arg(&fixture)
            .assert()
            .success()
            .stdout(predicate::str::contains("[DoubleNegative]").not());
    }

    #[test]
    fn allows_negations_in_separate_sentences() {
        let fixture = fixtures_dir().join("valid_separate_sentences.md");
        let dir = config_dir(ENGLISH);

        kousei_cmd()
            .current_dir(dir.path())
            .arg("check")
            .arg(&fixture)
            .assert()
            .success()
            .stdout(predicate::str::contains("[DoubleNegative]").not());
    }
}

mod invalid_cases {
    use super::*;

    #[test]
    fn detects_paired_negative_words() {
        let fixture = fixtures_dir().join("invalid_not_nothing.md");
        let dir = config_dir(ENGLISH);

        kousei_cmd()
            .current_dir(dir.path())
            .arg("check")
            .arg(&fixture)
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "Found a double negative (\"nothing\").",
            ));
    }

    #[test]
    fn detects_expression_rules() {
        let fixture = fixtures_dir().join("invalid_cant_hardly.md");
        let dir = config_dir(ENGLISH);

        kousei_cmd()
            .current_dir(dir.path())
            .arg("check")
            .arg(&fixture)
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "Found a double negative expression.",
            ));
    }

    #[test]
    fn detects_japanese_kana_expressions() {
        let fixture = fixtures_dir().join("invalid_japanese.md");
        let dir = config_dir(JAPANESE);

        kousei_cmd()
            .current_dir(dir.path())
            .arg("check")
            .arg(&fixture)
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "Found a double negative expression.",
            ));
    }
}
