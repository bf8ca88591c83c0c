//! Integration tests for the validation pipeline
//!
//! Runs full configurations through the linter front-to-back: config
//! parsing, symbol overrides, sentence extraction and validator reports.

use std::path::PathBuf;

use kousei_core::{Config, LintResult, Linter, Severity};
use pretty_assertions::assert_eq;

#[test]
fn symbol_overrides_enforce_spacing_rules() {
    let config = Config::from_json(
        r#"{
            "validators": { "SymbolWithSpace": true },
            "symbols": { "COLON": { "after_space": true } }
        }"#,
    )
    .unwrap();
    let (linter, failures) = Linter::new(&config);
    assert!(failures.is_empty());

    let errors = linter.lint_content("ask:yes\n", "txt").unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].validator, "SymbolWithSpace");
    assert_eq!(errors[0].message, "Need a space after \":\".");
    assert_eq!(errors[0].line, 1);
    assert_eq!(errors[0].range, Some(3..4));
}

#[test]
fn double_negatives_report_once_per_sentence() {
    let config = Config::from_json(r#"{ "validators": { "DoubleNegative": true } }"#).unwrap();
    let (linter, failures) = Linter::new(&config);
    assert!(failures.is_empty());

    let errors = linter
        .lint_content("He did not see nothing on the way home.\n", "txt")
        .unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Found a double negative (\"nothing\").");
    assert_eq!(errors[0].range, Some(15..22));
}

#[test]
fn full_stop_overrides_change_segmentation() {
    let config = Config::from_json(
        r#"{
            "validators": { "SentenceLength": { "max_length": 8 } },
            "symbols": { "FULL_STOP": { "value": "。" } }
        }"#,
    )
    .unwrap();
    let (linter, failures) = Linter::new(&config);
    assert!(failures.is_empty());

    let errors = linter
        .lint_content("Short。This one is long。\n", "txt")
        .unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].sentence, "This one is long。");
}

#[test]
fn japanese_configs_use_wide_symbol_defaults() {
    let config = Config::from_json(
        r#"{ "lang": "ja", "validators": { "CommaNumber": { "max_num": 1 } } }"#,
    )
    .unwrap();
    let (linter, failures) = Linter::new(&config);
    assert!(failures.is_empty());

    let errors = linter.lint_content("これは、短い、文です。\n", "txt").unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].validator, "CommaNumber");
    assert_eq!(errors[0].line, 1);
}

#[test]
fn dictionary_paths_resolve_against_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("project-words.dat"), "blimey\n").unwrap();
    let config_path = dir.path().join(".kousei.jsonc");
    std::fs::write(
        &config_path,
        r#"{
            // Project-specific vocabulary lives next to this file.
            "validators": { "InvalidWord": { "dict": "project-words.dat" } }
        }"#,
    )
    .unwrap();
    let document_path = dir.path().join("notes.md");
    std::fs::write(&document_path, "Blimey, that is odd.\n").unwrap();

    let config = Config::from_file(&config_path).unwrap();
    let (linter, failures) = Linter::new(&config);
    assert!(failures.is_empty());

    let (results, skipped) = linter.lint_files(&[document_path]);
    assert!(skipped.is_empty());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].errors.len(), 1);
    assert_eq!(results[0].errors[0].message, "Found invalid word \"Blimey\".");
}

#[test]
fn severity_overrides_gate_the_failure_threshold() {
    let config = Config::from_json(
        r#"{ "validators": { "SentenceLength": { "max_length": 5, "severity": "info" } } }"#,
    )
    .unwrap();
    let (linter, failures) = Linter::new(&config);
    assert!(failures.is_empty());

    let errors = linter
        .lint_content("This sentence runs well past five characters.\n", "txt")
        .unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].severity, Severity::Info);

    let result = LintResult::new(PathBuf::from("notes.md"), errors);
    assert!(!result.exceeds(Severity::Error));
    assert!(result.exceeds(Severity::Info));
}

#[test]
fn unsupported_validators_are_skipped_not_fatal() {
    let config = Config::from_json(
        r#"{ "lang": "ja", "validators": { "InvalidWord": true, "CommaNumber": true } }"#,
    )
    .unwrap();
    let (linter, failures) = Linter::new(&config);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].validator, "InvalidWord");

    let errors = linter.lint_content("これは、短い文です。\n", "txt").unwrap();
    assert!(errors.is_empty());
}

#[test]
fn unknown_languages_are_rejected() {
    assert!(Config::from_json(r#"{ "lang": "fr" }"#).is_err());
}
