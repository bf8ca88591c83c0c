//! Error types for validation and linting.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use kousei_model::Sentence;

/// Severity attached to a reported problem.
///
/// Ordered from most to least severe, so `Error < Warning < Info` under the
/// derived ordering and "at least as severe as" is a plain `<=` comparison.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Returns whether this severity is at least as severe as `threshold`.
    pub fn at_least(self, threshold: Severity) -> bool {
        self <= threshold
    }

    /// Lowercase name as used in configuration files and output.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            other => Err(format!(
                "unknown severity \"{other}\" (expected error, warning or info)"
            )),
        }
    }
}

/// A single problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Name of the validator that reported the problem.
    pub validator: String,
    /// Severity the validator was registered with.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// 1-based line of the offending sentence.
    pub line: usize,
    /// Content of the offending sentence, empty for structural anchors.
    pub sentence: String,
    /// Character range within the sentence, when the problem is positional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range<usize>>,
}

/// Write handle passed to validators.
///
/// Stamps the registered validator name and severity onto every report so
/// validators only supply the location and the message.
pub struct ErrorSink<'a> {
    validator: &'a str,
    severity: Severity,
    errors: &'a mut Vec<ValidationError>,
}

impl<'a> ErrorSink<'a> {
    pub fn new(validator: &'a str, severity: Severity, errors: &'a mut Vec<ValidationError>) -> Self {
        Self {
            validator,
            severity,
            errors,
        }
    }

    /// Reports a problem covering a whole sentence.
    pub fn report(&mut self, sentence: &Sentence, message: impl Into<String>) {
        self.push(sentence.position, sentence.content.clone(), message.into(), None);
    }

    /// Reports a problem at a character range within a sentence.
    pub fn report_at(
        &mut self,
        sentence: &Sentence,
        message: impl Into<String>,
        range: Range<usize>,
    ) {
        self.push(
            sentence.position,
            sentence.content.clone(),
            message.into(),
            Some(range),
        );
    }

    /// Reports a problem anchored to a line with no sentence content, used
    /// for sections that have no heading sentence.
    pub fn report_line(&mut self, line: usize, message: impl Into<String>) {
        self.push(line, String::new(), message.into(), None);
    }

    fn push(&mut self, line: usize, sentence: String, message: String, range: Option<Range<usize>>) {
        self.errors.push(ValidationError {
            validator: self.validator.to_owned(),
            severity: self.severity,
            message,
            line,
            sentence,
            range,
        });
    }
}

/// Errors raised while constructing or configuring a validator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidatorError {
    /// A configuration property was missing or had the wrong shape.
    #[error("Configuration error in {validator}: {message}")]
    Configuration { validator: String, message: String },

    /// The configuration named a validator that does not exist.
    #[error("Unknown validator: {0}")]
    UnsupportedValidator(String),

    /// The validator does not support the configured language.
    #[error("{validator} does not support language \"{language}\"")]
    UnsupportedLanguage { validator: String, language: String },

    /// A dictionary or rule file could not be loaded.
    #[error("Failed to load resource {resource}: {message}")]
    ResourceLoad { resource: String, message: String },
}

impl ValidatorError {
    pub fn configuration(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            validator: validator.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_language(validator: impl Into<String>, language: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            validator: validator.into(),
            language: language.into(),
        }
    }

    pub fn resource_load(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ResourceLoad {
            resource: resource.into(),
            message: message.into(),
        }
    }
}

/// A validator that could not be set up.
///
/// Setup failures do not abort the run. The remaining validators still
/// execute and failures are surfaced alongside the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupFailure {
    /// Configured validator name.
    pub validator: String,
    /// Why setup failed.
    pub error: ValidatorError,
}

/// Errors that can occur while linting.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] kousei_parser::ParseError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LinterError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
