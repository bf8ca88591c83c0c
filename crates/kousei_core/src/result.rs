//! Per-file lint results.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Severity, ValidationError};

/// The outcome of checking one file.
#[derive(Debug, Clone, Serialize)]
pub struct LintResult {
    /// Path of the checked file.
    pub path: PathBuf,
    /// Problems found, in document traversal order.
    pub errors: Vec<ValidationError>,
}

impl LintResult {
    pub fn new(path: PathBuf, errors: Vec<ValidationError>) -> Self {
        Self { path, errors }
    }

    /// Whether any finding is at least as severe as `threshold`.
    pub fn exceeds(&self, threshold: Severity) -> bool {
        self.errors
            .iter()
            .any(|error| error.severity.at_least(threshold))
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
