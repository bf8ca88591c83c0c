//! JSON output formatter

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use kousei_core::{LintResult, ValidationError};

/// Machine-readable report: one entry per checked file plus an overall
/// finding count, so callers do not have to re-count.
#[derive(Serialize)]
struct Report<'a> {
    files: Vec<FileReport<'a>>,
    total_errors: usize,
}

#[derive(Serialize)]
struct FileReport<'a> {
    path: String,
    error_count: usize,
    errors: &'a [ValidationError],
}

pub fn output_json(results: &[LintResult]) -> Result<()> {
    let report = Report {
        files: results
            .iter()
            .map(|result| FileReport {
                path: result.path.display().to_string(),
                error_count: result.error_count(),
                errors: &result.errors,
            })
            .collect(),
        total_errors: results.iter().map(LintResult::error_count).sum(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).into_diagnostic()?
    );
    Ok(())
}
