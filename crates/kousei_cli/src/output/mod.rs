//! Output formatting module

mod json;
mod text;

use miette::Result;

use kousei_core::{LintResult, Severity};

use crate::cli::OutputFormat;

pub fn output_results(
    results: &[LintResult],
    format: OutputFormat,
    threshold: Severity,
) -> Result<bool> {
    let has_errors = results.iter().any(|r| r.exceeds(threshold));

    match format {
        OutputFormat::Json => json::output_json(results)?,
        OutputFormat::Text => text::output_text(results),
    }

    Ok(has_errors)
}
