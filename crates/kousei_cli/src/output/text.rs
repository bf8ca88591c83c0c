//! Text output formatter

use kousei_core::LintResult;

pub fn output_text(results: &[LintResult]) {
    for result in results {
        for error in &result.errors {
            println!(
                "{}:{}: {} [{}] {}",
                result.path.display(),
                error.line,
                error.severity,
                error.validator,
                error.message
            );
        }
    }

    let total_files = results.len();
    let total_issues: usize = results.iter().map(LintResult::error_count).sum();

    println!();
    println!("Checked {} files, found {} issues", total_files, total_issues);
}
