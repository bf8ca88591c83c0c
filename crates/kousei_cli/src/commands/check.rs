//! Check command implementation

use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result};
use tracing::info;

use kousei_core::{Config, Linter, Severity};

use crate::cli::{Cli, OutputFormat};
use crate::output::output_results;

pub fn run_check(
    cli: &Cli,
    files: &[PathBuf],
    format: OutputFormat,
    lang: Option<&str>,
    threshold: Option<Severity>,
) -> Result<bool> {
    // Load configuration
    let mut config = if let Some(ref path) = cli.config {
        Config::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };

    // Command line overrides
    if let Some(lang) = lang {
        config.lang = lang.to_owned();
    }
    if let Some(threshold) = threshold {
        config.threshold = threshold;
    }

    // Setup failures are logged as warnings during construction; the
    // remaining validators still run.
    let (linter, _setup_failures) = Linter::new(&config);

    let (results, failures) = linter.lint_files(files);

    if !failures.is_empty() {
        eprintln!("\n{} file(s) failed to check:", failures.len());
        for (path, error) in &failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    let has_errors = output_results(&results, format, linter.threshold())?;

    Ok(has_errors || !failures.is_empty())
}

fn find_config() -> Result<Config> {
    if let Some(path) = Config::discover(Path::new(".")) {
        info!("Using config: {}", path.display());
        return Config::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(Config::default())
}
