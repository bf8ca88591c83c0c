//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use kousei_core::Severity;

/// kousei - A proofreading linter for prose documents
#[derive(Parser)]
#[command(name = "kousei")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check files
    Check {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Document language, overriding the configuration
        #[arg(short, long)]
        lang: Option<String>,

        /// Least severe level that fails the run (error, warning, info)
        #[arg(short, long)]
        threshold: Option<Severity>,
    },

    /// List the available validators
    Validators,

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per finding plus a summary
    Text,
    /// Machine-readable results array
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn arguments_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_parses_format_and_threshold() {
        let cli = Cli::parse_from(["kousei", "check", "a.md", "-f", "json", "-t", "warning"]);
        match cli.command {
            Commands::Check {
                files,
                format,
                threshold,
                ..
            } => {
                assert_eq!(files, vec![PathBuf::from("a.md")]);
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(threshold, Some(Severity::Warning));
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["kousei", "check", "a.md", "-v", "-q"]);
        assert!(result.is_err());
    }
}
