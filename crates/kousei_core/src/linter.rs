//! The linter: file handling around the validation engine.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use kousei_model::Document;
use kousei_parser::{MarkdownParser, Parser, PlainTextParser, TreeBuilder};
use kousei_text::SentenceSegmenter;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::engine::ValidationEngine;
use crate::error::{LinterError, SetupFailure, Severity, ValidationError};
use crate::result::LintResult;

/// Checks documents on disk or in memory.
///
/// Owns the front end parsers, the tree builder and the validation engine.
/// The sentence segmenter is derived from the configured symbol table, so
/// symbol overrides affect segmentation as well as validation.
pub struct Linter {
    engine: ValidationEngine,
    builder: TreeBuilder,
    parsers: Vec<Box<dyn Parser>>,
    threshold: Severity,
}

impl Linter {
    /// Builds a linter from a configuration.
    ///
    /// Validator setup failures are returned alongside the linter; the
    /// remaining validators still run.
    pub fn new(config: &Config) -> (Self, Vec<SetupFailure>) {
        let (engine, failures) = ValidationEngine::new(config);
        let builder = TreeBuilder::new(SentenceSegmenter::new(engine.segmenter_rules()));
        let parsers: Vec<Box<dyn Parser>> = vec![
            Box::new(MarkdownParser::new()),
            Box::new(PlainTextParser::new()),
        ];
        (
            Self {
                engine,
                builder,
                parsers,
                threshold: config.threshold,
            },
            failures,
        )
    }

    /// Least severe level that still counts as a finding.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Checks files in parallel.
    ///
    /// Files that cannot be read or parsed are returned separately instead
    /// of aborting the run; results keep the order of `paths`.
    pub fn lint_files(&self, paths: &[PathBuf]) -> (Vec<LintResult>, Vec<(PathBuf, LinterError)>) {
        info!("Checking {} files", paths.len());
        let outcomes: Vec<_> = paths
            .par_iter()
            .map(|path| self.lint_file(path).map_err(|error| (path.clone(), error)))
            .collect();

        let mut results = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err((path, error)) => {
                    warn!("Failed to check {}: {}", path.display(), error);
                    failures.push((path, error));
                }
            }
        }
        (results, failures)
    }

    /// Checks one file, picking the front end from the file extension.
    pub fn lint_file(&self, path: &Path) -> Result<LintResult, LinterError> {
        debug!("Checking {}", path.display());
        let source = fs::read_to_string(path)?;
        let extension = path.extension().and_then(OsStr::to_str).unwrap_or("");
        let parser = self
            .parser_for(extension)
            .ok_or_else(|| kousei_parser::ParseError::unsupported_format(extension))?;
        let document = self
            .document(parser, &source)?
            .with_file_name(path.to_string_lossy());
        Ok(LintResult::new(
            path.to_path_buf(),
            self.engine.validate(&document),
        ))
    }

    /// Checks in-memory content as the given format, by extension or parser
    /// name (`"md"`, `"markdown"`, `"txt"`, ...).
    pub fn lint_content(
        &self,
        source: &str,
        format: &str,
    ) -> Result<Vec<ValidationError>, LinterError> {
        let parser = self
            .parser_for(format)
            .ok_or_else(|| kousei_parser::ParseError::unsupported_format(format))?;
        let document = self.document(parser, source)?;
        Ok(self.engine.validate(&document))
    }

    fn parser_for(&self, format: &str) -> Option<&dyn Parser> {
        self.parsers
            .iter()
            .map(|parser| parser.as_ref())
            .find(|parser| parser.can_parse(format) || parser.name() == format)
    }

    fn document(&self, parser: &dyn Parser, source: &str) -> Result<Document, LinterError> {
        let blocks = parser.parse(source)?;
        Ok(self.builder.build(&blocks))
    }
}
