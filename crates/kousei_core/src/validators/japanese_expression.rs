//! Japanese writing-style checks for anchors and counts.

use std::sync::Arc;

use kousei_model::Sentence;

use crate::config::ValidatorProperties;
use crate::error::{ErrorSink, ValidatorError};
use crate::resource::{self, ResourceSource, StyledPattern};
use crate::validator::{SentenceValidator, Validator, ValidatorContext};

const DEFAULT_MODE: &str = "numeric";

/// Style gate shared by both checks. One style is the expected way of
/// writing the expression; matches of every other style in the set are
/// reported, once per occurrence.
#[derive(Debug)]
struct StyleCheck {
    mode: String,
    patterns: Arc<Vec<StyledPattern>>,
}

impl Default for StyleCheck {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            patterns: Arc::default(),
        }
    }
}

impl StyleCheck {
    fn configure(
        &mut self,
        name: &'static str,
        properties: &ValidatorProperties,
    ) -> Result<(), ValidatorError> {
        if let Some(mode) = properties
            .string_value("mode")
            .map_err(|message| ValidatorError::configuration(name, message))?
        {
            self.mode = mode.to_string();
        }
        Ok(())
    }

    fn load(
        &mut self,
        name: &'static str,
        source: &ResourceSource,
        context: &ValidatorContext,
    ) -> Result<(), ValidatorError> {
        self.patterns = resource::cache().styled_patterns(source, &context.language)?;
        if !self.patterns.iter().any(|p| p.style == self.mode) {
            return Err(ValidatorError::configuration(
                name,
                format!("unknown mode {:?}", self.mode),
            ));
        }
        Ok(())
    }

    fn check(&self, sentence: &Sentence, what: &str, sink: &mut ErrorSink<'_>) {
        for styled in self.patterns.iter() {
            if styled.style == self.mode {
                continue;
            }
            for found in styled.pattern.find_iter(&sentence.content) {
                let start = sentence.content[..found.start()].chars().count();
                let end = start + found.as_str().chars().count();
                sink.report_at(
                    sentence,
                    format!(
                        "Found a {what} \"{}\" not written in {} style.",
                        found.as_str(),
                        self.mode
                    ),
                    start..end,
                );
            }
        }
    }
}

/// Flags chapter and section anchors whose number style differs from the
/// configured mode, "numeric" by default.
#[derive(Debug, Default)]
pub struct JapaneseAnchorExpression {
    style: StyleCheck,
}

impl Validator for JapaneseAnchorExpression {
    fn name(&self) -> &'static str {
        "JapaneseAnchorExpression"
    }

    fn supported_languages(&self) -> Option<&'static [&'static str]> {
        Some(&["ja"])
    }

    fn pre_init(
        &mut self,
        properties: &ValidatorProperties,
        _context: &ValidatorContext,
    ) -> Result<(), ValidatorError> {
        let name = self.name();
        self.style.configure(name, properties)
    }

    fn init(&mut self, context: &ValidatorContext) -> Result<(), ValidatorError> {
        let name = self.name();
        self.style
            .load(name, &ResourceSource::ANCHOR_EXPRESSION, context)
    }
}

impl SentenceValidator for JapaneseAnchorExpression {
    fn validate(&self, sentence: &Sentence, sink: &mut ErrorSink<'_>) {
        self.style.check(sentence, "chapter anchor", sink);
    }
}

/// Flags counting expressions whose number style differs from the
/// configured mode, "numeric" by default.
#[derive(Debug, Default)]
pub struct JapaneseNumberExpression {
    style: StyleCheck,
}

impl Validator for JapaneseNumberExpression {
    fn name(&self) -> &'static str {
        "JapaneseNumberExpression"
    }

    fn supported_languages(&self) -> Option<&'static [&'static str]> {
        Some(&["ja"])
    }

    fn pre_init(
        &mut self,
        properties: &ValidatorProperties,
        _context: &ValidatorContext,
    ) -> Result<(), ValidatorError> {
        let name = self.name();
        self.style.configure(name, properties)
    }

    fn init(&mut self, context: &ValidatorContext) -> Result<(), ValidatorError> {
        let name = self.name();
        self.style
            .load(name, &ResourceSource::NUMBER_EXPRESSION, context)
    }
}

impl SentenceValidator for JapaneseNumberExpression {
    fn validate(&self, sentence: &Sentence, sink: &mut ErrorSink<'_>) {
        self.style.check(sentence, "counting expression", sink);
    }
}
