//! Paragraph opening check.

use kousei_model::Paragraph;

use crate::config::ValidatorProperties;
use crate::error::{ErrorSink, ValidatorError};
use crate::validator::{ParagraphValidator, Validator, ValidatorContext};

const DEFAULT_START_FROM: &str = " ";

/// Flags paragraphs whose first sentence does not begin with the configured
/// prefix, a single space by default.
#[derive(Debug)]
pub struct ParagraphStartWith {
    start_from: String,
}

impl Default for ParagraphStartWith {
    fn default() -> Self {
        Self {
            start_from: DEFAULT_START_FROM.to_string(),
        }
    }
}

impl Validator for ParagraphStartWith {
    fn name(&self) -> &'static str {
        "ParagraphStartWith"
    }

    fn pre_init(
        &mut self,
        properties: &ValidatorProperties,
        _context: &ValidatorContext,
    ) -> Result<(), ValidatorError> {
        let name = self.name();
        if let Some(start_from) = properties
            .string_value("start_from")
            .map_err(|message| ValidatorError::configuration(name, message))?
        {
            self.start_from = start_from.to_string();
        }
        Ok(())
    }
}

impl ParagraphValidator for ParagraphStartWith {
    fn validate(&self, paragraph: &Paragraph, sink: &mut ErrorSink<'_>) {
        let Some(first) = paragraph.sentences.first() else {
            return;
        };
        if !first.content.starts_with(&self.start_from) {
            sink.report(
                first,
                format!("The paragraph does not start with {:?}.", self.start_from),
            );
        }
    }
}
