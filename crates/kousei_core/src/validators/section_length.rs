//! Section length limit.

use kousei_model::{Section, Sentence};

use crate::config::ValidatorProperties;
use crate::error::{ErrorSink, ValidatorError};
use crate::validator::{SectionValidator, Validator, ValidatorContext};

const DEFAULT_MAX_NUM: usize = 1000;

/// Flags sections whose paragraph text exceeds `max_num` characters.
/// Heading and list item text does not count toward the total.
#[derive(Debug)]
pub struct SectionLength {
    max_num: usize,
}

impl Default for SectionLength {
    fn default() -> Self {
        Self {
            max_num: DEFAULT_MAX_NUM,
        }
    }
}

impl Validator for SectionLength {
    fn name(&self) -> &'static str {
        "SectionLength"
    }

    fn pre_init(
        &mut self,
        properties: &ValidatorProperties,
        _context: &ValidatorContext,
    ) -> Result<(), ValidatorError> {
        let name = self.name();
        if let Some(max_num) = properties
            .usize_value("max_num")
            .map_err(|message| ValidatorError::configuration(name, message))?
        {
            self.max_num = max_num;
        }
        Ok(())
    }
}

impl SectionValidator for SectionLength {
    fn validate(&self, section: &Section, sink: &mut ErrorSink<'_>) {
        let total: usize = section
            .paragraphs()
            .iter()
            .flat_map(|paragraph| &paragraph.sentences)
            .map(Sentence::char_count)
            .sum();
        if total <= self.max_num {
            return;
        }
        let message = format!(
            "The section is {total} characters long; the limit is {}.",
            self.max_num
        );
        match section.header().first() {
            Some(heading) => sink.report(heading, message),
            None => sink.report_line(section.line(), message),
        }
    }
}
