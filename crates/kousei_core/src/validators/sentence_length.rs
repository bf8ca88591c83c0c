//! Sentence length limit.

use kousei_model::Sentence;

use crate::config::ValidatorProperties;
use crate::error::{ErrorSink, ValidatorError};
use crate::validator::{SentenceValidator, Validator, ValidatorContext};

const DEFAULT_MAX_LENGTH: usize = 30;

/// Flags sentences longer than `max_length` characters.
#[derive(Debug)]
pub struct SentenceLength {
    max_length: usize,
}

impl Default for SentenceLength {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Validator for SentenceLength {
    fn name(&self) -> &'static str {
        "SentenceLength"
    }

    fn pre_init(
        &mut self,
        properties: &ValidatorProperties,
        _context: &ValidatorContext,
    ) -> Result<(), ValidatorError> {
        let name = self.name();
        if let Some(max_length) = properties
            .usize_value("max_length")
            .map_err(|message| ValidatorError::configuration(name, message))?
        {
            self.max_length = max_length;
        }
        Ok(())
    }
}

impl SentenceValidator for SentenceLength {
    fn validate(&self, sentence: &Sentence, sink: &mut ErrorSink<'_>) {
        let length = sentence.char_count();
        if length > self.max_length {
            sink.report(
                sentence,
                format!(
                    "The sentence is {length} characters long; the limit is {}.",
                    self.max_length
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use kousei_text::{SegmenterRules, SentenceSegmenter};
    use pretty_assertions::assert_eq;

    use crate::error::{Severity, ValidationError};

    use super::*;

    fn check(validator: &SentenceLength, sentence: &Sentence) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut sink = ErrorSink::new(validator.name(), Severity::Error, &mut errors);
        validator.validate(sentence, &mut sink);
        errors
    }

    #[test]
    fn short_sentences_pass() {
        let validator = SentenceLength::default();
        assert!(check(&validator, &Sentence::new("Short and sweet.", 1)).is_empty());
    }

    #[test]
    fn long_sentences_are_flagged_with_counts() {
        let validator = SentenceLength::default();
        let sentence = Sentence::new("a".repeat(31), 4);
        let errors = check(&validator, &sentence);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 4);
        assert_eq!(
            errors[0].message,
            "The sentence is 31 characters long; the limit is 30."
        );
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        let validator = SentenceLength::default();
        // 10 three-byte characters
        let sentence = Sentence::new("あ".repeat(10), 1);
        assert!(check(&validator, &sentence).is_empty());
    }

    #[test]
    fn max_length_property_overrides_the_default() {
        let mut validator = SentenceLength::default();
        let mut properties = ValidatorProperties::default();
        properties.insert("max_length", 10);
        let context = ValidatorContext::new("en", crate::symbol::SymbolTable::english());
        validator.pre_init(&properties, &context).unwrap();
        let errors = check(&validator, &Sentence::new("Twelve chars.", 1));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn bad_property_type_is_a_configuration_error() {
        let mut validator = SentenceLength::default();
        let mut properties = ValidatorProperties::default();
        properties.insert("max_length", "long");
        let context = ValidatorContext::new("en", crate::symbol::SymbolTable::english());
        let error = validator.pre_init(&properties, &context).unwrap_err();
        assert!(matches!(error, ValidatorError::Configuration { .. }));
    }

    #[test]
    fn segmented_text_reports_only_the_long_sentence() {
        let segmenter = SentenceSegmenter::new(SegmenterRules::english());
        let sentences = segmenter.sentences(
            "Fine. This one meanders on for well over thirty characters in total.",
            1,
        );
        let validator = SentenceLength::default();
        let flagged: Vec<bool> = sentences
            .iter()
            .map(|sentence| !check(&validator, sentence).is_empty())
            .collect();
        assert_eq!(flagged, vec![false, true]);
    }
}
