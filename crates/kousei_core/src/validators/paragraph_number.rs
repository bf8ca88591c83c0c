//! Paragraph count limit per section.

use kousei_model::Section;

use crate::config::ValidatorProperties;
use crate::error::{ErrorSink, ValidatorError};
use crate::validator::{SectionValidator, Validator, ValidatorContext};

const DEFAULT_MAX_NUM: usize = 5;

/// Flags sections containing more than `max_num` paragraphs, anchored at
/// the section heading.
#[derive(Debug)]
pub struct ParagraphNumber {
    max_num: usize,
}

impl Default for ParagraphNumber {
    fn default() -> Self {
        Self {
            max_num: DEFAULT_MAX_NUM,
        }
    }
}

impl Validator for ParagraphNumber {
    fn name(&self) -> &'static str {
        "ParagraphNumber"
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

impl SectionValidator for ParagraphNumber {
    fn validate(&self, section: &Section, sink: &mut ErrorSink<'_>) {
        let count = section.paragraphs().len();
        if count <= self.max_num {
            return;
        }
        let message = format!(
            "The section contains {count} paragraphs; the limit is {}.",
            self.max_num
        );
        match section.header().first() {
            Some(heading) => sink.report(heading, message),
            None => sink.report_line(section.line(), message),
        }
    }
}

#[cfg(test)]
mod tests {
    use kousei_model::{Document, Paragraph, Sentence};
    use pretty_assertions::assert_eq;

    use crate::error::{Severity, ValidationError};
    use crate::symbol::SymbolTable;

    use super::*;

    fn check(validator: &ParagraphNumber, section: &Section) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut sink = ErrorSink::new(validator.name(), Severity::Error, &mut errors);
        validator.validate(section, &mut sink);
        errors
    }

    fn document_with_paragraphs(count: usize) -> Document {
        let mut document = Document::new();
        let section = document.add_section(
            document.root(),
            1,
            vec![Sentence::new("Heading", 1)],
        );
        for i in 0..count {
            document.append_paragraph(
                section,
                Paragraph::new(vec![Sentence::new("Text.", i + 2)]),
            );
        }
        document
    }

    #[test]
    fn counts_at_the_limit_pass() {
        let validator = ParagraphNumber::default();
        let document = document_with_paragraphs(5);
        let sections: Vec<&Section> = document.sections().collect();
        assert!(check(&validator, sections[1]).is_empty());
    }

    #[test]
    fn overfull_sections_anchor_at_the_heading() {
        let validator = ParagraphNumber::default();
        let document = document_with_paragraphs(6);
        let sections: Vec<&Section> = document.sections().collect();
        let errors = check(&validator, sections[1]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 1);
        assert_eq!(errors[0].sentence, "Heading");
        assert_eq!(
            errors[0].message,
            "The section contains 6 paragraphs; the limit is 5."
        );
    }

    #[test]
    fn headingless_sections_anchor_at_their_line() {
        let validator = ParagraphNumber::default();
        let mut document = Document::new();
        for i in 0..6 {
            document.append_paragraph(
                document.root(),
                Paragraph::new(vec![Sentence::new("Text.", i + 1)]),
            );
        }
        let root = &document[document.root()];
        let errors = check(&validator, root);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 1);
        assert_eq!(errors[0].sentence, "");
    }

    #[test]
    fn max_num_property_overrides_the_default() {
        let mut validator = ParagraphNumber::default();
        let mut properties = ValidatorProperties::default();
        properties.insert("max_num", 1);
        let context = ValidatorContext::new("en", SymbolTable::english());
        validator.pre_init(&properties, &context).unwrap();
        let document = document_with_paragraphs(2);
        let sections: Vec<&Section> = document.sections().collect();
        assert_eq!(check(&validator, sections[1]).len(), 1);
    }
}
