//! Comma count limit.

use kousei_model::Sentence;

use crate::config::ValidatorProperties;
use crate::error::{ErrorSink, ValidatorError};
use crate::symbol::SymbolKind;
use crate::validator::{SentenceValidator, Validator, ValidatorContext};

const DEFAULT_MAX_NUM: usize = 3;

/// Flags sentences with more than `max_num` commas. The comma character
/// comes from the active symbol table, so Japanese documents count `、`.
#[derive(Debug)]
pub struct CommaNumber {
    max_num: usize,
    comma: char,
}

impl Default for CommaNumber {
    fn default() -> Self {
        Self {
            max_num: DEFAULT_MAX_NUM,
            comma: ',',
        }
    }
}

impl Validator for CommaNumber {
    fn name(&self) -> &'static str {
        "CommaNumber"
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

    fn init(&mut self, context: &ValidatorContext) -> Result<(), ValidatorError> {
        if let Some(symbol) = context.symbols.get(SymbolKind::Comma) {
            self.comma = symbol.value;
        }
        Ok(())
    }
}

impl SentenceValidator for CommaNumber {
    fn validate(&self, sentence: &Sentence, sink: &mut ErrorSink<'_>) {
        let count = sentence
            .content
            .chars()
            .filter(|&c| c == self.comma)
            .count();
        if count > self.max_num {
            sink.report(
                sentence,
                format!(
                    "The sentence contains {count} commas; the limit is {}.",
                    self.max_num
                ),
            );
        }
    }
}
