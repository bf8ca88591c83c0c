//! Disallowed symbol characters.

use kousei_model::Sentence;

use crate::error::{ErrorSink, ValidatorError};
use crate::symbol::Symbol;
use crate::validator::{SentenceValidator, Validator, ValidatorContext};

/// Flags every occurrence of a character the symbol table disallows,
/// pointing at the canonical replacement.
#[derive(Debug, Default)]
pub struct InvalidSymbol {
    symbols: Vec<Symbol>,
}

impl Validator for InvalidSymbol {
    fn name(&self) -> &'static str {
        "InvalidSymbol"
    }

    fn init(&mut self, context: &ValidatorContext) -> Result<(), ValidatorError> {
        self.symbols = context
            .symbols
            .symbols()
            .iter()
            .filter(|symbol| !symbol.invalid_chars.is_empty())
            .cloned()
            .collect();
        Ok(())
    }
}

impl SentenceValidator for InvalidSymbol {
    fn validate(&self, sentence: &Sentence, sink: &mut ErrorSink<'_>) {
        for symbol in &self.symbols {
            for &variant in &symbol.invalid_chars {
                for (i, c) in sentence.content.chars().enumerate() {
                    if c == variant {
                        sink.report_at(
                            sentence,
                            format!(
                                "Found invalid symbol \"{variant}\"; use \"{}\" instead.",
                                symbol.value
                            ),
                            i..i + 1,
                        );
                    }
                }
            }
        }
    }
}
