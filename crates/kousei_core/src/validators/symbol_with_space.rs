//! Required spacing around symbols.

use kousei_model::Sentence;

use crate::error::{ErrorSink, ValidatorError};
use crate::symbol::Symbol;
use crate::validator::{SentenceValidator, Validator, ValidatorContext};

/// Checks symbols whose table entry requires adjacent whitespace. Each
/// occurrence yields at most one error even when both sides are missing,
/// and string boundaries count as satisfied.
#[derive(Debug, Default)]
pub struct SymbolWithSpace {
    symbols: Vec<Symbol>,
}

impl Validator for SymbolWithSpace {
    fn name(&self) -> &'static str {
        "SymbolWithSpace"
    }

    fn init(&mut self, context: &ValidatorContext) -> Result<(), ValidatorError> {
        self.symbols = context
            .symbols
            .symbols()
            .iter()
            .filter(|symbol| symbol.requires_space())
            .cloned()
            .collect();
        Ok(())
    }
}

impl SentenceValidator for SymbolWithSpace {
    fn validate(&self, sentence: &Sentence, sink: &mut ErrorSink<'_>) {
        let chars: Vec<char> = sentence.content.chars().collect();
        for symbol in &self.symbols {
            for (i, &c) in chars.iter().enumerate() {
                if c != symbol.value {
                    continue;
                }
                let before_ok =
                    !symbol.before_space || i == 0 || chars[i - 1].is_whitespace();
                let after_ok =
                    !symbol.after_space || i + 1 == chars.len() || chars[i + 1].is_whitespace();
                if before_ok && after_ok {
                    continue;
                }
                let side = match (before_ok, after_ok) {
                    (false, false) => "around",
                    (false, true) => "before",
                    _ => "after",
                };
                sink.report_at(
                    sentence,
                    format!("Need a space {side} \"{}\".", symbol.value),
                    i..i + 1,
                );
            }
        }
    }
}
