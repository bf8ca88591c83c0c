//! Double negative detection.

use std::collections::HashSet;
use std::sync::Arc;

use kousei_model::Sentence;

use crate::error::{ErrorSink, ValidatorError};
use crate::expression::ExpressionRule;
use crate::resource::{self, ResourceSource};
use crate::validator::{SentenceValidator, Validator, ValidatorContext};

/// Flags double negatives, at most once per sentence. Expression rules are
/// tried first in file order; if none match, the second token found in the
/// negative-word list is reported.
#[derive(Debug, Default)]
pub struct DoubleNegative {
    rules: Arc<Vec<ExpressionRule>>,
    words: Arc<HashSet<String>>,
}

impl Validator for DoubleNegative {
    fn name(&self) -> &'static str {
        "DoubleNegative"
    }

    fn supported_languages(&self) -> Option<&'static [&'static str]> {
        Some(&["en", "ja"])
    }

    fn needs_tokens(&self) -> bool {
        true
    }

    fn init(&mut self, context: &ValidatorContext) -> Result<(), ValidatorError> {
        self.rules = resource::cache()
            .expression_rules(&ResourceSource::DOUBLE_NEGATIVE_EXPRESSION, &context.language)?;
        self.words = resource::cache()
            .word_list(&ResourceSource::DOUBLE_NEGATIVE_WORD, &context.language)?;
        Ok(())
    }
}

impl SentenceValidator for DoubleNegative {
    fn validate(&self, sentence: &Sentence, sink: &mut ErrorSink<'_>) {
        let tokens = sentence.tokens();
        for rule in self.rules.iter() {
            if let Some(found) = rule.matches(tokens) {
                let start = tokens[found.start].offset;
                let end = tokens[found.end - 1].range().end;
                sink.report_at(sentence, "Found a double negative expression.", start..end);
                return;
            }
        }

        let mut negatives = 0;
        for token in tokens {
            if self.words.contains(&token.surface.to_lowercase()) {
                negatives += 1;
                if negatives == 2 {
                    sink.report_at(
                        sentence,
                        format!("Found a double negative (\"{}\").", token.surface),
                        token.range(),
                    );
                    return;
                }
            }
        }
    }
}
