//! Prohibited word dictionary.

use std::collections::HashSet;
use std::path::PathBuf;

use kousei_model::Sentence;

use crate::config::ValidatorProperties;
use crate::error::{ErrorSink, ValidatorError};
use crate::resource::{self, ResourceSource};
use crate::validator::{SentenceValidator, Validator, ValidatorContext};

/// Flags tokens found in the prohibited word dictionary. The dictionary is
/// the built-in list plus any words from the `list` property and any `dict`
/// file, all matched case-insensitively.
#[derive(Debug, Default)]
pub struct InvalidWord {
    words: HashSet<String>,
    extra: Vec<String>,
    dict: Option<PathBuf>,
}

impl Validator for InvalidWord {
    fn name(&self) -> &'static str {
        "InvalidWord"
    }

    fn supported_languages(&self) -> Option<&'static [&'static str]> {
        Some(&["en"])
    }

    fn needs_tokens(&self) -> bool {
        true
    }

    fn pre_init(
        &mut self,
        properties: &ValidatorProperties,
        _context: &ValidatorContext,
    ) -> Result<(), ValidatorError> {
        let name = self.name();
        if let Some(list) = properties
            .string_list_value("list")
            .map_err(|message| ValidatorError::configuration(name, message))?
        {
            self.extra = list.iter().map(|word| word.to_lowercase()).collect();
        }
        if let Some(dict) = properties
            .string_value("dict")
            .map_err(|message| ValidatorError::configuration(name, message))?
        {
            self.dict = Some(PathBuf::from(dict));
        }
        Ok(())
    }

    fn init(&mut self, context: &ValidatorContext) -> Result<(), ValidatorError> {
        let builtin = resource::cache().word_list(&ResourceSource::INVALID_WORD, &context.language)?;
        let mut words: HashSet<String> = builtin.as_ref().clone();
        words.extend(self.extra.iter().cloned());
        if let Some(dict) = &self.dict {
            let path = context.resolve(dict);
            let custom = resource::cache().word_list(&ResourceSource::File(path), &context.language)?;
            words.extend(custom.iter().cloned());
        }
        self.words = words;
        Ok(())
    }
}

impl SentenceValidator for InvalidWord {
    fn validate(&self, sentence: &Sentence, sink: &mut ErrorSink<'_>) {
        for token in sentence.tokens() {
            if self.words.contains(&token.surface.to_lowercase()) {
                sink.report_at(
                    sentence,
                    format!("Found invalid word \"{}\".", token.surface),
                    token.range(),
                );
            }
        }
    }
}
