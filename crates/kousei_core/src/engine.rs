//! The validation engine.
//!
//! Holds the configured validators and drives them over a document in a
//! fixed traversal order. Construction never fails outright: validators
//! that cannot be set up are skipped and reported as [`SetupFailure`]s so
//! the rest of the run still produces results.

use std::collections::HashSet;

use kousei_model::{Document, Sentence};
use kousei_text::{SegmenterRules, Tokenizer, UnicodeTokenizer, WhitespaceTokenizer};
use tracing::warn;

use crate::config::{Config, ValidatorProperties, ValidatorSetting};
use crate::error::{ErrorSink, SetupFailure, Severity, ValidationError};
use crate::registry;
use crate::symbol::SymbolTable;
use crate::validator::{AnyValidator, ValidatorContext};

struct Registered {
    validator: AnyValidator,
    severity: Severity,
}

impl Registered {
    fn sink<'a>(&self, errors: &'a mut Vec<ValidationError>) -> ErrorSink<'a> {
        ErrorSink::new(self.validator.base().name(), self.severity, errors)
    }
}

/// Runs a configured set of validators over documents.
///
/// The engine is immutable after construction, so one instance can check
/// many documents, from many threads, without further coordination.
pub struct ValidationEngine {
    validators: Vec<Registered>,
    tokenizer: Box<dyn Tokenizer>,
    symbols: SymbolTable,
    needs_tokens: bool,
}

impl ValidationEngine {
    /// Builds the engine from a configuration.
    ///
    /// Returns the engine together with the validators that failed setup.
    pub fn new(config: &Config) -> (Self, Vec<SetupFailure>) {
        let symbols = config.symbol_table();
        let mut context = ValidatorContext::new(&config.lang, symbols.clone());
        if let Some(base_dir) = &config.base_dir {
            context = context.with_base_dir(base_dir);
        }

        let default_properties = ValidatorProperties::default();
        let mut validators = Vec::new();
        let mut failures = Vec::new();
        for (name, setting) in config.validators.iter() {
            if !setting.is_enabled() {
                continue;
            }
            let properties = match setting {
                ValidatorSetting::Properties(properties) => properties,
                ValidatorSetting::Enabled(_) => &default_properties,
            };
            match registry::create(name, properties, &context) {
                Ok(validator) => validators.push(Registered {
                    validator,
                    severity: setting.severity().unwrap_or_default(),
                }),
                Err(error) => {
                    warn!("Skipping validator {name}: {error}");
                    failures.push(SetupFailure {
                        validator: name.to_owned(),
                        error,
                    });
                }
            }
        }

        let needs_tokens = validators
            .iter()
            .any(|registered| registered.validator.base().needs_tokens());
        let tokenizer: Box<dyn Tokenizer> = if config.lang == "ja" {
            Box::new(UnicodeTokenizer)
        } else {
            Box::new(WhitespaceTokenizer)
        };

        (
            Self {
                validators,
                tokenizer,
                symbols,
                needs_tokens,
            },
            failures,
        )
    }

    /// Sentence segmentation rules derived from the active symbol table, so
    /// symbol overrides change how documents split into sentences.
    pub fn segmenter_rules(&self) -> SegmenterRules {
        self.symbols.segmenter_rules()
    }

    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Runs every registered validator over the document.
    ///
    /// Sentences are visited per section: header first, then paragraph
    /// sentences, then list item sentences. Paragraph validators run after
    /// the sentences of their paragraph, section validators after their
    /// section, document validators last.
    pub fn validate(&self, document: &Document) -> Vec<ValidationError> {
        if self.needs_tokens {
            for sentence in document.sentences() {
                sentence.tokens_or_init(|| self.tokenizer.tokenize(&sentence.content));
            }
        }

        let mut errors = Vec::new();
        for section in document.sections() {
            for sentence in section.header() {
                self.each_sentence(sentence, &mut errors);
            }
            for paragraph in section.paragraphs() {
                for sentence in &paragraph.sentences {
                    self.each_sentence(sentence, &mut errors);
                }
                for registered in &self.validators {
                    if let AnyValidator::Paragraph(validator) = &registered.validator {
                        validator.validate(paragraph, &mut registered.sink(&mut errors));
                    }
                }
            }
            for list in section.lists() {
                for element in &list.elements {
                    for sentence in &element.sentences {
                        self.each_sentence(sentence, &mut errors);
                    }
                }
            }
            for registered in &self.validators {
                if let AnyValidator::Section(validator) = &registered.validator {
                    validator.validate(section, &mut registered.sink(&mut errors));
                }
            }
        }
        for registered in &self.validators {
            if let AnyValidator::Document(validator) = &registered.validator {
                validator.validate(document, &mut registered.sink(&mut errors));
            }
        }

        dedup(&mut errors);
        errors
    }

    fn each_sentence(&self, sentence: &Sentence, errors: &mut Vec<ValidationError>) {
        for registered in &self.validators {
            if let AnyValidator::Sentence(validator) = &registered.validator {
                validator.validate(sentence, &mut registered.sink(errors));
            }
        }
    }
}

/// Drops repeated reports, keeping the first of each. Registering the same
/// validator twice must not double its findings.
fn dedup(errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    errors.retain(|error| {
        seen.insert((
            error.validator.clone(),
            error.line,
            error.message.clone(),
            error.range.clone(),
        ))
    });
}
