//! Unexpanded acronym detection.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use kousei_model::{Document, Sentence};

use crate::config::ValidatorProperties;
use crate::error::{ErrorSink, ValidatorError};
use crate::validator::{DocumentValidator, Validator, ValidatorContext};

/// Flags acronyms that are never written out.
///
/// A candidate is a token of two to four uppercase ASCII letters. An
/// acronym counts as expanded when it appears as a contiguous substring of
/// the initials of some sentence's capitalized words, as in "Self Organized
/// Criticality" for "SOC". Each unexpanded acronym is reported once, at its
/// first occurrence.
#[derive(Debug, Default)]
pub struct UnexpandedAcronym {
    ignore: HashSet<String>,
}

fn is_candidate(surface: &str) -> bool {
    let length = surface.chars().count();
    (2..=4).contains(&length) && surface.chars().all(|c| c.is_ascii_uppercase())
}

impl Validator for UnexpandedAcronym {
    fn name(&self) -> &'static str {
        "UnexpandedAcronym"
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
            self.ignore = list.into_iter().collect();
        }
        Ok(())
    }
}

impl DocumentValidator for UnexpandedAcronym {
    fn validate(&self, document: &Document, sink: &mut ErrorSink<'_>) {
        let mut initials: Vec<String> = Vec::new();
        let mut order: Vec<&str> = Vec::new();
        let mut first_seen: HashMap<&str, (&Sentence, Range<usize>)> = HashMap::new();

        for sentence in document.sentences() {
            let mut heads = String::new();
            for token in sentence.tokens() {
                let surface = token.surface.as_str();
                if is_candidate(surface) && !first_seen.contains_key(surface) {
                    order.push(surface);
                    first_seen.insert(surface, (sentence, token.range()));
                }
                if let Some(first) = surface.chars().next()
                    && first.is_ascii_uppercase()
                {
                    heads.push(first);
                }
            }
            initials.push(heads);
        }

        for acronym in order {
            if self.ignore.contains(acronym) {
                continue;
            }
            if initials.iter().any(|heads| heads.contains(acronym)) {
                continue;
            }
            if let Some((sentence, range)) = first_seen.get(acronym) {
                sink.report_at(
                    sentence,
                    format!("The acronym \"{acronym}\" is never expanded."),
                    range.clone(),
                );
            }
        }
    }
}
