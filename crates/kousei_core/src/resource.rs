//! Shared dictionary and rule-file loading.
//!
//! Dictionaries are immutable once loaded, so they live in a process-wide
//! cache keyed by `(source, language)`. Each key loads at most once even
//! under concurrent access; the loaded data is shared as an `Arc` between
//! every validator instance that asks for it.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use parking_lot::Mutex;
use regex::Regex;

use crate::error::ValidatorError;
use crate::expression::ExpressionRule;

const INVALID_WORD_EN: &str = include_str!("../resources/invalid-word-en.dat");
const DOUBLE_NEGATIVE_EXPRESSION_EN: &str =
    include_str!("../resources/double-negative-expression-en.dat");
const DOUBLE_NEGATIVE_EXPRESSION_JA: &str =
    include_str!("../resources/double-negative-expression-ja.dat");
const DOUBLE_NEGATIVE_WORD_EN: &str = include_str!("../resources/double-negative-word-en.dat");
const DOUBLE_NEGATIVE_WORD_JA: &str = include_str!("../resources/double-negative-word-ja.dat");
const ANCHOR_EXPRESSION_JA: &str = include_str!("../resources/anchor-expression-ja.dat");
const NUMBER_EXPRESSION_JA: &str = include_str!("../resources/number-expression-ja.dat");

/// Where a dictionary or rule file comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceSource {
    /// Embedded dictionary shipped with the crate, resolved per language.
    Builtin(&'static str),
    /// File on disk, shared across languages.
    File(PathBuf),
}

impl ResourceSource {
    pub const INVALID_WORD: ResourceSource = ResourceSource::Builtin("invalid-word");
    pub const DOUBLE_NEGATIVE_EXPRESSION: ResourceSource =
        ResourceSource::Builtin("double-negative-expression");
    pub const DOUBLE_NEGATIVE_WORD: ResourceSource =
        ResourceSource::Builtin("double-negative-word");
    pub const ANCHOR_EXPRESSION: ResourceSource = ResourceSource::Builtin("anchor-expression");
    pub const NUMBER_EXPRESSION: ResourceSource = ResourceSource::Builtin("number-expression");

    fn describe(&self, language: &str) -> String {
        match self {
            ResourceSource::Builtin(name) => format!("{name}-{language}"),
            ResourceSource::File(path) => path.display().to_string(),
        }
    }

    fn read(&self, language: &str) -> Result<String, ValidatorError> {
        match self {
            ResourceSource::Builtin(name) => embedded(name, language)
                .map(str::to_owned)
                .ok_or_else(|| {
                    ValidatorError::resource_load(
                        self.describe(language),
                        "no built-in dictionary for this language",
                    )
                }),
            ResourceSource::File(path) => fs::read_to_string(path)
                .map_err(|e| ValidatorError::resource_load(self.describe(language), e.to_string())),
        }
    }
}

fn embedded(name: &str, language: &str) -> Option<&'static str> {
    match (name, language) {
        ("invalid-word", "en") => Some(INVALID_WORD_EN),
        ("double-negative-expression", "en") => Some(DOUBLE_NEGATIVE_EXPRESSION_EN),
        ("double-negative-expression", "ja") => Some(DOUBLE_NEGATIVE_EXPRESSION_JA),
        ("double-negative-word", "en") => Some(DOUBLE_NEGATIVE_WORD_EN),
        ("double-negative-word", "ja") => Some(DOUBLE_NEGATIVE_WORD_JA),
        ("anchor-expression", "ja") => Some(ANCHOR_EXPRESSION_JA),
        ("number-expression", "ja") => Some(NUMBER_EXPRESSION_JA),
        _ => None,
    }
}

/// A pattern labelled with the writing style it detects.
#[derive(Debug)]
pub struct StyledPattern {
    pub style: String,
    pub pattern: Regex,
}

fn parse_styled_patterns(text: &str, origin: &str) -> Result<Vec<StyledPattern>, ValidatorError> {
    let mut patterns = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (style, raw) = line.split_once('\t').ok_or_else(|| {
            ValidatorError::resource_load(origin, format!("missing style label: {line:?}"))
        })?;
        let pattern = Regex::new(raw.trim())
            .map_err(|e| ValidatorError::resource_load(origin, e.to_string()))?;
        patterns.push(StyledPattern {
            style: style.to_owned(),
            pattern,
        });
    }
    Ok(patterns)
}

fn parse_word_list(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

type Key = (ResourceSource, String);
type Slot<T> = Arc<OnceCell<Arc<T>>>;

/// Process-wide resource cache.
#[derive(Default)]
pub struct ResourceCache {
    words: Mutex<HashMap<Key, Slot<HashSet<String>>>>,
    rules: Mutex<HashMap<Key, Slot<Vec<ExpressionRule>>>>,
    styled: Mutex<HashMap<Key, Slot<Vec<StyledPattern>>>>,
}

/// The shared cache instance.
pub fn cache() -> &'static ResourceCache {
    static CACHE: Lazy<ResourceCache> = Lazy::new(ResourceCache::default);
    &CACHE
}

impl ResourceCache {
    /// Loads a lowercased word set once per `(source, language)` pair.
    pub fn word_list(
        &self,
        source: &ResourceSource,
        language: &str,
    ) -> Result<Arc<HashSet<String>>, ValidatorError> {
        let cell = slot(&self.words, source, language);
        cell.get_or_try_init(|| {
            let text = source.read(language)?;
            Ok(Arc::new(parse_word_list(&text)))
        })
        .map(Arc::clone)
    }

    /// Loads an expression rule set once per `(source, language)` pair,
    /// preserving file order.
    pub fn expression_rules(
        &self,
        source: &ResourceSource,
        language: &str,
    ) -> Result<Arc<Vec<ExpressionRule>>, ValidatorError> {
        let cell = slot(&self.rules, source, language);
        cell.get_or_try_init(|| {
            let text = source.read(language)?;
            Ok(Arc::new(ExpressionRule::parse_all(&text)))
        })
        .map(Arc::clone)
    }

    /// Loads a style-labelled pattern set once per `(source, language)`
    /// pair, preserving file order.
    pub fn styled_patterns(
        &self,
        source: &ResourceSource,
        language: &str,
    ) -> Result<Arc<Vec<StyledPattern>>, ValidatorError> {
        let cell = slot(&self.styled, source, language);
        cell.get_or_try_init(|| {
            let text = source.read(language)?;
            let patterns = parse_styled_patterns(&text, &source.describe(language))?;
            Ok(Arc::new(patterns))
        })
        .map(Arc::clone)
    }
}

/// Grabs the per-key cell under a short map lock; loading happens outside
/// the lock so one slow file does not serialize unrelated lookups.
fn slot<T>(map: &Mutex<HashMap<Key, Slot<T>>>, source: &ResourceSource, language: &str) -> Slot<T> {
    map.lock()
        .entry((source.clone(), language.to_owned()))
        .or_default()
        .clone()
}
