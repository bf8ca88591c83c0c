//! Sentence and token types.

use std::sync::OnceLock;

/// A surface token produced by a tokenizer.
///
/// `offset` is the character index of the surface within the owning
/// sentence's content. Offsets are character based, not byte based, so they
/// can be reported in diagnostics without further conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form exactly as it appears in the sentence.
    pub surface: String,
    /// Optional part-of-speech tag.
    pub tag: Option<String>,
    /// Character offset of the surface within the sentence content.
    pub offset: usize,
}

impl Token {
    pub fn new(surface: impl Into<String>, offset: usize) -> Self {
        Self {
            surface: surface.into(),
            tag: None,
            offset,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Character length of the surface form.
    pub fn len(&self) -> usize {
        self.surface.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.surface.is_empty()
    }

    /// Character range `[offset, offset + len)` covered by this token.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len()
    }
}

/// A single sentence of normalized prose.
///
/// Content never contains raw markup syntax; `position` always resolves to
/// the original source, never to the stripped form. Tokens are attached at
/// most once, by the validation engine, and only when a registered validator
/// needs them.
#[derive(Debug)]
pub struct Sentence {
    /// Markup-stripped text, leading whitespace preserved.
    pub content: String,
    /// 1-based source line of the first visible character.
    pub position: usize,
    /// Whether this is the first sentence of its containing block.
    pub is_first: bool,
    /// Link targets extracted from the sentence, in encounter order.
    pub links: Vec<String>,
    tokens: OnceLock<Vec<Token>>,
}

impl Sentence {
    pub fn new(content: impl Into<String>, position: usize) -> Self {
        Self {
            content: content.into(),
            position,
            is_first: false,
            links: Vec::new(),
            tokens: OnceLock::new(),
        }
    }

    pub fn with_first(mut self, is_first: bool) -> Self {
        self.is_first = is_first;
        self
    }

    /// Appends a link target, keeping encounter order.
    pub fn push_link(&mut self, target: impl Into<String>) {
        self.links.push(target.into());
    }

    /// Character count of the content.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Tokens attached by the engine, or an empty slice when tokenization
    /// has not run for this sentence.
    pub fn tokens(&self) -> &[Token] {
        self.tokens.get().map_or(&[], Vec::as_slice)
    }

    /// Attaches tokens on first call; later calls keep the original set.
    pub fn tokens_or_init(&self, init: impl FnOnce() -> Vec<Token>) -> &[Token] {
        self.tokens.get_or_init(init)
    }
}

impl Clone for Sentence {
    fn clone(&self) -> Self {
        let tokens = OnceLock::new();
        if let Some(existing) = self.tokens.get() {
            let _ = tokens.set(existing.clone());
        }
        Self {
            content: self.content.clone(),
            position: self.position,
            is_first: self.is_first,
            links: self.links.clone(),
            tokens,
        }
    }
}

impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        // The token memoization is a cache, not part of sentence identity.
        self.content == other.content
            && self.position == other.position
            && self.is_first == other.is_first
            && self.links == other.links
    }
}

impl Eq for Sentence {}
