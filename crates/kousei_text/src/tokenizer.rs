//! Tokenizers.

use kousei_model::Token;
use unicode_segmentation::UnicodeSegmentation;

/// Maps sentence text to surface tokens.
///
/// Token offsets are character indices into the sentence content. The
/// validation engine tokenizes lazily, once per sentence, and only when a
/// registered validator asks for tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Splits on whitespace. A run of word characters (including apostrophes and
/// hyphens, so contractions hold together) forms one token; any other
/// visible character stands alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut word = String::new();
        let mut word_start = 0;
        let mut offset = 0;
        for c in text.chars() {
            if is_word_char(c) {
                if word.is_empty() {
                    word_start = offset;
                }
                word.push(c);
            } else {
                if !word.is_empty() {
                    tokens.push(Token::new(std::mem::take(&mut word), word_start));
                }
                if !c.is_whitespace() {
                    tokens.push(Token::new(c, offset));
                }
            }
            offset += 1;
        }
        if !word.is_empty() {
            tokens.push(Token::new(word, word_start));
        }
        tokens
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '\'' | '-' | '_')
}

/// UAX #29 word boundaries; suits scripts that do not separate words with
/// spaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut offset = 0;
        for segment in text.split_word_bounds() {
            if !segment.trim().is_empty() {
                tokens.push(Token::new(segment, offset));
            }
            offset += segment.chars().count();
        }
        tokens
    }
}
