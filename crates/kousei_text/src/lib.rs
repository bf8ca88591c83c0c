//! # kousei_text
//!
//! Text analysis components for kousei: source line mapping, sentence
//! segmentation with language-configurable boundary rules, and tokenizers.
//!
//! The segmenter works on markup-free text and reports byte ranges, so a
//! caller that rewrote the text first (stripping inline markup) can map every
//! sentence back to its original source line through [`LineMap`] and its own
//! rewrite map.

mod line_map;
mod segmenter;
mod tokenizer;

pub use line_map::LineMap;
pub use segmenter::{SegmenterRules, SentenceSegmenter};
pub use tokenizer::{Tokenizer, UnicodeTokenizer, WhitespaceTokenizer};
