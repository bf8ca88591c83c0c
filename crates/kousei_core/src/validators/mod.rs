//! Built-in validators.

mod comma_number;
mod double_negative;
mod invalid_symbol;
mod invalid_word;
mod japanese_expression;
mod paragraph_number;
mod paragraph_start_with;
mod section_length;
mod sentence_length;
mod symbol_with_space;
mod unexpanded_acronym;

pub use comma_number::CommaNumber;
pub use double_negative::DoubleNegative;
pub use invalid_symbol::InvalidSymbol;
pub use invalid_word::InvalidWord;
pub use japanese_expression::{JapaneseAnchorExpression, JapaneseNumberExpression};
pub use paragraph_number::ParagraphNumber;
pub use paragraph_start_with::ParagraphStartWith;
pub use section_length::SectionLength;
pub use sentence_length::SentenceLength;
pub use symbol_with_space::SymbolWithSpace;
pub use unexpanded_acronym::UnexpandedAcronym;
