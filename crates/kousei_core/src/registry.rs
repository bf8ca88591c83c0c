//! Validator registry.
//!
//! The set of validators is closed: every one is listed in [`ValidatorId`]
//! and constructed through [`create`], which runs the language check and
//! both setup phases before handing the validator to the engine.

use crate::config::ValidatorProperties;
use crate::error::ValidatorError;
use crate::validator::{AnyValidator, ValidatorContext};
use crate::validators::{
    CommaNumber, DoubleNegative, InvalidSymbol, InvalidWord, JapaneseAnchorExpression,
    JapaneseNumberExpression, ParagraphNumber, ParagraphStartWith, SectionLength, SentenceLength,
    SymbolWithSpace, UnexpandedAcronym,
};

/// Identifier for each built-in validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorId {
    SentenceLength,
    CommaNumber,
    InvalidSymbol,
    SymbolWithSpace,
    InvalidWord,
    DoubleNegative,
    JapaneseAnchorExpression,
    JapaneseNumberExpression,
    ParagraphStartWith,
    ParagraphNumber,
    SectionLength,
    UnexpandedAcronym,
}

impl ValidatorId {
    pub const ALL: [ValidatorId; 12] = [
        ValidatorId::SentenceLength,
        ValidatorId::CommaNumber,
        ValidatorId::InvalidSymbol,
        ValidatorId::SymbolWithSpace,
        ValidatorId::InvalidWord,
        ValidatorId::DoubleNegative,
        ValidatorId::JapaneseAnchorExpression,
        ValidatorId::JapaneseNumberExpression,
        ValidatorId::ParagraphStartWith,
        ValidatorId::ParagraphNumber,
        ValidatorId::SectionLength,
        ValidatorId::UnexpandedAcronym,
    ];

    /// Configuration name.
    pub fn name(self) -> &'static str {
        match self {
            ValidatorId::SentenceLength => "SentenceLength",
            ValidatorId::CommaNumber => "CommaNumber",
            ValidatorId::InvalidSymbol => "InvalidSymbol",
            ValidatorId::SymbolWithSpace => "SymbolWithSpace",
            ValidatorId::InvalidWord => "InvalidWord",
            ValidatorId::DoubleNegative => "DoubleNegative",
            ValidatorId::JapaneseAnchorExpression => "JapaneseAnchorExpression",
            ValidatorId::JapaneseNumberExpression => "JapaneseNumberExpression",
            ValidatorId::ParagraphStartWith => "ParagraphStartWith",
            ValidatorId::ParagraphNumber => "ParagraphNumber",
            ValidatorId::SectionLength => "SectionLength",
            ValidatorId::UnexpandedAcronym => "UnexpandedAcronym",
        }
    }

    pub fn from_name(name: &str) -> Option<ValidatorId> {
        Self::ALL.iter().find(|id| id.name() == name).copied()
    }

    /// One-line summary for listings.
    pub fn description(self) -> &'static str {
        match self {
            ValidatorId::SentenceLength => "Sentences longer than a character limit",
            ValidatorId::CommaNumber => "Sentences with too many commas",
            ValidatorId::InvalidSymbol => "Disallowed symbol characters",
            ValidatorId::SymbolWithSpace => "Missing spaces around symbols",
            ValidatorId::InvalidWord => "Words from a prohibited-word dictionary",
            ValidatorId::DoubleNegative => "Double negative expressions",
            ValidatorId::JapaneseAnchorExpression => "Chapter anchors in an unexpected number style",
            ValidatorId::JapaneseNumberExpression => "Counts in an unexpected number style",
            ValidatorId::ParagraphStartWith => "Paragraphs that do not open as configured",
            ValidatorId::ParagraphNumber => "Sections with too many paragraphs",
            ValidatorId::SectionLength => "Sections longer than a character limit",
            ValidatorId::UnexpandedAcronym => "Acronyms never written out",
        }
    }

    /// The node type this validator examines.
    pub fn granularity(self) -> &'static str {
        match self {
            ValidatorId::SentenceLength
            | ValidatorId::CommaNumber
            | ValidatorId::InvalidSymbol
            | ValidatorId::SymbolWithSpace
            | ValidatorId::InvalidWord
            | ValidatorId::DoubleNegative
            | ValidatorId::JapaneseAnchorExpression
            | ValidatorId::JapaneseNumberExpression => "sentence",
            ValidatorId::ParagraphStartWith => "paragraph",
            ValidatorId::ParagraphNumber | ValidatorId::SectionLength => "section",
            ValidatorId::UnexpandedAcronym => "document",
        }
    }

    fn instantiate(self) -> AnyValidator {
        match self {
            ValidatorId::SentenceLength => {
                AnyValidator::Sentence(Box::new(SentenceLength::default()))
            }
            ValidatorId::CommaNumber => AnyValidator::Sentence(Box::new(CommaNumber::default())),
            ValidatorId::InvalidSymbol => {
                AnyValidator::Sentence(Box::new(InvalidSymbol::default()))
            }
            ValidatorId::SymbolWithSpace => {
                AnyValidator::Sentence(Box::new(SymbolWithSpace::default()))
            }
            ValidatorId::InvalidWord => AnyValidator::Sentence(Box::new(InvalidWord::default())),
            ValidatorId::DoubleNegative => {
                AnyValidator::Sentence(Box::new(DoubleNegative::default()))
            }
            ValidatorId::JapaneseAnchorExpression => {
                AnyValidator::Sentence(Box::new(JapaneseAnchorExpression::default()))
            }
            ValidatorId::JapaneseNumberExpression => {
                AnyValidator::Sentence(Box::new(JapaneseNumberExpression::default()))
            }
            ValidatorId::ParagraphStartWith => {
                AnyValidator::Paragraph(Box::new(ParagraphStartWith::default()))
            }
            ValidatorId::ParagraphNumber => {
                AnyValidator::Section(Box::new(ParagraphNumber::default()))
            }
            ValidatorId::SectionLength => AnyValidator::Section(Box::new(SectionLength::default())),
            ValidatorId::UnexpandedAcronym => {
                AnyValidator::Document(Box::new(UnexpandedAcronym::default()))
            }
        }
    }
}

/// Builds and initializes a validator by configuration name.
pub fn create(
    name: &str,
    properties: &ValidatorProperties,
    context: &ValidatorContext,
) -> Result<AnyValidator, ValidatorError> {
    let id = ValidatorId::from_name(name)
        .ok_or_else(|| ValidatorError::UnsupportedValidator(name.to_owned()))?;
    let mut validator = id.instantiate();
    let base = validator.base_mut();
    if let Some(languages) = base.supported_languages()
        && !languages.contains(&context.language.as_str())
    {
        return Err(ValidatorError::unsupported_language(name, &context.language));
    }
    base.pre_init(properties, context)?;
    base.init(context)?;
    Ok(validator)
}
