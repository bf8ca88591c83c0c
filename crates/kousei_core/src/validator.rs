//! Validator contract.
//!
//! Validators are configured once and then run read-only: setup happens in
//! [`Validator::pre_init`] and [`Validator::init`], after which validation
//! takes `&self` so one instance can serve parallel document checks. Each
//! validator targets exactly one granularity by implementing one of the
//! granularity traits; [`AnyValidator`] is how the engine stores them.

use std::path::{Path, PathBuf};

use kousei_model::{Document, Paragraph, Section, Sentence};

use crate::config::ValidatorProperties;
use crate::error::{ErrorSink, ValidatorError};
use crate::symbol::SymbolTable;

/// Shared setup context: the active language and its symbol table.
#[derive(Debug, Clone)]
pub struct ValidatorContext {
    pub language: String,
    pub symbols: SymbolTable,
    /// Directory relative dictionary paths resolve against, usually the
    /// configuration file's directory.
    pub base_dir: Option<PathBuf>,
}

impl ValidatorContext {
    pub fn new(language: impl Into<String>, symbols: SymbolTable) -> Self {
        Self {
            language: language.into(),
            symbols,
            base_dir: None,
        }
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Resolves a possibly relative path against the base directory.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match &self.base_dir {
            Some(base) => base.join(path),
            None => path.to_path_buf(),
        }
    }
}

/// Behavior common to every validator.
pub trait Validator: Send + Sync {
    /// Registry name, stamped on every reported error.
    fn name(&self) -> &'static str;

    /// Languages this validator supports. `None` means any language.
    fn supported_languages(&self) -> Option<&'static [&'static str]> {
        None
    }

    /// Whether sentences must have tokens materialized before validation.
    fn needs_tokens(&self) -> bool {
        false
    }

    /// Applies configuration properties. Runs before [`Validator::init`].
    fn pre_init(
        &mut self,
        properties: &ValidatorProperties,
        context: &ValidatorContext,
    ) -> Result<(), ValidatorError> {
        let _ = (properties, context);
        Ok(())
    }

    /// Loads language-scoped resources.
    fn init(&mut self, context: &ValidatorContext) -> Result<(), ValidatorError> {
        let _ = context;
        Ok(())
    }
}

/// Checks one sentence at a time.
pub trait SentenceValidator: Validator {
    fn validate(&self, sentence: &Sentence, sink: &mut ErrorSink<'_>);
}

/// Checks whole paragraphs.
pub trait ParagraphValidator: Validator {
    fn validate(&self, paragraph: &Paragraph, sink: &mut ErrorSink<'_>);
}

/// Checks whole sections.
pub trait SectionValidator: Validator {
    fn validate(&self, section: &Section, sink: &mut ErrorSink<'_>);
}

/// Checks the document as a whole.
pub trait DocumentValidator: Validator {
    fn validate(&self, document: &Document, sink: &mut ErrorSink<'_>);
}

/// A configured validator of any granularity.
pub enum AnyValidator {
    Sentence(Box<dyn SentenceValidator>),
    Paragraph(Box<dyn ParagraphValidator>),
    Section(Box<dyn SectionValidator>),
    Document(Box<dyn DocumentValidator>),
}

impl std::fmt::Debug for AnyValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let granularity = match self {
            AnyValidator::Sentence(_) => "Sentence",
            AnyValidator::Paragraph(_) => "Paragraph",
            AnyValidator::Section(_) => "Section",
            AnyValidator::Document(_) => "Document",
        };
        write!(f, "AnyValidator::{granularity}({})", self.base().name())
    }
}

impl AnyValidator {
    pub fn base(&self) -> &dyn Validator {
        match self {
            AnyValidator::Sentence(v) => v.as_ref(),
            AnyValidator::Paragraph(v) => v.as_ref(),
            AnyValidator::Section(v) => v.as_ref(),
            AnyValidator::Document(v) => v.as_ref(),
        }
    }

    pub fn base_mut(&mut self) -> &mut dyn Validator {
        match self {
            AnyValidator::Sentence(v) => v.as_mut(),
            AnyValidator::Paragraph(v) => v.as_mut(),
            AnyValidator::Section(v) => v.as_mut(),
            AnyValidator::Document(v) => v.as_mut(),
        }
    }
}
