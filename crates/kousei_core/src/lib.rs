//! # kousei_core
//!
//! Core linter engine for kousei.
//!
//! This crate provides:
//! - The main `Linter` orchestrator
//! - Configuration loading with schema validation
//! - The validator registry and the built-in validators
//! - Symbol tables and language resources
//!
//! ## Example
//!
//! ```rust,ignore
//! use kousei_core::{Config, Linter};
//!
//! let config = Config::from_file(Path::new(".kousei.jsonc"))?;
//! let (linter, failures) = Linter::new(&config);
//!
//! let (results, errors) = linter.lint_files(&paths);
//! for result in results {
//!     println!("{}: {} issues", result.path.display(), result.error_count());
//! }
//! ```

mod config;
mod engine;
mod error;
mod expression;
mod linter;
pub mod registry;
pub mod resource;
mod result;
mod symbol;
mod validator;
pub mod validators;

pub use config::{Config, SymbolOverride, ValidatorMap, ValidatorProperties, ValidatorSetting};
pub use engine::ValidationEngine;
pub use error::{
    ErrorSink, LinterError, SetupFailure, Severity, ValidationError, ValidatorError,
};
pub use expression::{ExpressionRule, TokenPattern};
pub use linter::Linter;
pub use registry::ValidatorId;
pub use resource::{ResourceCache, ResourceSource, StyledPattern};
pub use result::LintResult;
pub use symbol::{Symbol, SymbolKind, SymbolTable};
pub use validator::{
    AnyValidator, DocumentValidator, ParagraphValidator, SectionValidator, SentenceValidator,
    Validator, ValidatorContext,
};
