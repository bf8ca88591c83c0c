//! Parser trait definition.

use crate::{Block, ParseError};

/// Trait for turning source text into a flat block stream.
///
/// Implementations only recognize block structure. Inline markup stays in
/// the block text and is stripped later by the tree builder, so sentence
/// handling is identical across formats.
///
/// # Example
///
/// ```rust,ignore
/// use kousei_parser::{Block, ParseError, Parser};
///
/// struct MyParser;
///
/// impl Parser for MyParser {
///     fn name(&self) -> &str {
///         "my-parser"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["myext"]
///     }
///
///     fn parse(&self, source: &str) -> Result<Vec<Block>, ParseError> {
///         // Parse implementation
///         todo!()
///     }
/// }
/// ```
pub trait Parser: Send + Sync {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions should not include the leading dot (e.g., `["md", "markdown"]`).
    fn extensions(&self) -> &[&str];

    /// Parses the source text into blocks, in source order.
    fn parse(&self, source: &str) -> Result<Vec<Block>, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
