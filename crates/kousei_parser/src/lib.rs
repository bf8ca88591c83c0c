//! # kousei_parser
//!
//! Markup front ends for kousei.
//!
//! This crate provides:
//! - A `Parser` trait for implementing format front ends
//! - Built-in Markdown front end using `markdown-rs`
//! - Built-in plain text front end
//! - The `TreeBuilder` that assembles parsed blocks into a document tree
//!
//! ## Architecture
//!
//! Front ends only recognize block structure (headings, paragraphs, list
//! items) and hand back raw source slices with inline markup intact. The
//! tree builder then strips inline markup, splits sentences, and nests
//! sections, so every format shares one normalization path and diagnostics
//! always point at the original source.
//!
//! ## Example
//!
//! ```rust,ignore
//! use kousei_parser::{MarkdownParser, Parser, TreeBuilder};
//! use kousei_text::{SegmenterRules, SentenceSegmenter};
//!
//! let parser = MarkdownParser::new();
//! let blocks = parser.parse("# Hello\n\nThis is a paragraph.").unwrap();
//!
//! let builder = TreeBuilder::new(SentenceSegmenter::new(SegmenterRules::english()));
//! let document = builder.build(&blocks);
//! ```

mod block;
mod builder;
mod error;
pub mod inline;
mod markdown;
mod plaintext;
mod traits;

pub use block::Block;
pub use builder::TreeBuilder;
pub use error::ParseError;
pub use markdown::MarkdownParser;
pub use plaintext::PlainTextParser;
pub use traits::Parser;
