//! # kousei_model
//!
//! Document tree types for the kousei prose linter.
//!
//! A parsed document is a rooted tree of [`Section`]s kept in an arena and
//! addressed by stable [`SectionId`] indices, so parent back-references are
//! plain data instead of shared ownership. Sections own [`Paragraph`]s and
//! [`ListBlock`]s, which own [`Sentence`]s; sentences carry normalized text,
//! the 1-based source line of their first visible character, extracted link
//! targets, and a lazily attached [`Token`] sequence.
//!
//! The tree is mutated only while a builder assembles it; afterwards it is
//! read-only and safe to share across threads.

mod document;
mod section;
mod sentence;

pub use document::{Document, SectionId};
pub use section::{ListBlock, ListElement, Paragraph, Section};
pub use sentence::{Sentence, Token};
