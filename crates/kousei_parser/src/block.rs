//! Flat block stream shared by every markup front end.

/// One block-level element, in source order.
///
/// `text` is the raw source slice with inline markup intact; stripping is
/// deferred to the tree builder so all front ends share one normalizer.
/// `line` is the 1-based source line the block starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A section heading with its declared depth.
    Heading {
        level: usize,
        text: String,
        line: usize,
    },
    /// A prose paragraph, possibly spanning several lines.
    Paragraph { text: String, line: usize },
    /// One list entry. `indent` is the 0-based column of the marker; the
    /// tree builder turns runs of items into nested list blocks.
    ListItem {
        indent: usize,
        text: String,
        line: usize,
    },
}

impl Block {
    /// The source line this block starts on.
    pub fn line(&self) -> usize {
        match self {
            Block::Heading { line, .. }
            | Block::Paragraph { line, .. }
            | Block::ListItem { line, .. } => *line,
        }
    }

    /// The raw text of the block, markup included.
    pub fn text(&self) -> &str {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph { text, .. }
            | Block::ListItem { text, .. } => text,
        }
    }
}
