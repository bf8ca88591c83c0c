//! Plain text front end.
//!
//! Plain text has no heading or list syntax. Runs of non-blank lines become
//! paragraphs; everything lands in the document's root section.

use crate::{Block, ParseError, Parser};

/// Plain text front end.
pub struct PlainTextParser;

impl PlainTextParser {
    /// Creates a new plain text parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for PlainTextParser {
    fn name(&self) -> &str {
        "text"
    }

    fn extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn parse(&self, source: &str) -> Result<Vec<Block>, ParseError> {
        let mut blocks = Vec::new();
        let mut lines: Vec<&str> = Vec::new();
        let mut start_line = 0;

        let mut flush = |lines: &mut Vec<&str>, start_line: usize, blocks: &mut Vec<Block>| {
            if !lines.is_empty() {
                blocks.push(Block::Paragraph {
                    text: lines.join("\n"),
                    line: start_line,
                });
                lines.clear();
            }
        };

        for (index, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                flush(&mut lines, start_line, &mut blocks);
            } else {
                if lines.is_empty() {
                    start_line = index + 1;
                }
                lines.push(line);
            }
        }
        flush(&mut lines, start_line, &mut blocks);

        Ok(blocks)
    }
}
