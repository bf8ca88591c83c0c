//! Markdown front end using markdown-rs (wooorm/markdown-rs).
//!
//! The `markdown` crate parses into mdast; this front end walks the tree and
//! emits one [`Block`] per heading, paragraph and list item. Block text is
//! sliced straight from the source, so inline markup survives for the tree
//! builder to strip with exact positions.

use markdown::mdast::Node;
use markdown::unist::Position;
use markdown::{ParseOptions, to_mdast};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Block, ParseError, Parser};

/// Quote markers at the start of continuation lines inside a blockquote.
/// Stripping them never touches a newline, so line arithmetic still holds.
static QUOTE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]{0,3}(?:> ?)+").unwrap());

/// Markdown front end.
///
/// Uses `markdown-rs` with GFM extensions enabled. Code blocks, HTML and
/// tables carry no prose and are skipped; blockquote content is hoisted into
/// the surrounding section.
pub struct MarkdownParser;

impl MarkdownParser {
    /// Creates a new Markdown parser with default options.
    pub fn new() -> Self {
        Self
    }

    /// Gets default parse options (GFM).
    fn default_options() -> ParseOptions {
        ParseOptions::gfm()
    }

    fn collect(&self, node: &Node, source: &str, quoted: bool, blocks: &mut Vec<Block>) {
        match node {
            Node::Root(root) => {
                for child in &root.children {
                    self.collect(child, source, quoted, blocks);
                }
            }

            Node::Heading(heading) => {
                let Some(position) = node.position() else {
                    return;
                };
                let (text, line) = match heading_text(&heading.children, source) {
                    Some((text, line)) => (text.to_owned(), line),
                    None => (String::new(), position.start.line),
                };
                blocks.push(Block::Heading {
                    level: heading.depth as usize,
                    text,
                    line,
                });
            }

            Node::Paragraph(_) => {
                let Some(position) = node.position() else {
                    return;
                };
                blocks.push(Block::Paragraph {
                    text: block_text(source, position, quoted),
                    line: position.start.line,
                });
            }

            Node::List(list) => {
                for child in &list.children {
                    self.collect(child, source, quoted, blocks);
                }
            }

            Node::ListItem(item) => {
                let indent = node
                    .position()
                    .map_or(0, |position| position.start.column.saturating_sub(1));
                for child in &item.children {
                    match child {
                        Node::Paragraph(_) => {
                            if let Some(position) = child.position() {
                                blocks.push(Block::ListItem {
                                    indent,
                                    text: block_text(source, position, quoted),
                                    line: position.start.line,
                                });
                            }
                        }
                        // A nested list continues after its parent entry.
                        Node::List(_) => self.collect(child, source, quoted, blocks),
                        _ => {}
                    }
                }
            }

            Node::Blockquote(quote) => {
                for child in &quote.children {
                    self.collect(child, source, true, blocks);
                }
            }

            // Code blocks, HTML, tables, rules and front matter carry no
            // prose to check.
            _ => {}
        }
    }
}

/// Raw source slice for a block, with quote markers removed when the block
/// sits inside a blockquote.
fn block_text(source: &str, position: &Position, quoted: bool) -> String {
    let raw = &source[position.start.offset..position.end.offset];
    if quoted {
        QUOTE_PREFIX.replace_all(raw, "").into_owned()
    } else {
        raw.to_owned()
    }
}

/// Text of a heading, sliced across its inline children.
fn heading_text<'s>(children: &[Node], source: &'s str) -> Option<(&'s str, usize)> {
    let first = children.first()?.position()?;
    let last = children.last()?.position()?;
    Some((
        &source[first.start.offset..last.end.offset],
        first.start.line,
    ))
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for MarkdownParser {
    fn name(&self) -> &str {
        "markdown"
    }

    fn extensions(&self) -> &[&str] {
        &["md", "markdown", "mdown", "mkdn", "mkd"]
    }

    fn parse(&self, source: &str) -> Result<Vec<Block>, ParseError> {
        let tree = to_mdast(source, &Self::default_options())
            .map_err(|e| ParseError::invalid_source(e.to_string()))?;
        let mut blocks = Vec::new();
        self.collect(&tree, source, false, &mut blocks);
        Ok(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> Vec<Block> {
        MarkdownParser::new().parse(source).unwrap()
    }

    #[test]
    fn heading_and_paragraph() {
        let blocks = parse("# Hello\n\nThis is a paragraph.");
        assert_eq!(blocks, vec![
            Block::Heading {
                level: 1,
                text: "Hello".to_owned(),
                line: 1,
            },
            Block::Paragraph {
                text: "This is a paragraph.".to_owned(),
                line: 3,
            },
        ]);
    }

    #[test]
    fn heading_depths_are_declared_levels() {
        let blocks = parse("# One\n\n### Three");
        assert_eq!(blocks[0].line(), 1);
        assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));
        assert!(matches!(blocks[1], Block::Heading { level: 3, .. }));
    }

    #[test]
    fn paragraph_text_keeps_inline_markup() {
        let blocks = parse("Some **bold** and [a](b) text.");
        assert_eq!(blocks[0].text(), "Some **bold** and [a](b) text.");
    }

    #[test]
    fn soft_broken_paragraph_is_one_block() {
        let blocks = parse("Hello there.\nBye now.");
        assert_eq!(blocks, vec![Block::Paragraph {
            text: "Hello there.\nBye now.".to_owned(),
            line: 1,
        }]);
    }

    #[test]
    fn list_items_carry_indent_columns() {
        let blocks = parse("- one\n- two\n");
        assert_eq!(blocks, vec![
            Block::ListItem {
                indent: 0,
                text: "one".to_owned(),
                line: 1,
            },
            Block::ListItem {
                indent: 0,
                text: "two".to_owned(),
                line: 2,
            },
        ]);
    }

    #[test]
    fn nested_list_items_follow_their_parent() {
        let blocks = parse("- outer\n  - inner\n- next");
        let indents: Vec<usize> = blocks
            .iter()
            .map(|block| match block {
                Block::ListItem { indent, .. } => *indent,
                other => panic!("unexpected block: {other:?}"),
            })
            .collect();
        assert_eq!(indents, vec![0, 2, 0]);
        assert_eq!(blocks[1].text(), "inner");
    }

    #[test]
    fn ordered_lists_parse_like_unordered_ones() {
        let blocks = parse("1. first\n2. second");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text(), "first");
        assert_eq!(blocks[1].line(), 2);
    }

    #[test]
    fn code_blocks_are_skipped() {
        let blocks = parse("```\nlet x = 1;\n```\n\nAfter the code.");
        assert_eq!(blocks, vec![Block::Paragraph {
            text: "After the code.".to_owned(),
            line: 5,
        }]);
    }

    #[test]
    fn html_is_skipped() {
        let blocks = parse("<div>markup</div>\n\nProse.");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text(), "Prose.");
    }

    #[test]
    fn blockquote_prose_is_hoisted() {
        let blocks = parse("> Quoted text.");
        assert_eq!(blocks, vec![Block::Paragraph {
            text: "Quoted text.".to_owned(),
            line: 1,
        }]);
    }

    #[test]
    fn quote_markers_are_stripped_from_continuation_lines() {
        let blocks = parse("> One here.\n> Two here.");
        assert_eq!(blocks[0].text(), "One here.\nTwo here.");
        assert_eq!(blocks[0].line(), 1);
    }

    #[test]
    fn setext_heading_is_level_one() {
        let blocks = parse("Title\n=====\n\nBody text.");
        assert_eq!(blocks[0], Block::Heading {
            level: 1,
            text: "Title".to_owned(),
            line: 1,
        });
    }

    #[test]
    fn empty_document_yields_no_blocks() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn extensions_match_case_insensitively() {
        let parser = MarkdownParser::new();
        assert_eq!(parser.name(), "markdown");
        assert!(parser.can_parse("md"));
        assert!(parser.can_parse("MD"));
        assert!(parser.can_parse("markdown"));
        assert!(!parser.can_parse("txt"));
    }
}
