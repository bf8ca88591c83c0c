//! Assembles the flat block stream into a document tree.

use kousei_model::{Document, ListBlock, ListElement, Paragraph, SectionId, Sentence};
use kousei_text::{LineMap, SentenceSegmenter};

use crate::Block;
use crate::inline;

/// Builds a [`Document`] from parsed blocks.
///
/// Headings nest by their declared depth: a heading opens a child of the
/// closest open section with a shallower declared depth, so a jump from `#`
/// straight to `####` still attaches one level down. Runs of consecutive
/// list items become a single list block whose element levels derive from
/// the indent columns.
pub struct TreeBuilder {
    segmenter: SentenceSegmenter,
}

impl TreeBuilder {
    pub fn new(segmenter: SentenceSegmenter) -> Self {
        Self { segmenter }
    }

    pub fn build(&self, blocks: &[Block]) -> Document {
        let mut document = Document::new();
        let root = document.root();
        // Declared heading depths, not stored levels; the document computes
        // the stored level from the parent on insertion.
        let mut stack: Vec<(usize, SectionId)> = vec![(0, root)];
        let mut pending: Option<PendingList> = None;

        for block in blocks {
            if !matches!(block, Block::ListItem { .. }) {
                if let Some(list) = pending.take() {
                    let top = stack.last().map_or(root, |&(_, id)| id);
                    document.append_list(top, list.finish());
                }
            }
            match block {
                Block::Heading { level, text, line } => {
                    while stack.len() > 1
                        && stack.last().is_some_and(|&(depth, _)| depth >= *level)
                    {
                        stack.pop();
                    }
                    let parent = stack.last().map_or(root, |&(_, id)| id);
                    let header = self.sentences(text, *line);
                    let section = document.add_section(parent, *line, header);
                    stack.push((*level, section));
                }
                Block::Paragraph { text, line } => {
                    let sentences = self.sentences(text, *line);
                    if !sentences.is_empty() {
                        let top = stack.last().map_or(root, |&(_, id)| id);
                        document.append_paragraph(top, Paragraph::new(sentences));
                    }
                }
                Block::ListItem { indent, text, line } => {
                    pending
                        .get_or_insert_with(PendingList::new)
                        .push(*indent, self.sentences(text, *line));
                }
            }
        }
        if let Some(list) = pending.take() {
            let top = stack.last().map_or(root, |&(_, id)| id);
            document.append_list(top, list.finish());
        }
        document
    }

    /// Strips inline markup from one block, splits it into sentences and
    /// stamps each with its source line and links.
    fn sentences(&self, text: &str, start_line: usize) -> Vec<Sentence> {
        let normalized = inline::normalize(text);
        let lines = LineMap::new(text, start_line);
        self.segmenter
            .segment(&normalized.text)
            .into_iter()
            .enumerate()
            .map(|(index, range)| {
                let content = &normalized.text[range.clone()];
                // A retained leading newline advances the line instead of
                // counting itself.
                let visible = content.find(|c: char| c != '\n').unwrap_or(0);
                let line = lines.line_at(normalized.source_offset(range.start + visible));
                let mut sentence = Sentence::new(content, line).with_first(index == 0);
                for link in normalized.links_in(range) {
                    sentence.push_link(link.target.clone());
                }
                sentence
            })
            .collect()
    }
}

/// A run of consecutive list items waiting to be attached as one block.
struct PendingList {
    indents: Vec<usize>,
    block: ListBlock,
}

impl PendingList {
    fn new() -> Self {
        Self {
            indents: Vec::new(),
            block: ListBlock::new(),
        }
    }

    /// Indent columns map to nesting levels through a stack: a deeper column
    /// opens a level, a shallower one pops back to the closest match.
    fn push(&mut self, indent: usize, sentences: Vec<Sentence>) {
        while self.indents.last().is_some_and(|&top| top > indent) {
            self.indents.pop();
        }
        if self.indents.last() != Some(&indent) {
            self.indents.push(indent);
        }
        self.block
            .append(ListElement::new(self.indents.len(), sentences));
    }

    fn finish(self) -> ListBlock {
        self.block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MarkdownParser, Parser, PlainTextParser};
    use kousei_text::SegmenterRules;
    use pretty_assertions::assert_eq;

    fn builder() -> TreeBuilder {
        TreeBuilder::new(SentenceSegmenter::new(SegmenterRules::english()))
    }

    fn paragraph(text: &str, line: usize) -> Block {
        Block::Paragraph {
            text: text.to_owned(),
            line,
        }
    }

    fn heading(level: usize, text: &str, line: usize) -> Block {
        Block::Heading {
            level,
            text: text.to_owned(),
            line,
        }
    }

    fn item(indent: usize, text: &str, line: usize) -> Block {
        Block::ListItem {
            indent,
            text: text.to_owned(),
            line,
        }
    }

    #[test]
    fn no_blocks_build_a_bare_root() {
        let document = builder().build(&[]);
        assert_eq!(document.section_count(), 1);
        let root = &document[document.root()];
        assert!(root.header().is_empty());
        assert!(root.paragraphs().is_empty());
        assert_eq!(root.level(), 0);
    }

    #[test]
    fn paragraph_splits_into_flagged_sentences() {
        let document = builder().build(&[paragraph("Hello there. Bye now.", 1)]);
        let root = &document[document.root()];
        let sentences = &root.paragraphs()[0].sentences;
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].content, "Hello there.");
        assert!(sentences[0].is_first);
        assert_eq!(sentences[1].content, " Bye now.");
        assert!(!sentences[1].is_first);
        assert_eq!(sentences[1].position, 1);
    }

    #[test]
    fn soft_broken_sentences_keep_their_lines() {
        let document = builder().build(&[paragraph("Hello there.\nBye now.", 4)]);
        let sentences = &document[document.root()].paragraphs()[0].sentences;
        assert_eq!(sentences[0].position, 4);
        assert_eq!(sentences[1].content, "\nBye now.");
        assert_eq!(sentences[1].position, 5);
    }

    #[test]
    fn markup_is_stripped_before_splitting() {
        let document = builder().build(&[paragraph("**Hello** there. See [docs](https://e.com/d).", 3)]);
        let sentences = &document[document.root()].paragraphs()[0].sentences;
        assert_eq!(sentences[0].content, "Hello there.");
        assert_eq!(sentences[0].position, 3);
        assert_eq!(sentences[1].content, " See docs.");
        assert_eq!(sentences[1].links, vec!["https://e.com/d".to_owned()]);
        assert!(sentences[0].links.is_empty());
    }

    #[test]
    fn headings_nest_by_declared_depth() {
        let document = builder().build(&[
            heading(1, "One", 1),
            paragraph("In one.", 3),
            heading(2, "One one", 5),
            heading(1, "Two", 7),
        ]);
        assert_eq!(document.section_count(), 4);
        let levels: Vec<usize> = document.sections().map(|s| s.level()).collect();
        assert_eq!(levels, vec![0, 1, 2, 1]);

        let root = &document[document.root()];
        assert_eq!(root.children().len(), 2);
        let first = &document[root.children()[0]];
        assert_eq!(first.header()[0].content, "One");
        assert_eq!(first.paragraphs().len(), 1);
        assert_eq!(first.children().len(), 1);
    }

    #[test]
    fn depth_jumps_attach_one_level_down() {
        let document = builder().build(&[
            heading(1, "Top", 1),
            heading(4, "Deep", 3),
            heading(2, "Back", 5),
        ]);
        let levels: Vec<usize> = document.sections().map(|s| s.level()).collect();
        // The declared depth 4 still lands directly under depth 1.
        assert_eq!(levels, vec![0, 1, 2, 2]);
        let top = &document[document[document.root()].children()[0]];
        assert_eq!(top.children().len(), 2);
    }

    #[test]
    fn heading_header_sentence_is_first() {
        let document = builder().build(&[heading(1, "A title here", 1)]);
        let sections: Vec<_> = document.sections().collect();
        let header = &sections[1].header()[0];
        assert!(header.is_first);
        assert_eq!(header.position, 1);
    }

    #[test]
    fn consecutive_items_form_one_list() {
        let document = builder().build(&[
            item(0, "First point here.", 1),
            item(2, "Nested point here.", 2),
            item(0, "Second point here.", 3),
        ]);
        let root = &document[document.root()];
        assert_eq!(root.lists().len(), 1);
        let levels: Vec<usize> = root.lists()[0]
            .elements
            .iter()
            .map(|e| e.level)
            .collect();
        assert_eq!(levels, vec![1, 2, 1]);
        assert_eq!(root.lists()[0].elements[1].sentences[0].position, 2);
    }

    #[test]
    fn jagged_indents_pop_to_the_closest_level() {
        let document = builder().build(&[
            item(0, "a.", 1),
            item(4, "b.", 2),
            item(2, "c.", 3),
        ]);
        let levels: Vec<usize> = document[document.root()].lists()[0]
            .elements
            .iter()
            .map(|e| e.level)
            .collect();
        assert_eq!(levels, vec![1, 2, 2]);
    }

    #[test]
    fn a_paragraph_closes_the_open_list() {
        let document = builder().build(&[
            item(0, "One.", 1),
            paragraph("Between lists.", 3),
            item(0, "Two.", 5),
        ]);
        let root = &document[document.root()];
        assert_eq!(root.lists().len(), 2);
        assert_eq!(root.paragraphs().len(), 1);
    }

    #[test]
    fn whitespace_only_paragraph_is_dropped() {
        let document = builder().build(&[paragraph("   ", 1)]);
        assert!(document[document.root()].paragraphs().is_empty());
    }

    #[test]
    fn markdown_source_builds_the_expected_tree() {
        let blocks = MarkdownParser::new()
            .parse("# Guide\n\nHello there. Bye now.\n\n- One point.\n")
            .unwrap();
        let document = builder().build(&blocks);
        assert_eq!(document.section_count(), 2);
        let guide = &document[document[document.root()].children()[0]];
        assert_eq!(guide.header()[0].content, "Guide");
        assert_eq!(guide.paragraphs()[0].sentences.len(), 2);
        assert_eq!(guide.paragraphs()[0].sentences[1].position, 3);
        assert_eq!(guide.lists()[0].elements[0].sentences[0].content, "One point.");
        assert_eq!(guide.lists()[0].elements[0].sentences[0].position, 5);
    }

    #[test]
    fn plain_text_lands_in_the_root_section() {
        let blocks = PlainTextParser::new()
            .parse("Hello there. Bye now.\nThis is a second line.")
            .unwrap();
        let document = builder().build(&blocks);
        assert_eq!(document.section_count(), 1);
        let root = &document[document.root()];
        assert_eq!(root.paragraphs().len(), 1);
        let positions: Vec<usize> = root.paragraphs()[0]
            .sentences
            .iter()
            .map(|s| s.position)
            .collect();
        assert_eq!(positions, vec![1, 1, 2]);
    }
}
