//! Sections, paragraphs, and list blocks.

use crate::document::SectionId;
use crate::sentence::Sentence;

/// A run of sentences forming one paragraph, owned by its section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub sentences: Vec<Sentence>,
}

impl Paragraph {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }
}

/// One list item with its nesting level. Level 1 is the indentation of the
/// first item in the block; deeper indentation increases the level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListElement {
    pub level: usize,
    pub sentences: Vec<Sentence>,
}

impl ListElement {
    pub fn new(level: usize, sentences: Vec<Sentence>) -> Self {
        Self { level, sentences }
    }
}

/// A contiguous run of list items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBlock {
    pub elements: Vec<ListElement>,
}

impl ListBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, element: ListElement) {
        self.elements.push(element);
    }
}

/// A heading-scoped region of the document.
///
/// Sections live in the owning [`Document`](crate::Document)'s arena and
/// refer to each other by [`SectionId`]. The stored level always equals the
/// parent's level plus one; the root is level 0 with no parent.
#[derive(Debug, Clone)]
pub struct Section {
    level: usize,
    line: usize,
    header: Vec<Sentence>,
    paragraphs: Vec<Paragraph>,
    lists: Vec<ListBlock>,
    parent: Option<SectionId>,
    children: Vec<SectionId>,
}

impl Section {
    pub(crate) fn new(
        level: usize,
        line: usize,
        header: Vec<Sentence>,
        parent: Option<SectionId>,
    ) -> Self {
        Self {
            level,
            line,
            header,
            paragraphs: Vec::new(),
            lists: Vec::new(),
            parent,
            children: Vec::new(),
        }
    }

    /// Nesting depth: 0 for the root, parent level + 1 otherwise.
    pub fn level(&self) -> usize {
        self.level
    }

    /// 1-based source line of the heading (1 for the root).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Header sentences; empty for the root and for empty headings.
    pub fn header(&self) -> &[Sentence] {
        &self.header
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn lists(&self) -> &[ListBlock] {
        &self.lists
    }

    pub fn parent(&self) -> Option<SectionId> {
        self.parent
    }

    /// Child sections in source encounter order.
    pub fn children(&self) -> &[SectionId] {
        &self.children
    }

    pub(crate) fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    pub(crate) fn push_list(&mut self, list: ListBlock) {
        self.lists.push(list);
    }

    pub(crate) fn push_child(&mut self, child: SectionId) {
        self.children.push(child);
    }
}
