//! The document arena.

use crate::section::{ListBlock, Paragraph, Section};
use crate::sentence::Sentence;

/// Stable index of a [`Section`] within its document, in source encounter
/// order. Index 0 is always the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(usize);

impl SectionId {
    /// Position of the section in encounter order (0 = root).
    pub fn index(self) -> usize {
        self.0
    }
}

/// A fully built document: an arena of sections, root first.
///
/// Ids handed out by [`Document::add_section`] stay valid for the lifetime
/// of the document; sections are never removed or reordered.
#[derive(Debug, Clone)]
pub struct Document {
    sections: Vec<Section>,
    file_name: Option<String>,
}

impl Document {
    /// Creates a document containing only the root section (level 0, line 1,
    /// no header sentences).
    pub fn new() -> Self {
        Self {
            sections: vec![Section::new(0, 1, Vec::new(), None)],
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn root(&self) -> SectionId {
        SectionId(0)
    }

    /// Opens a new section under `parent`. The new section's level is the
    /// parent's level plus one, so the level invariant cannot be violated by
    /// construction.
    pub fn add_section(
        &mut self,
        parent: SectionId,
        line: usize,
        header: Vec<Sentence>,
    ) -> SectionId {
        let level = self.sections[parent.0].level() + 1;
        let id = SectionId(self.sections.len());
        self.sections.push(Section::new(level, line, header, Some(parent)));
        self.sections[parent.0].push_child(id);
        id
    }

    pub fn append_paragraph(&mut self, section: SectionId, paragraph: Paragraph) {
        self.sections[section.0].push_paragraph(paragraph);
    }

    pub fn append_list(&mut self, section: SectionId, list: ListBlock) {
        self.sections[section.0].push_list(list);
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Sections in source encounter order, root first.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Every sentence in validation traversal order: per section, header
    /// sentences, then paragraph sentences, then list item sentences.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.sections.iter().flat_map(|section| {
            section
                .header()
                .iter()
                .chain(
                    section
                        .paragraphs()
                        .iter()
                        .flat_map(|paragraph| paragraph.sentences.iter()),
                )
                .chain(section.lists().iter().flat_map(|list| {
                    list.elements
                        .iter()
                        .flat_map(|element| element.sentences.iter())
                }))
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<SectionId> for Document {
    type Output = Section;

    fn index(&self, id: SectionId) -> &Section {
        &self.sections[id.0]
    }
}
