//! Integration tests for document reconstruction
//!
//! Drives the markdown front end, inline normalization, sentence
//! segmentation and tree building together and checks the shape of the
//! documents that come out.

use kousei_model::Document;
use kousei_parser::{MarkdownParser, Parser, TreeBuilder};
use kousei_text::{SegmenterRules, SentenceSegmenter};
use pretty_assertions::assert_eq;

fn build(source: &str) -> Document {
    let blocks = MarkdownParser::new().parse(source).unwrap();
    TreeBuilder::new(SentenceSegmenter::new(SegmenterRules::english())).build(&blocks)
}

#[test]
fn heading_opens_a_section_holding_its_paragraph() {
    let document = build("# Title\nHello world. Bye now.\n");

    assert_eq!(document.section_count(), 2);
    let root = &document[document.root()];
    assert_eq!(root.level(), 0);
    assert!(root.parent().is_none());

    let section = &document[root.children()[0]];
    assert_eq!(section.level(), 1);
    assert_eq!(section.line(), 1);
    assert_eq!(section.header().len(), 1);
    assert_eq!(section.header()[0].content, "Title");

    let sentences = &section.paragraphs()[0].sentences;
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].content, "Hello world.");
    assert!(sentences[0].is_first);
    assert_eq!(sentences[0].position, 2);
    assert_eq!(sentences[1].content, " Bye now.");
    assert!(!sentences[1].is_first);
    assert_eq!(sentences[1].position, 2);
}

#[test]
fn headers_split_into_sentences_like_paragraphs() {
    let document = build("# One. Two.\n");

    let section = &document[document[document.root()].children()[0]];
    let header: Vec<&str> = section
        .header()
        .iter()
        .map(|sentence| sentence.content.as_str())
        .collect();
    assert_eq!(header, vec!["One.", " Two."]);
}

#[test]
fn setext_headings_nest_by_depth() {
    let document = build("Title\n=====\n\nBody.\n\nSub\n---\n\nMore.\n");

    assert_eq!(document.section_count(), 3);
    let levels: Vec<usize> = document.sections().map(|section| section.level()).collect();
    assert_eq!(levels, vec![0, 1, 2]);

    let title = document[document.root()].children()[0];
    let sub = document[title].children()[0];
    assert_eq!(document[sub].header()[0].content, "Sub");
    assert_eq!(document[sub].paragraphs()[0].sentences[0].content, "More.");
}

#[test]
fn link_targets_are_recorded_and_labels_kept() {
    let document = build("see [Go](http://go.dev) here.\n");

    let sentence = document.sentences().next().unwrap();
    assert_eq!(sentence.content, "see Go here.");
    assert_eq!(sentence.links, ["http://go.dev"]);
}

#[test]
fn bare_url_targets_drop_trailing_punctuation() {
    let document = build("Visit https://go.dev.\n");

    let sentence = document.sentences().next().unwrap();
    assert_eq!(sentence.content, "Visit https://go.dev.");
    assert_eq!(sentence.links, ["https://go.dev"]);
}

#[test]
fn bracketed_text_without_a_target_stays_verbatim() {
    let document = build("I bought a [pen] today.\n");

    let sentence = document.sentences().next().unwrap();
    assert_eq!(sentence.content, "I bought a [pen] today.");
    assert!(sentence.links.is_empty());
}

#[test]
fn nested_list_items_map_indentation_to_levels() {
    let document = build("- A\n    - B\n- C\n");

    let root = &document[document.root()];
    assert_eq!(root.lists().len(), 1);
    let elements = &root.lists()[0].elements;
    let levels: Vec<usize> = elements.iter().map(|element| element.level).collect();
    assert_eq!(levels, vec![1, 2, 1]);
    assert_eq!(elements[1].sentences[0].content, "B");
}

#[test]
fn empty_input_builds_a_bare_root() {
    let document = build("");

    assert_eq!(document.section_count(), 1);
    let root = &document[document.root()];
    assert!(root.header().is_empty());
    assert!(root.paragraphs().is_empty());
    assert!(root.lists().is_empty());
}

#[test]
fn code_blocks_contribute_no_sentences() {
    let document = build("```\nlet x = 1. Done?\n```\n\nReal text.\n");

    let contents: Vec<&str> = document
        .sentences()
        .map(|sentence| sentence.content.as_str())
        .collect();
    assert_eq!(contents, vec!["Real text."]);
}

#[test]
fn blockquote_text_is_hoisted_into_plain_paragraphs() {
    let document = build("> Quoted words here.\n");

    let sentence = document.sentences().next().unwrap();
    assert_eq!(sentence.content, "Quoted words here.");
}

#[test]
fn ellipsis_runs_do_not_end_sentences_early() {
    let document = build("Wait... what? Go.\n");

    let contents: Vec<&str> = document
        .sentences()
        .map(|sentence| sentence.content.as_str())
        .collect();
    assert_eq!(contents, vec!["Wait...", " what?", " Go."]);
}

#[test]
fn sentence_positions_follow_source_order() {
    let source = "# Guide\n\nFirst part. Second part.\n\nAnother paragraph here.\n\n\
                  - item one\n- item two\n\n## Detail\n\nClosing words.\n";
    let document = build(source);

    let positions: Vec<usize> = document
        .sentences()
        .map(|sentence| sentence.position)
        .collect();
    assert_eq!(positions, vec![1, 3, 3, 5, 7, 8, 10, 12]);
}
