//! Inline markup stripping.
//!
//! Block text reaches the tree builder with markup intact. [`normalize`]
//! removes the inline syntax and records, for every byte of the cleaned
//! output, the source byte it came from, so sentence positions and link
//! anchors keep pointing at the original text.
//!
//! Every pass replaces a matched span with a substring of itself (the label
//! of a link, the body of an emphasis pair), which keeps the byte map
//! strictly increasing and lets passes compose.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());
static STRONG_ASTERISK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static STRONG_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__([^_]+)__").unwrap());
static EMPHASIS_ASTERISK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static EMPHASIS_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_([^_]+)_").unwrap());
static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static BARE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

/// Punctuation that ends a sentence rather than a bare URL.
const URL_TRAILING: &[char] = &['.', ',', ';', ':', '!', '?', ')', '"', '\''];

/// A link target, anchored at the byte where its visible text begins in the
/// normalized output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub position: usize,
    pub target: String,
}

/// The markup-free form of one block of text.
#[derive(Debug, Clone)]
pub struct Normalized {
    /// Cleaned text with markup syntax removed.
    pub text: String,
    /// Link targets found in the block, ordered by position.
    pub links: Vec<Link>,
    map: Vec<usize>,
    source_len: usize,
}

impl Normalized {
    /// Byte offset in the original block text corresponding to `offset` in
    /// the normalized text.
    pub fn source_offset(&self, offset: usize) -> usize {
        self.map.get(offset).copied().unwrap_or(self.source_len)
    }

    /// Links whose anchor falls inside the given normalized byte range.
    pub fn links_in(&self, range: Range<usize>) -> impl Iterator<Item = &Link> {
        self.links
            .iter()
            .filter(move |link| range.contains(&link.position))
    }

    /// Strips `[label](url)` spans, keeping the label and recording the URL.
    ///
    /// A quoted title after the URL is dropped; a bracket pair without a
    /// following paren group (`[pen]`) is left alone.
    fn strip_links(&mut self) {
        let mut out = String::with_capacity(self.text.len());
        let mut out_map = Vec::with_capacity(self.map.len());
        let mut links = Vec::new();
        let mut cursor = 0;
        for caps in LINK.captures_iter(&self.text) {
            let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push_str(&self.text[cursor..whole.start()]);
            out_map.extend_from_slice(&self.map[cursor..whole.start()]);
            let target = caps
                .get(2)
                .map_or("", |m| m.as_str())
                .split_whitespace()
                .next()
                .unwrap_or("");
            if !target.is_empty() {
                links.push(Link {
                    position: out.len(),
                    target: target.to_owned(),
                });
            }
            out.push_str(label.as_str());
            out_map.extend_from_slice(&self.map[label.range()]);
            cursor = whole.end();
        }
        if cursor == 0 {
            return;
        }
        out.push_str(&self.text[cursor..]);
        out_map.extend_from_slice(&self.map[cursor..]);
        self.text = out;
        self.map = out_map;
        self.links = links;
    }

    /// Strips one kind of paired markup, keeping the first capture group.
    ///
    /// With `word_guard` set, a match directly after an alphanumeric byte is
    /// skipped so underscores inside identifiers survive.
    fn strip(&mut self, pattern: &Regex, word_guard: bool) {
        let mut out = String::with_capacity(self.text.len());
        let mut out_map = Vec::with_capacity(self.map.len());
        let mut cursor = 0;
        for caps in pattern.captures_iter(&self.text) {
            let (Some(whole), Some(kept)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if word_guard && follows_word(&self.text, whole.start()) {
                continue;
            }
            out.push_str(&self.text[cursor..whole.start()]);
            out_map.extend_from_slice(&self.map[cursor..whole.start()]);
            out.push_str(kept.as_str());
            out_map.extend_from_slice(&self.map[kept.range()]);
            cursor = whole.end();
        }
        if cursor == 0 {
            return;
        }
        out.push_str(&self.text[cursor..]);
        out_map.extend_from_slice(&self.map[cursor..]);
        // Earlier passes recorded link anchors against the text this pass
        // just rewrote; re-locate them through the source offsets.
        for link in &mut self.links {
            let origin = self.map.get(link.position).copied().unwrap_or(self.source_len);
            link.position = out_map.partition_point(|&source| source < origin);
        }
        self.text = out;
        self.map = out_map;
    }

    /// Records visible `http(s)://` runs as links without touching the text.
    ///
    /// Punctuation that closes the surrounding sentence is not part of the
    /// target.
    fn record_bare_urls(&mut self) {
        let found: Vec<Link> = BARE_URL
            .find_iter(&self.text)
            .map(|m| Link {
                position: m.start(),
                target: m.as_str().trim_end_matches(URL_TRAILING).to_owned(),
            })
            .collect();
        self.links.extend(found);
    }
}

fn follows_word(text: &str, at: usize) -> bool {
    text[..at]
        .chars()
        .next_back()
        .is_some_and(char::is_alphanumeric)
}

/// Strips inline markup from one block of text.
pub fn normalize(text: &str) -> Normalized {
    let mut normalized = Normalized {
        text: text.to_owned(),
        links: Vec::new(),
        map: (0..text.len()).collect(),
        source_len: text.len(),
    };
    normalized.strip_links();
    normalized.strip(&STRONG_ASTERISK, false);
    normalized.strip(&STRONG_UNDERSCORE, true);
    normalized.strip(&EMPHASIS_ASTERISK, false);
    normalized.strip(&EMPHASIS_UNDERSCORE, true);
    normalized.strip(&CODE_SPAN, false);
    normalized.record_bare_urls();
    normalized.links.sort_by_key(|link| link.position);
    normalized
}
