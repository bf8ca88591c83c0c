//! Sentence boundary detection.

use std::ops::Range;

use kousei_model::Sentence;

use crate::line_map::LineMap;

/// Boundary rules for one language.
///
/// Soft stops end a sentence only when followed by whitespace or end of
/// input, so word-internal periods (`ver.1.0`, `example.com`) do not split.
/// Hard stops end a sentence wherever their run ends. Runs of stop marks
/// collapse into a single boundary after the last mark, and stops inside an
/// unbalanced quote or bracket pair are ignored.
#[derive(Debug, Clone)]
pub struct SegmenterRules {
    hard_stops: Vec<char>,
    soft_stops: Vec<char>,
    pairs: Vec<(char, char)>,
}

impl SegmenterRules {
    pub fn new(hard_stops: Vec<char>, soft_stops: Vec<char>, pairs: Vec<(char, char)>) -> Self {
        Self {
            hard_stops,
            soft_stops,
            pairs,
        }
    }

    /// ASCII stops, with parentheses and plain double quotes balanced.
    pub fn english() -> Self {
        Self::new(
            Vec::new(),
            vec!['.', '!', '?'],
            vec![('(', ')'), ('"', '"')],
        )
    }

    /// Wide-form stops end sentences unconditionally; ASCII stops stay soft.
    pub fn japanese() -> Self {
        Self::new(
            vec!['。', '！', '？'],
            vec!['.', '!', '?'],
            vec![('「', '」'), ('（', '）')],
        )
    }

    fn is_stop(&self, c: char) -> bool {
        self.hard_stops.contains(&c) || self.soft_stops.contains(&c)
    }

    fn is_hard(&self, c: char) -> bool {
        self.hard_stops.contains(&c)
    }
}

/// Tracks open quote/bracket pairs during a scan. Same-character pairs
/// (plain double quotes) toggle; distinct pairs count nesting depth, with
/// stray closers clamped at zero.
struct PairState<'a> {
    pairs: &'a [(char, char)],
    depths: Vec<usize>,
    toggles: Vec<bool>,
}

impl<'a> PairState<'a> {
    fn new(pairs: &'a [(char, char)]) -> Self {
        Self {
            pairs,
            depths: vec![0; pairs.len()],
            toggles: vec![false; pairs.len()],
        }
    }

    fn observe(&mut self, c: char) {
        for (i, &(open, close)) in self.pairs.iter().enumerate() {
            if open == close {
                if c == open {
                    self.toggles[i] = !self.toggles[i];
                }
            } else if c == open {
                self.depths[i] += 1;
            } else if c == close {
                self.depths[i] = self.depths[i].saturating_sub(1);
            }
        }
    }

    fn balanced(&self) -> bool {
        self.depths.iter().all(|&depth| depth == 0) && self.toggles.iter().all(|&open| !open)
    }
}

/// Splits markup-free text into sentences.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    rules: SegmenterRules,
}

impl SentenceSegmenter {
    pub fn new(rules: SegmenterRules) -> Self {
        Self { rules }
    }

    /// Byte ranges of the sentences within `text`, in order.
    ///
    /// Each range includes its terminal marks; a single `\n` is never a
    /// boundary and stays inside whichever sentence covers it. Stretches that
    /// are whitespace only (a trailing remainder after the last boundary)
    /// produce no range, so empty blocks yield zero sentences.
    pub fn segment(&self, text: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut start = 0;
        let mut pairs = PairState::new(&self.rules.pairs);
        let mut chars = text.char_indices().peekable();

        while let Some((idx, c)) = chars.next() {
            if !self.rules.is_stop(c) {
                pairs.observe(c);
                continue;
            }
            if !pairs.balanced() {
                continue;
            }
            let next = chars.peek().map(|&(_, next)| next);
            // A run of stop marks (ellipsis, "!?") collapses into one
            // boundary after the last mark.
            if next.is_some_and(|next| self.rules.is_stop(next)) {
                continue;
            }
            if !self.rules.is_hard(c) && next.is_some_and(|next| !next.is_whitespace()) {
                continue;
            }

            let end = idx + c.len_utf8();
            if !text[start..end].trim().is_empty() {
                ranges.push(start..end);
            }
            start = end;
        }

        if start < text.len() && !text[start..].trim().is_empty() {
            ranges.push(start..text.len());
        }

        ranges
    }

    /// Segments a plain block starting on `start_line` into model sentences,
    /// stamping each with its source line and the first-sentence flag.
    ///
    /// The stamped line is that of the sentence's first visible character;
    /// a retained leading `\n` advances the line instead of counting itself.
    pub fn sentences(&self, text: &str, start_line: usize) -> Vec<Sentence> {
        let map = LineMap::new(text, start_line);
        self.segment(text)
            .into_iter()
            .enumerate()
            .map(|(index, range)| {
                let content = &text[range.clone()];
                let visible = content.find(|c: char| c != '\n').unwrap_or(0);
                let line = map.line_at(range.start + visible);
                Sentence::new(content, line).with_first(index == 0)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn english(text: &str) -> Vec<String> {
        SentenceSegmenter::new(SegmenterRules::english())
            .segment(text)
            .into_iter()
            .map(|range| text[range].to_string())
            .collect()
    }

    fn japanese(text: &str) -> Vec<String> {
        SentenceSegmenter::new(SegmenterRules::japanese())
            .segment(text)
            .into_iter()
            .map(|range| text[range].to_string())
            .collect()
    }

    #[test]
    fn splits_on_period_before_space() {
        assert_eq!(english("Hello world. Bye now."), vec![
            "Hello world.",
            " Bye now."
        ]);
    }

    #[test]
    fn later_sentences_keep_leading_whitespace() {
        let sentences = english("First. Second.");
        assert_eq!(sentences[1], " Second.");
    }

    #[rstest]
    #[case("This is ver.1.0. Please visit example.com.", vec!["This is ver.1.0.", " Please visit example.com."])]
    #[case("e.g. example vs. sample", vec!["e.g.", " example vs.", " sample"])]
    #[case("Hello World", vec!["Hello World"])]
    #[case("Is Tokyu a good railway company...?", vec!["Is Tokyu a good railway company...?"])]
    #[case("...", vec!["..."])]
    #[case("Wait... what? Go.", vec!["Wait...", " what?", " Go."])]
    fn english_boundaries(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(english(text), expected);
    }

    #[test]
    fn empty_and_whitespace_blocks_have_no_sentences() {
        assert!(english("").is_empty());
        assert!(english("   \n  ").is_empty());
    }

    #[test]
    fn trailing_text_without_a_stop_is_a_sentence() {
        assert_eq!(english("First. unfinished thought"), vec![
            "First.",
            " unfinished thought"
        ]);
    }

    #[test]
    fn single_newline_is_not_a_boundary() {
        assert_eq!(english("This is a pen.\nThat is an orange."), vec![
            "This is a pen.",
            "\nThat is an orange."
        ]);
    }

    #[test]
    fn stops_inside_balanced_quotes_are_ignored() {
        assert_eq!(english("He said \"Stop. Go.\" twice. Done."), vec![
            "He said \"Stop. Go.\" twice.",
            " Done."
        ]);
    }

    #[test]
    fn stops_inside_parentheses_are_ignored() {
        assert_eq!(english("Figure one (see p. 4) is big. Next."), vec![
            "Figure one (see p. 4) is big.",
            " Next."
        ]);
    }

    #[test]
    fn unmatched_quote_defers_to_the_trailing_sentence() {
        assert_eq!(english("It said \"stop. go"), vec!["It said \"stop. go"]);
    }

    #[test]
    fn wide_stops_split_without_following_whitespace() {
        assert_eq!(japanese("こんにちは。世界。"), vec![
            "こんにちは。",
            "世界。"
        ]);
    }

    #[test]
    fn runs_of_wide_stops_collapse_into_one_boundary() {
        assert_eq!(japanese("だめ。。次へ。"), vec!["だめ。。", "次へ。"]);
    }

    #[test]
    fn ascii_stops_stay_soft_in_japanese() {
        assert_eq!(japanese("すごい！！本当に！？"), vec!["すごい！！本当に！？"]);
        assert_eq!(japanese("すごい！！ 本当に！？"), vec![
            "すごい！！",
            " 本当に！？"
        ]);
    }

    #[test]
    fn kagi_brackets_suppress_stops() {
        assert_eq!(japanese("彼は「だめ。」と言った。次。"), vec![
            "彼は「だめ。」と言った。",
            "次。"
        ]);
    }

    #[test]
    fn sentences_stamp_lines_and_first_flag() {
        let segmenter = SentenceSegmenter::new(SegmenterRules::english());
        let sentences = segmenter.sentences("Hello world. Bye now.", 2);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].content, "Hello world.");
        assert_eq!(sentences[0].position, 2);
        assert!(sentences[0].is_first);
        assert_eq!(sentences[1].content, " Bye now.");
        assert_eq!(sentences[1].position, 2);
        assert!(!sentences[1].is_first);
    }

    #[test]
    fn sentence_after_a_retained_newline_is_on_the_next_line() {
        let segmenter = SentenceSegmenter::new(SegmenterRules::english());
        let sentences = segmenter.sentences("One.\nTwo.\nThree.", 5);
        let positions: Vec<usize> = sentences.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![5, 6, 7]);
        assert_eq!(sentences[1].content, "\nTwo.");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resegmenting_the_concatenation_is_stable(
                text in "[a-z \\.!\\?。()\"\n]{0,60}"
            ) {
                let segmenter = SentenceSegmenter::new(SegmenterRules::english());
                let first: Vec<String> = segmenter
                    .segment(&text)
                    .into_iter()
                    .map(|range| text[range].to_string())
                    .collect();
                let joined: String = first.concat();
                let second: Vec<String> = segmenter
                    .segment(&joined)
                    .into_iter()
                    .map(|range| joined[range].to_string())
                    .collect();
                prop_assert_eq!(first, second);
            }

            #[test]
            fn positions_never_decrease(text in "[a-z \\.!\\?\n]{0,60}") {
                let segmenter = SentenceSegmenter::new(SegmenterRules::english());
                let sentences = segmenter.sentences(&text, 1);
                let positions: Vec<usize> =
                    sentences.iter().map(|s| s.position).collect();
                let mut sorted = positions.clone();
                sorted.sort_unstable();
                prop_assert_eq!(positions, sorted);
            }
        }
    }
}
