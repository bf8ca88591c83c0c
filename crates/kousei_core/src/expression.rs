//! Token-sequence expression rules.
//!
//! A rule is an ordered list of matchers aligned against sentence tokens.
//! The text form puts one rule per line, matchers joined by ` + `, each
//! matcher a surface or `surface:tag`. `#` starts a comment line.

use std::ops::Range;

use kousei_model::Token;

/// One matcher within a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPattern {
    surface: String,
    tag: Option<String>,
}

impl TokenPattern {
    pub fn new(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into().to_lowercase(),
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into().to_lowercase());
        self
    }

    fn matches(&self, token: &Token) -> bool {
        if token.surface.to_lowercase() != self.surface {
            return false;
        }
        match &self.tag {
            None => true,
            Some(tag) => token
                .tag
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(tag)),
        }
    }
}

/// An ordered matcher sequence with an adjacency allowance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionRule {
    patterns: Vec<TokenPattern>,
    max_gap: usize,
}

impl ExpressionRule {
    pub fn new(patterns: Vec<TokenPattern>) -> Self {
        Self {
            patterns,
            max_gap: 0,
        }
    }

    /// Allows up to `max_gap` unmatched tokens between consecutive matchers.
    pub fn with_max_gap(mut self, max_gap: usize) -> Self {
        self.max_gap = max_gap;
        self
    }

    /// Parses one line of the rule file format. Returns `None` for blank
    /// lines, comments, and lines with no usable matcher.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let patterns: Vec<TokenPattern> = line
            .split(" + ")
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once(':') {
                Some((surface, tag)) if !tag.trim().is_empty() => {
                    TokenPattern::new(surface.trim()).with_tag(tag.trim())
                }
                _ => TokenPattern::new(part),
            })
            .collect();
        if patterns.is_empty() {
            return None;
        }
        Some(Self::new(patterns))
    }

    /// Parses a whole rule file, skipping comments and blank lines.
    pub fn parse_all(text: &str) -> Vec<Self> {
        text.lines().filter_map(Self::parse).collect()
    }

    /// Aligns the rule against `tokens` and returns the token index range of
    /// the first match.
    pub fn matches(&self, tokens: &[Token]) -> Option<Range<usize>> {
        let first = self.patterns.first()?;
        'starts: for start in 0..tokens.len() {
            if !first.matches(&tokens[start]) {
                continue;
            }
            let mut last = start;
            for pattern in &self.patterns[1..] {
                let window = last + 1..(last + 2 + self.max_gap).min(tokens.len());
                let Some(next) = window.into_iter().find(|&i| pattern.matches(&tokens[i])) else {
                    continue 'starts;
                };
                last = next;
            }
            return Some(start..last + 1);
        }
        None
    }
}
