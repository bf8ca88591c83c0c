//! Language symbol tables.
//!
//! A [`SymbolTable`] records, per punctuation role, the canonical character
//! for the active language, the characters that are disallowed stand-ins for
//! it, and whether the character requires surrounding whitespace. Character
//! validators read the table, and the sentence segmenter derives its stop
//! characters and balanced pairs from it, so a configuration override in one
//! place changes both.

use serde::{Deserialize, Serialize};

use kousei_text::SegmenterRules;

/// Punctuation roles a symbol table covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolKind {
    FullStop,
    Comma,
    ExclamationMark,
    QuestionMark,
    Colon,
    Semicolon,
    LeftParenthesis,
    RightParenthesis,
    LeftQuotationMark,
    RightQuotationMark,
    Asterisk,
    Slash,
    Hyphen,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 13] = [
        SymbolKind::FullStop,
        SymbolKind::Comma,
        SymbolKind::ExclamationMark,
        SymbolKind::QuestionMark,
        SymbolKind::Colon,
        SymbolKind::Semicolon,
        SymbolKind::LeftParenthesis,
        SymbolKind::RightParenthesis,
        SymbolKind::LeftQuotationMark,
        SymbolKind::RightQuotationMark,
        SymbolKind::Asterisk,
        SymbolKind::Slash,
        SymbolKind::Hyphen,
    ];

    /// Configuration name, `SCREAMING_SNAKE_CASE`.
    pub fn name(self) -> &'static str {
        match self {
            SymbolKind::FullStop => "FULL_STOP",
            SymbolKind::Comma => "COMMA",
            SymbolKind::ExclamationMark => "EXCLAMATION_MARK",
            SymbolKind::QuestionMark => "QUESTION_MARK",
            SymbolKind::Colon => "COLON",
            SymbolKind::Semicolon => "SEMICOLON",
            SymbolKind::LeftParenthesis => "LEFT_PARENTHESIS",
            SymbolKind::RightParenthesis => "RIGHT_PARENTHESIS",
            SymbolKind::LeftQuotationMark => "LEFT_QUOTATION_MARK",
            SymbolKind::RightQuotationMark => "RIGHT_QUOTATION_MARK",
            SymbolKind::Asterisk => "ASTERISK",
            SymbolKind::Slash => "SLASH",
            SymbolKind::Hyphen => "HYPHEN",
        }
    }
}

/// One entry of a symbol table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub kind: SymbolKind,
    /// Canonical character for the active language.
    pub value: char,
    /// Characters that must not appear in place of the canonical one.
    pub invalid_chars: Vec<char>,
    /// Whether the character requires whitespace before it.
    pub before_space: bool,
    /// Whether the character requires whitespace after it.
    pub after_space: bool,
}

impl Symbol {
    pub fn new(kind: SymbolKind, value: char) -> Self {
        Self {
            kind,
            value,
            invalid_chars: Vec::new(),
            before_space: false,
            after_space: false,
        }
    }

    pub fn with_invalid_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.invalid_chars = chars.into_iter().collect();
        self
    }

    pub fn with_spaces(mut self, before: bool, after: bool) -> Self {
        self.before_space = before;
        self.after_space = after;
        self
    }

    /// Whether either spacing flag is set.
    pub fn requires_space(&self) -> bool {
        self.before_space || self.after_space
    }
}

/// Per-language symbol table, every [`SymbolKind`] present exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// ASCII punctuation, wide-form counterparts disallowed.
    pub fn english() -> Self {
        Self {
            symbols: vec![
                Symbol::new(SymbolKind::FullStop, '.').with_invalid_chars(['。', '．']),
                Symbol::new(SymbolKind::Comma, ',').with_invalid_chars(['、', '，']),
                Symbol::new(SymbolKind::ExclamationMark, '!').with_invalid_chars(['！']),
                Symbol::new(SymbolKind::QuestionMark, '?').with_invalid_chars(['？']),
                Symbol::new(SymbolKind::Colon, ':').with_invalid_chars(['：']),
                Symbol::new(SymbolKind::Semicolon, ';').with_invalid_chars(['；']),
                Symbol::new(SymbolKind::LeftParenthesis, '(').with_invalid_chars(['（']),
                Symbol::new(SymbolKind::RightParenthesis, ')').with_invalid_chars(['）']),
                Symbol::new(SymbolKind::LeftQuotationMark, '"'),
                Symbol::new(SymbolKind::RightQuotationMark, '"'),
                Symbol::new(SymbolKind::Asterisk, '*'),
                Symbol::new(SymbolKind::Slash, '/'),
                Symbol::new(SymbolKind::Hyphen, '-'),
            ],
        }
    }

    /// Wide-form punctuation, the customary ASCII stand-ins disallowed.
    pub fn japanese() -> Self {
        Self {
            symbols: vec![
                Symbol::new(SymbolKind::FullStop, '。').with_invalid_chars(['．']),
                Symbol::new(SymbolKind::Comma, '、').with_invalid_chars(['，']),
                Symbol::new(SymbolKind::ExclamationMark, '！'),
                Symbol::new(SymbolKind::QuestionMark, '？'),
                Symbol::new(SymbolKind::Colon, '：'),
                Symbol::new(SymbolKind::Semicolon, '；'),
                Symbol::new(SymbolKind::LeftParenthesis, '（'),
                Symbol::new(SymbolKind::RightParenthesis, '）'),
                Symbol::new(SymbolKind::LeftQuotationMark, '「'),
                Symbol::new(SymbolKind::RightQuotationMark, '」'),
                Symbol::new(SymbolKind::Asterisk, '*'),
                Symbol::new(SymbolKind::Slash, '/'),
                Symbol::new(SymbolKind::Hyphen, '-'),
            ],
        }
    }

    /// Default table for a language code, falling back to English.
    pub fn for_language(language: &str) -> Self {
        match language {
            "ja" => Self::japanese(),
            _ => Self::english(),
        }
    }

    pub fn get(&self, kind: SymbolKind) -> Option<&Symbol> {
        self.symbols.iter().find(|symbol| symbol.kind == kind)
    }

    /// All symbols in a fixed scan order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Mutates one entry in place. Every kind exists in the default tables,
    /// so overrides always find their target.
    pub fn update(&mut self, kind: SymbolKind, f: impl FnOnce(&mut Symbol)) {
        if let Some(symbol) = self.symbols.iter_mut().find(|symbol| symbol.kind == kind) {
            f(symbol);
        }
    }

    /// Derives sentence boundary rules from the table.
    ///
    /// ASCII `.` `!` `?` always act as soft stops. The configured stop
    /// values join them when ASCII, otherwise they become hard stops.
    pub fn segmenter_rules(&self) -> SegmenterRules {
        let mut hard_stops = Vec::new();
        let mut soft_stops = vec!['.', '!', '?'];
        for kind in [
            SymbolKind::FullStop,
            SymbolKind::ExclamationMark,
            SymbolKind::QuestionMark,
        ] {
            if let Some(symbol) = self.get(kind) {
                let stops = if symbol.value.is_ascii() {
                    &mut soft_stops
                } else {
                    &mut hard_stops
                };
                if !stops.contains(&symbol.value) {
                    stops.push(symbol.value);
                }
            }
        }

        let mut pairs = Vec::new();
        for (open, close) in [
            (SymbolKind::LeftParenthesis, SymbolKind::RightParenthesis),
            (SymbolKind::LeftQuotationMark, SymbolKind::RightQuotationMark),
        ] {
            if let (Some(left), Some(right)) = (self.get(open), self.get(close)) {
                pairs.push((left.value, right.value));
            }
        }

        SegmenterRules::new(hard_stops, soft_stops, pairs)
    }
}
