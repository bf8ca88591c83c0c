//! Byte offset to source line resolution.

/// Resolves byte offsets within a source block to 1-based line numbers.
///
/// The map is built over the raw block text before any rewriting; callers
/// that transform the text keep their own output-to-input byte map and
/// compose it with [`LineMap::line_at`].
#[derive(Debug, Clone)]
pub struct LineMap {
    start_line: usize,
    newlines: Vec<usize>,
}

impl LineMap {
    /// Indexes the newline offsets of `raw`, which starts on `start_line`
    /// (1-based) in the original source.
    pub fn new(raw: &str, start_line: usize) -> Self {
        let newlines = raw
            .bytes()
            .enumerate()
            .filter_map(|(idx, byte)| (byte == b'\n').then_some(idx))
            .collect();
        Self {
            start_line,
            newlines,
        }
    }

    /// Line containing the byte at `offset`. A newline byte belongs to the
    /// line it terminates.
    pub fn line_at(&self, offset: usize) -> usize {
        self.start_line + self.newlines.partition_point(|&newline| newline < offset)
    }
}
