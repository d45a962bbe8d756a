//! Scored text spans and whitespace chunking

use std::fmt;

/// A scored span of text within one input line
///
/// Offsets are half-open *character* offsets into the line the token was
/// produced from, so `end - begin == length == text.chars().count()`.
/// Tokens are created fresh for every candidate and every selected piece
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Surface text of the span
    pub text: String,
    /// Character offset of the first character
    pub begin: usize,
    /// Character offset one past the last character
    pub end: usize,
    /// Dictionary score, or the unknown-score default
    pub score: f64,
    /// Span length in characters
    pub length: usize,
}

impl Token {
    /// Create a token at `begin`, deriving `end` and `length` from the text
    pub fn new(text: impl Into<String>, begin: usize, score: f64) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self {
            end: begin + length,
            text,
            begin,
            score,
            length,
        }
    }

    /// Half-open span of this token
    pub fn span(&self) -> (usize, usize) {
        (self.begin, self.end)
    }

    /// Overlap test for half-open spans
    pub fn overlaps(&self, other: &Token) -> bool {
        self.begin < other.end && other.begin < self.end
    }

    /// Whether the token carries no text
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Split a line into whitespace-delimited chunks with character offsets
///
/// Offsets are computed from the actual character positions, so runs of
/// whitespace do not shift downstream token spans.
pub(crate) fn eojeols(text: &str) -> Vec<(usize, &str)> {
    let mut chunks = Vec::new();
    let mut char_idx = 0usize;
    let mut start: Option<(usize, usize)> = None;
    for (byte_idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some((sb, sc)) = start.take() {
                chunks.push((sc, &text[sb..byte_idx]));
            }
        } else if start.is_none() {
            start = Some((byte_idx, char_idx));
        }
        char_idx += 1;
    }
    if let Some((sb, sc)) = start {
        chunks.push((sc, &text[sb..]));
    }
    chunks
}
