//! Character-class pattern splitter
//!
//! Splits each eojeol at transitions between character classes using a
//! regex pipeline. The pipeline is explicit constructor state; the default
//! covers numbers, Hangul syllables, jamo runs, and Latin words.

use regex::Regex;

use crate::error::Result;
use crate::token::Token;
use crate::Tokenizer;

const DEFAULT_PATTERNS: [&str; 5] = [
    // number
    r"[+-]?\d*\.?\d+",
    // Hangul syllables
    r"[가-힣]+",
    // jamo consonants
    r"[ㄱ-ㅎ]+",
    // jamo vowels
    r"[ㅏ-ㅣ]+",
    // Latin, with possessive tail
    r"[a-zA-ZÀ-ÿ]+(?:['`]s)?",
];

/// Splitter that cuts eojeols at character-class boundaries
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pipelines: Vec<Regex>,
}

impl RegexTokenizer {
    /// Create a splitter with the default pattern pipeline
    pub fn new() -> Result<Self> {
        Self::with_patterns(DEFAULT_PATTERNS)
    }

    /// Create a splitter from custom patterns, applied in order
    pub fn with_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pipelines = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { pipelines })
    }

    fn split_word(&self, word: &str, offset: usize) -> Vec<Token> {
        if word.is_empty() {
            return Vec::new();
        }

        // Earlier patterns claim byte spans first; later matches that
        // overlap a claimed span are ignored
        let mut claimed: Vec<(usize, usize)> = Vec::new();
        for pattern in &self.pipelines {
            for found in pattern.find_iter(word) {
                let (start, end) = (found.start(), found.end());
                if claimed.iter().any(|&(cs, ce)| start < ce && cs < end) {
                    continue;
                }
                claimed.push((start, end));
            }
        }
        claimed.sort_unstable();

        let mut pieces: Vec<(usize, usize)> = Vec::with_capacity(claimed.len() + 1);
        let mut cursor = 0;
        for &(start, end) in &claimed {
            if cursor < start {
                pieces.push((cursor, start));
            }
            pieces.push((start, end));
            cursor = end;
        }
        if cursor < word.len() {
            pieces.push((cursor, word.len()));
        }

        let mut tokens = Vec::with_capacity(pieces.len());
        let mut char_offset = offset;
        for (start, end) in pieces {
            let text = &word[start..end];
            let length = text.chars().count();
            tokens.push(Token::new(text, char_offset, 1.0));
            char_offset += length;
        }
        tokens
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize_word(&self, word: &str, offset: usize) -> Vec<Token> {
        self.split_word(word, offset)
    }
}
