//! Read-only score dictionaries

use std::collections::HashMap;

/// Read-only mapping from word to score with an unknown-word default
///
/// Owned by a tokenizer for its lifetime and never mutated after
/// construction, so tokenizers stay `Send + Sync` and callers may
/// parallel-map across lines. Rebuilding scores means constructing a new
/// tokenizer and swapping it in.
#[derive(Debug, Clone, Default)]
pub struct ScoreDict {
    scores: HashMap<String, f64>,
    unknown_score: f64,
    max_key_len: usize,
}

impl ScoreDict {
    /// Wrap a score map with the given default for unseen words
    pub fn new(scores: HashMap<String, f64>, unknown_score: f64) -> Self {
        let max_key_len = scores.keys().map(|w| w.chars().count()).max().unwrap_or(0);
        Self {
            scores,
            unknown_score,
            max_key_len,
        }
    }

    /// Build a dictionary from a plain word list, scoring every entry 1.0
    pub fn from_words<I>(words: I, unknown_score: f64) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let scores = words.into_iter().map(|w| (w.into(), 1.0)).collect();
        Self::new(scores, unknown_score)
    }

    /// Score of `word`, falling back to the unknown-score default
    pub fn score(&self, word: &str) -> f64 {
        self.scores.get(word).copied().unwrap_or(self.unknown_score)
    }

    /// Score of `word` if present
    pub fn get(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// Whether `word` is a dictionary key
    pub fn contains(&self, word: &str) -> bool {
        self.scores.contains_key(word)
    }

    /// Default score for unseen words
    pub fn unknown_score(&self) -> f64 {
        self.unknown_score
    }

    /// Length in characters of the longest key, 0 when empty
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> ScoreDict {
        let scores = HashMap::from([("파스".to_string(), 0.65), ("파스타".to_string(), 0.7)]);
        ScoreDict::new(scores, 0.1)
    }

    #[test]
    fn test_score_lookup() {
        let d = dict();
        assert_eq!(d.score("파스타"), 0.7);
        assert_eq!(d.score("없는말"), 0.1);
        assert_eq!(d.get("없는말"), None);
    }

    #[test]
    fn test_max_key_len_in_chars() {
        assert_eq!(dict().max_key_len(), 3);
        assert_eq!(ScoreDict::default().max_key_len(), 0);
    }

    #[test]
    fn test_from_words() {
        let d = ScoreDict::from_words(["가", "나다"], 0.0);
        assert_eq!(d.score("가"), 1.0);
        assert_eq!(d.len(), 2);
        assert!(d.contains("나다"));
    }
}
