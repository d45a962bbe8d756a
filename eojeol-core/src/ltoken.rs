//! Two-part L splitter
//!
//! Chooses one split point per eojeol by Left-dictionary score alone, with
//! no candidate search. The `tolerance` option prefers the longer Left
//! when the score gap to the best split stays within tolerance.

use std::collections::HashMap;

use crate::dictionary::ScoreDict;
use crate::error::{CoreError, Result};
use crate::max_score::TokenBuf;
use crate::token::{eojeols, Token};
use crate::Tokenizer;

/// Splitter that cuts each eojeol into a Left word and a Right remainder
#[derive(Debug, Clone)]
pub struct LTokenizer {
    dict: ScoreDict,
    tolerance: f64,
}

impl LTokenizer {
    /// Create a splitter over `scores` with zero tolerance
    pub fn new(scores: HashMap<String, f64>) -> Result<Self> {
        Self::with_options(scores, 0.0, 0.0)
    }

    /// Create a splitter with explicit unknown score and tolerance
    pub fn with_options(
        scores: HashMap<String, f64>,
        unknown_score: f64,
        tolerance: f64,
    ) -> Result<Self> {
        if !unknown_score.is_finite() {
            return Err(CoreError::Config(format!(
                "unknown_score must be finite, got {unknown_score}"
            )));
        }
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(CoreError::Config(format!(
                "tolerance must be a non-negative finite number, got {tolerance}"
            )));
        }
        Ok(Self {
            dict: ScoreDict::new(scores, unknown_score),
            tolerance,
        })
    }

    /// Copy of this splitter with a different tolerance
    pub fn with_tolerance(&self, tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(CoreError::Config(format!(
                "tolerance must be a non-negative finite number, got {tolerance}"
            )));
        }
        Ok(Self {
            dict: self.dict.clone(),
            tolerance,
        })
    }

    /// Active tolerance
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Only the L parts of each eojeol, in order
    pub fn l_parts(&self, text: &str) -> Vec<String> {
        eojeols(text)
            .into_iter()
            .filter_map(|(offset, chunk)| {
                self.split_word(chunk, offset)
                    .into_iter()
                    .next()
                    .map(|t| t.text)
            })
            .collect()
    }

    fn split_word(&self, word: &str, offset: usize) -> TokenBuf {
        let chars: Vec<char> = word.chars().collect();
        let n = chars.len();
        let mut tokens = TokenBuf::new();
        if n == 0 {
            return tokens;
        }
        if n <= 2 {
            tokens.push(Token::new(word, offset, self.dict.score(word)));
            return tokens;
        }

        let scores: Vec<f64> = (2..=n)
            .map(|e| {
                let left: String = chars[..e].iter().collect();
                self.dict.score(&left)
            })
            .collect();
        let split = if self.tolerance > 0.0 {
            self.pick_tolerant(&scores)
        } else {
            self.pick_best(&scores)
        };
        let (e, score) = split;

        let left: String = chars[..e].iter().collect();
        tokens.push(Token::new(left, offset, score));
        if e < n {
            let right: String = chars[e..].iter().collect();
            tokens.push(Token::new(right, offset + e, 0.0));
        }
        tokens
    }

    /// Highest score wins; ties go to the longer Left
    fn pick_best(&self, scores: &[f64]) -> (usize, f64) {
        let mut best = (2, scores[0]);
        for (i, &score) in scores.iter().enumerate().skip(1) {
            if score >= best.1 {
                best = (i + 2, score);
            }
        }
        best
    }

    /// Longest Left whose score is within tolerance of the maximum
    fn pick_tolerant(&self, scores: &[f64]) -> (usize, f64) {
        let max_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut best = (2, scores[0]);
        for (i, &score) in scores.iter().enumerate() {
            if max_score - score <= self.tolerance {
                best = (i + 2, score);
            }
        }
        best
    }
}

impl Tokenizer for LTokenizer {
    fn tokenize_word(&self, word: &str, offset: usize) -> Vec<Token> {
        self.split_word(word, offset).into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores() -> HashMap<String, f64> {
        HashMap::from([
            ("파스".to_string(), 0.65),
            ("파스타".to_string(), 0.7),
            ("좋아".to_string(), 0.3),
        ])
    }

    #[test]
    fn test_split_without_tolerance() {
        let t = LTokenizer::new(scores()).unwrap();
        assert_eq!(
            t.surfaces("파스타가 좋아요 파스타가좋아요"),
            vec!["파스타", "가", "좋아", "요", "파스타", "가좋아요"]
        );
    }

    #[test]
    fn test_split_tokens_carry_offsets_and_scores() {
        let t = LTokenizer::new(scores()).unwrap();
        let tokens = t.tokenize("파스타가 좋아요");
        assert_eq!(tokens[0], Token::new("파스타", 0, 0.7));
        assert_eq!(tokens[1], Token::new("가", 3, 0.0));
        assert_eq!(tokens[2], Token::new("좋아", 5, 0.3));
        assert_eq!(tokens[3], Token::new("요", 7, 0.0));
    }

    #[test]
    fn test_tolerance_prefers_longer_left() {
        let scores = HashMap::from([("파스".to_string(), 0.75), ("파스타".to_string(), 0.7)]);
        let exact = LTokenizer::new(scores.clone()).unwrap();
        assert_eq!(exact.surfaces("파스타가"), vec!["파스", "타가"]);

        let tolerant = LTokenizer::with_options(scores, 0.0, 0.06).unwrap();
        assert_eq!(tolerant.surfaces("파스타가"), vec!["파스타", "가"]);
    }

    #[test]
    fn test_short_word_single_token() {
        let t = LTokenizer::new(scores()).unwrap();
        assert_eq!(t.tokenize("요"), vec![Token::new("요", 0, 0.0)]);
    }

    #[test]
    fn test_l_parts() {
        let t = LTokenizer::new(scores()).unwrap();
        assert_eq!(t.l_parts("파스타가 좋아요"), vec!["파스타", "좋아"]);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        assert!(LTokenizer::with_options(HashMap::new(), 0.0, -0.5).is_err());
    }
}
