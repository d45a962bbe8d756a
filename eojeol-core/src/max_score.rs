//! Maximal-score segmentation with a single dictionary
//!
//! Enumerates every candidate span of a word, then greedily keeps the
//! strongest non-overlapping candidates and fills the leftover gaps so the
//! output always covers the word exactly.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::config::MaxScoreConfig;
use crate::dictionary::ScoreDict;
use crate::error::Result;
use crate::token::Token;
use crate::Tokenizer;

/// Per-word token buffer; most eojeols resolve to a handful of pieces
pub(crate) type TokenBuf = SmallVec<[Token; 8]>;

/// Word segmenter that maximizes the aggregate dictionary score of a
/// non-overlapping cover
///
/// Words of up to two characters short-circuit to a single token. Longer
/// words go through candidate enumeration, greedy selection, and gap
/// filling; missing dictionary entries never fail, they score
/// `unknown_score`.
#[derive(Debug, Clone)]
pub struct MaxScoreTokenizer {
    dict: ScoreDict,
    config: MaxScoreConfig,
}

impl MaxScoreTokenizer {
    /// Create a segmenter over `scores` with default options
    pub fn new(scores: HashMap<String, f64>) -> Result<Self> {
        Self::with_config(scores, MaxScoreConfig::default())
    }

    /// Create a segmenter over `scores` with explicit options
    pub fn with_config(scores: HashMap<String, f64>, config: MaxScoreConfig) -> Result<Self> {
        let dict = ScoreDict::new(scores, config.unknown_score);
        Self::from_dict(dict, config)
    }

    pub(crate) fn from_dict(dict: ScoreDict, config: MaxScoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { dict, config })
    }

    /// The dictionary this segmenter scores against
    pub fn dict(&self) -> &ScoreDict {
        &self.dict
    }

    /// Active configuration
    pub fn config(&self) -> &MaxScoreConfig {
        &self.config
    }

    /// Segment one whitespace-free word at character offset `offset`
    ///
    /// The returned tokens are sorted by begin offset and cover the word
    /// exactly, with no gaps and no overlaps.
    pub fn segment(&self, word: &str, offset: usize) -> Vec<Token> {
        let chars: Vec<char> = word.chars().collect();
        let n = chars.len();
        if n == 0 {
            return Vec::new();
        }
        if n <= 2 {
            return vec![Token::new(word, offset, self.dict.score(word))];
        }
        let pool = self.enumerate(&chars, offset);
        let picked = self.select(pool);
        self.fill_gaps(&chars, offset, picked)
    }

    /// Score every candidate span, strongest first
    fn enumerate(&self, chars: &[char], offset: usize) -> Vec<Token> {
        let n = chars.len();
        let max_r = n.min(self.config.max_length);
        let mut pool = Vec::new();
        for b in 0..n - 1 {
            for r in 2..=max_r {
                let e = b + r;
                if e > n {
                    break;
                }
                let text: String = chars[b..e].iter().collect();
                let score = self.dict.score(&text);
                pool.push(Token::new(text, offset + b, score));
            }
        }
        // Highest score first; ties to the longer span, then the earlier one
        pool.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.length.cmp(&a.length))
                .then_with(|| a.begin.cmp(&b.begin))
        });
        pool
    }

    /// Greedy non-overlapping selection from a sorted pool
    ///
    /// Each round takes the pool head and rebuilds the pool without the
    /// spans it overlaps; the pool stays sorted, so no re-sort is needed.
    /// Rounds are capped by `iteration_cap`; residual candidates past the
    /// cap are dropped and later surface as gap-filled tokens.
    fn select(&self, mut pool: Vec<Token>) -> TokenBuf {
        let mut picked = TokenBuf::new();
        let mut rounds = 0usize;
        while !pool.is_empty() {
            let head = pool.remove(0);
            pool.retain(|t| !t.overlaps(&head));
            picked.push(head);
            rounds += 1;
            if rounds > self.config.iteration_cap {
                break;
            }
        }
        picked
    }

    /// Synthesize tokens for the uncovered head, interior, and tail spans
    fn fill_gaps(&self, chars: &[char], offset: usize, mut picked: TokenBuf) -> Vec<Token> {
        let n = chars.len();
        if picked.is_empty() {
            let text: String = chars.iter().collect();
            let score = self.dict.score(&text);
            return vec![Token::new(text, offset, score)];
        }
        picked.sort_by_key(|t| t.begin);

        let mut filled: Vec<Token> = Vec::with_capacity(picked.len() + 2);
        let first = &picked[0];
        if first.begin > offset {
            let text: String = chars[..first.begin - offset].iter().collect();
            let score = self.dict.score(&text);
            filled.push(Token::new(text, offset, score));
        }
        for pair in picked.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.end < next.begin {
                let text: String = chars[prev.end - offset..next.begin - offset].iter().collect();
                filled.push(Token::new(text, prev.end, self.dict.unknown_score()));
            }
        }
        let last = &picked[picked.len() - 1];
        if last.end - offset < n {
            let text: String = chars[last.end - offset..].iter().collect();
            let score = self.dict.score(&text);
            filled.push(Token::new(text, last.end, score));
        }

        filled.extend(picked);
        filled.sort_by_key(|t| t.begin);
        filled
    }
}

impl Tokenizer for MaxScoreTokenizer {
    fn tokenize_word(&self, word: &str, offset: usize) -> Vec<Token> {
        self.segment(word, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer(entries: &[(&str, f64)]) -> MaxScoreTokenizer {
        let scores = entries
            .iter()
            .map(|(w, s)| (w.to_string(), *s))
            .collect::<HashMap<_, _>>();
        MaxScoreTokenizer::new(scores).unwrap()
    }

    #[test]
    fn test_short_word_is_single_token() {
        let t = tokenizer(&[("ab", 0.4)]);
        assert_eq!(t.segment("ab", 0), vec![Token::new("ab", 0, 0.4)]);
        assert_eq!(t.segment("c", 5), vec![Token::new("c", 5, 0.0)]);
        assert!(t.segment("", 0).is_empty());
    }

    #[test]
    fn test_known_span_splits_off_remainder() {
        let scores = HashMap::from([("abc".to_string(), 0.9)]);
        let config = MaxScoreConfig {
            max_length: 3,
            ..Default::default()
        };
        let t = MaxScoreTokenizer::with_config(scores, config).unwrap();
        let tokens = t.segment("abcd", 0);
        assert_eq!(
            tokens,
            vec![Token::new("abc", 0, 0.9), Token::new("d", 3, 0.0)]
        );
    }

    #[test]
    fn test_empty_dictionary_prefers_longest_chunks() {
        let config = MaxScoreConfig {
            max_length: 5,
            ..Default::default()
        };
        let t = MaxScoreTokenizer::with_config(HashMap::new(), config).unwrap();
        let tokens = t.segment("abcdefghijklm", 0);
        let surfaces: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(surfaces, vec!["abcde", "fghij", "klm"]);
    }

    #[test]
    fn test_interior_gap_keeps_absolute_offsets() {
        let t = tokenizer(&[("파스타", 0.7), ("좋아", 0.3)]);
        let tokens = t.segment("파스타가좋아요", 9);
        let spans: Vec<(usize, usize)> = tokens.iter().map(Token::span).collect();
        assert_eq!(spans, vec![(9, 12), (12, 13), (13, 15), (15, 16)]);
        // the interior gap is synthesized at unknown score
        assert_eq!(tokens[1].text, "가");
        assert_eq!(tokens[1].score, 0.0);
    }

    #[test]
    fn test_iteration_cap_truncates_but_still_covers() {
        let config = MaxScoreConfig {
            max_length: 2,
            iteration_cap: 3,
            ..Default::default()
        };
        let t = MaxScoreTokenizer::with_config(HashMap::new(), config).unwrap();
        let word: String = std::iter::repeat('a').take(10).collect();
        let tokens = t.segment(&word, 0);
        // four selection rounds, then one synthesized tail
        assert_eq!(tokens.len(), 5);
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, word);
    }

    #[test]
    fn test_tokenize_splits_on_whitespace() {
        let t = tokenizer(&[("파스타", 0.7)]);
        let tokens = t.tokenize("파스타가 파스타");
        let surfaces: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(surfaces, vec!["파스타", "가", "파스타"]);
        assert_eq!(tokens[2].span(), (5, 8));
    }
}
