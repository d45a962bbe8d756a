//! L-R dictionary tokenization
//!
//! A word is split into a stem-like Left part and a suffix-like Right
//! part, each with its own score dictionary. The pipeline runs candidate
//! enumeration, Left-domination filtering, combined scoring, and greedy
//! non-overlapping selection, with the MaxScore segmenter filling any
//! uncovered spans.

mod candidate;
mod domination;
mod scoring;

use std::collections::HashMap;

use crate::config::LrConfig;
use crate::dictionary::ScoreDict;
use crate::error::Result;
use crate::max_score::MaxScoreTokenizer;
use crate::token::Token;
use crate::Tokenizer;

use candidate::{annotate_scores, build_candidates, RankedCandidate};
use domination::filter_dominated;
use scoring::rank_candidates;

/// Tokenizer over separate Left/Right score dictionaries
///
/// Words in the preference maps are guaranteed membership in the matching
/// dictionary (score 1.0 when absent). Span bounds default to the longest
/// key of each dictionary. Gap filling runs the MaxScore segmenter over
/// the Right dictionary, so unknown spans still come back covered.
#[derive(Debug, Clone)]
pub struct MaxLrScoreTokenizer {
    dl: ScoreDict,
    pref_left: HashMap<String, f64>,
    pref_right: HashMap<String, f64>,
    lmax: usize,
    rmax: usize,
    config: LrConfig,
    fallback: MaxScoreTokenizer,
}

impl MaxLrScoreTokenizer {
    /// Create a tokenizer from Left and Right score maps with defaults
    pub fn new(left: HashMap<String, f64>, right: HashMap<String, f64>) -> Result<Self> {
        Self::builder().left_scores(left).right_scores(right).build()
    }

    /// Start building a tokenizer
    pub fn builder() -> MaxLrScoreTokenizerBuilder {
        MaxLrScoreTokenizerBuilder::new()
    }

    /// Active configuration
    pub fn config(&self) -> &LrConfig {
        &self.config
    }

    fn dr(&self) -> &ScoreDict {
        self.fallback.dict()
    }

    fn segment_word(&self, word: &str, offset: usize) -> Vec<Token> {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }
        let base = build_candidates(&chars, &self.dl, self.dr(), self.lmax, self.rmax);
        let scored = annotate_scores(base, &self.dl, self.dr());
        let survivors = filter_dominated(scored, &self.config);
        let ranked = rank_candidates(survivors, &self.pref_left, &self.pref_right, &self.config);
        let picked = select_non_overlapping(ranked);
        if picked.is_empty() {
            return self.fallback.segment(word, offset);
        }
        self.assemble(&chars, offset, &picked)
    }

    /// Emit Left/Right tokens for the kept candidates and fall back to the
    /// MaxScore segmenter for the uncovered head, interior, and tail spans
    fn assemble(&self, chars: &[char], offset: usize, picked: &[RankedCandidate]) -> Vec<Token> {
        let n = chars.len();
        let mut out = Vec::with_capacity(picked.len() * 2 + 2);
        if picked[0].left_begin() > 0 {
            out.extend(self.fallback_span(chars, offset, 0, picked[0].left_begin()));
        }
        for pair in picked.windows(2) {
            if pair[0].right_end() < pair[1].left_begin() {
                out.extend(self.fallback_span(
                    chars,
                    offset,
                    pair[0].right_end(),
                    pair[1].left_begin(),
                ));
            }
        }
        let last = &picked[picked.len() - 1];
        if last.right_end() < n {
            out.extend(self.fallback_span(chars, offset, last.right_end(), n));
        }
        for c in picked {
            out.push(Token::new(
                c.scored.base.left.clone(),
                offset + c.left_begin(),
                c.scored.left_score,
            ));
            if !c.scored.base.right.is_empty() {
                out.push(Token::new(
                    c.scored.base.right.clone(),
                    offset + c.left_end(),
                    c.scored.right_score,
                ));
            }
        }
        out.sort_by_key(|t| t.begin);
        out
    }

    fn fallback_span(&self, chars: &[char], offset: usize, begin: usize, end: usize) -> Vec<Token> {
        let sub: String = chars[begin..end].iter().collect();
        self.fallback.segment(&sub, offset + begin)
    }
}

impl Tokenizer for MaxLrScoreTokenizer {
    fn tokenize_word(&self, word: &str, offset: usize) -> Vec<Token> {
        self.segment_word(word, offset)
    }
}

/// Greedy pick by descending total score, dropping overlapping candidates
fn select_non_overlapping(mut pool: Vec<RankedCandidate>) -> Vec<RankedCandidate> {
    pool.sort_by(|a, b| {
        b.total_score
            .total_cmp(&a.total_score)
            .then_with(|| a.left_begin().cmp(&b.left_begin()))
            .then_with(|| b.scored.base.total_len().cmp(&a.scored.base.total_len()))
            .then_with(|| b.scored.base.left_len().cmp(&a.scored.base.left_len()))
    });
    let mut picked: Vec<RankedCandidate> = Vec::new();
    while !pool.is_empty() {
        let best = pool.remove(0);
        pool.retain(|c| !c.overlaps_span(best.left_begin(), best.right_end()));
        picked.push(best);
    }
    picked.sort_by_key(|c| c.left_begin());
    picked
}

/// Builder for [`MaxLrScoreTokenizer`]
#[derive(Debug, Default)]
pub struct MaxLrScoreTokenizerBuilder {
    left: HashMap<String, f64>,
    right: HashMap<String, f64>,
    pref_left: HashMap<String, f64>,
    pref_right: HashMap<String, f64>,
    config: LrConfig,
}

impl MaxLrScoreTokenizerBuilder {
    /// Create a builder with empty dictionaries and default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Left score dictionary
    pub fn left_scores(mut self, scores: HashMap<String, f64>) -> Self {
        self.left = scores;
        self
    }

    /// Set the Right score dictionary
    pub fn right_scores(mut self, scores: HashMap<String, f64>) -> Self {
        self.right = scores;
        self
    }

    /// Set the Left preference map
    pub fn preference_left(mut self, preferences: HashMap<String, f64>) -> Self {
        self.pref_left = preferences;
        self
    }

    /// Set the Right preference map
    pub fn preference_right(mut self, preferences: HashMap<String, f64>) -> Self {
        self.pref_right = preferences;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: LrConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the Left-domination absolute score threshold
    pub fn max_lscore_difference(mut self, value: f64) -> Self {
        self.config.max_lscore_difference = value;
        self
    }

    /// Set the Left-domination score ratio threshold
    pub fn max_lscore_diffratio(mut self, value: f64) -> Self {
        self.config.max_lscore_diffratio = value;
        self
    }

    /// Set the Left score at which a candidate claims overlapped Rights
    pub fn ensurable_score_l(mut self, value: f64) -> Self {
        self.config.ensurable_score_l = value;
        self
    }

    /// Set the Right-preemption score margin
    pub fn ensurable_score_lr_diff(mut self, value: f64) -> Self {
        self.config.ensurable_score_lr_diff = value;
        self
    }

    /// Validate the configuration and build the tokenizer
    pub fn build(self) -> Result<MaxLrScoreTokenizer> {
        self.config.validate()?;

        let mut left = self.left;
        let mut right = self.right;
        for word in self.pref_left.keys() {
            left.entry(word.clone()).or_insert(1.0);
        }
        for word in self.pref_right.keys() {
            right.entry(word.clone()).or_insert(1.0);
        }

        let dl = ScoreDict::new(left, 0.0);
        let dr = ScoreDict::new(right, self.config.fallback.unknown_score);
        let lmax = self.config.lmax.unwrap_or(dl.max_key_len());
        let rmax = self.config.rmax.unwrap_or(dr.max_key_len());
        let fallback = MaxScoreTokenizer::from_dict(dr, self.config.fallback.clone())?;

        Ok(MaxLrScoreTokenizer {
            dl,
            pref_left: self.pref_left,
            pref_right: self.pref_right,
            lmax,
            rmax,
            config: self.config,
            fallback,
        })
    }
}
