//! Tokenizer configuration
//!
//! Every option is validated when a tokenizer is constructed; malformed
//! configuration is a construction-time error, never a mid-segmentation
//! surprise.

use crate::error::{CoreError, Result};

/// Configuration for the MaxScore segmenter
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MaxScoreConfig {
    /// Maximum candidate span length in characters
    pub max_length: usize,
    /// Score assigned to substrings absent from the dictionary
    pub unknown_score: f64,
    /// Safety cap on greedy selection rounds for pathologically long words
    ///
    /// Selection past the cap drops residual candidates; gap filling still
    /// restores full coverage, so truncation only costs score resolution.
    pub iteration_cap: usize,
}

impl Default for MaxScoreConfig {
    fn default() -> Self {
        Self {
            max_length: 10,
            unknown_score: 0.0,
            iteration_cap: 100,
        }
    }
}

impl MaxScoreConfig {
    /// Check invariants, failing fast on malformed options
    pub fn validate(&self) -> Result<()> {
        if self.max_length < 2 {
            return Err(CoreError::Config(format!(
                "max_length must be at least 2, got {}",
                self.max_length
            )));
        }
        if self.iteration_cap == 0 {
            return Err(CoreError::Config(
                "iteration_cap must be positive".to_string(),
            ));
        }
        if !self.unknown_score.is_finite() {
            return Err(CoreError::Config(format!(
                "unknown_score must be finite, got {}",
                self.unknown_score
            )));
        }
        Ok(())
    }
}

/// Configuration for the L-R tokenizer
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LrConfig {
    /// Largest absolute Left-score gap at which a longer overlapping Left
    /// still suppresses a shorter, stronger one
    pub max_lscore_difference: f64,
    /// Ratio threshold for the same suppression, guarded by
    /// `ensurable_score_l`
    pub max_lscore_diffratio: f64,
    /// Left score at which a candidate claims overlapped Right spans
    pub ensurable_score_l: f64,
    /// Score margin at which an upcoming Left preempts a Right span
    pub ensurable_score_lr_diff: f64,
    /// Maximum Left span length; derived from the Left dictionary if unset
    pub lmax: Option<usize>,
    /// Maximum Right span length; derived from the Right dictionary if unset
    pub rmax: Option<usize>,
    /// Options for the fallback segmenter used to fill uncovered gaps
    pub fallback: MaxScoreConfig,
}

impl Default for LrConfig {
    fn default() -> Self {
        Self {
            max_lscore_difference: 0.3,
            max_lscore_diffratio: 0.5,
            ensurable_score_l: 0.5,
            ensurable_score_lr_diff: 0.3,
            lmax: None,
            rmax: None,
            fallback: MaxScoreConfig::default(),
        }
    }
}

impl LrConfig {
    /// Check invariants, failing fast on malformed options
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("max_lscore_difference", self.max_lscore_difference),
            ("max_lscore_diffratio", self.max_lscore_diffratio),
            ("ensurable_score_l", self.ensurable_score_l),
            ("ensurable_score_lr_diff", self.ensurable_score_lr_diff),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be a non-negative finite number, got {value}"
                )));
            }
        }
        if self.lmax == Some(0) || self.rmax == Some(0) {
            return Err(CoreError::Config(
                "lmax and rmax must be positive when set".to_string(),
            ));
        }
        self.fallback.validate()
    }
}
