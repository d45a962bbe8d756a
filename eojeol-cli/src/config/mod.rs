//! Configuration module

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eojeol_core::{LrConfig, MaxScoreConfig};
use serde::{Deserialize, Serialize};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Segmenter thresholds and limits
    #[serde(default)]
    pub segmenter: SegmenterConfig,

    /// Dictionary file locations
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Segmenter-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Maximum candidate span length in characters
    pub max_length: usize,

    /// Score for substrings missing from the dictionary
    pub unknown_score: f64,

    /// Safety cap on greedy selection rounds
    pub iteration_cap: usize,

    /// Left-domination absolute score threshold
    pub max_lscore_difference: f64,

    /// Left-domination score ratio threshold
    pub max_lscore_diffratio: f64,

    /// Left score at which a candidate claims overlapped Rights
    pub ensurable_score_l: f64,

    /// Right-preemption score margin
    pub ensurable_score_lr_diff: f64,

    /// Tolerance for the two-part L splitter
    pub tolerance: f64,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_length: 10,
            unknown_score: 0.0,
            iteration_cap: 100,
            max_lscore_difference: 0.3,
            max_lscore_diffratio: 0.5,
            ensurable_score_l: 0.5,
            ensurable_score_lr_diff: 0.3,
            tolerance: 0.0,
        }
    }
}

impl SegmenterConfig {
    /// Core configuration for the MaxScore segmenter
    pub fn max_score_config(&self) -> MaxScoreConfig {
        MaxScoreConfig {
            max_length: self.max_length,
            unknown_score: self.unknown_score,
            iteration_cap: self.iteration_cap,
        }
    }

    /// Core configuration for the L-R tokenizer
    pub fn lr_config(&self) -> LrConfig {
        LrConfig {
            max_lscore_difference: self.max_lscore_difference,
            max_lscore_diffratio: self.max_lscore_diffratio,
            ensurable_score_l: self.ensurable_score_l,
            ensurable_score_lr_diff: self.ensurable_score_lr_diff,
            lmax: None,
            rmax: None,
            fallback: self.max_score_config(),
        }
    }
}

/// Dictionary file locations
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Word score dictionary for the max-score and l-token tokenizers
    pub scores: Option<PathBuf>,

    /// Left score dictionary for the lr tokenizer
    pub left_scores: Option<PathBuf>,

    /// Right score dictionary for the lr tokenizer
    pub right_scores: Option<PathBuf>,

    /// Left preference map
    pub preference_left: Option<PathBuf>,

    /// Right preference map
    pub preference_right: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Template configuration content for generate-config
    pub fn template() -> &'static str {
        r#"# eojeol configuration

[segmenter]
# Maximum candidate span length in characters
max_length = 10
# Score for substrings missing from the dictionary
unknown_score = 0.0
# Safety cap on greedy selection rounds for pathologically long words
iteration_cap = 100
# Left-domination thresholds for the lr tokenizer
max_lscore_difference = 0.3
max_lscore_diffratio = 0.5
# Right-preemption thresholds for the lr tokenizer
ensurable_score_l = 0.5
ensurable_score_lr_diff = 0.3
# Tolerance for the l-token tokenizer
tolerance = 0.0

[dictionary]
# Dictionary files are TSV: word<TAB>score, one entry per line
# scores = "scores.tsv"
# left_scores = "left.tsv"
# right_scores = "right.tsv"
# preference_left = "preference_left.tsv"
# preference_right = "preference_right.tsv"

[output]
default_format = "text"
pretty_json = true
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.segmenter.max_length, 10);
        assert_eq!(config.segmenter.iteration_cap, 100);
        assert_eq!(config.output.default_format, "text");
        assert!(config.dictionary.scores.is_none());
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config: CliConfig = toml::from_str(CliConfig::template()).unwrap();
        assert_eq!(config.segmenter.max_length, 10);
        assert_eq!(config.segmenter.max_lscore_difference, 0.3);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
[segmenter]
max_length = 6
"#,
        )
        .unwrap();
        assert_eq!(config.segmenter.max_length, 6);
        assert_eq!(config.segmenter.iteration_cap, 100);
    }

    #[test]
    fn test_core_config_conversion() {
        let segmenter = SegmenterConfig::default();
        assert!(segmenter.max_score_config().validate().is_ok());
        assert!(segmenter.lr_config().validate().is_ok());
    }
}
