//! Tokenize command implementation

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use eojeol_core::{
    LTokenizer, MaxLrScoreTokenizer, MaxScoreTokenizer, RegexTokenizer, Token, Tokenizer,
};
use rayon::prelude::*;

use crate::config::{CliConfig, SegmenterConfig};
use crate::error::CliError;
use crate::input::{load_scores, resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input files or patterns (supports glob); stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Tokenizer to run
    #[arg(short, long, value_enum, default_value = "max-score")]
    pub tokenizer: TokenizerKind,

    /// Word score dictionary (TSV: word<TAB>score)
    #[arg(short = 'd', long, value_name = "FILE")]
    pub scores: Option<PathBuf>,

    /// Left score dictionary for the lr tokenizer
    #[arg(long, value_name = "FILE")]
    pub left_scores: Option<PathBuf>,

    /// Right score dictionary for the lr tokenizer
    #[arg(long, value_name = "FILE")]
    pub right_scores: Option<PathBuf>,

    /// Left preference map for the lr tokenizer
    #[arg(long, value_name = "FILE")]
    pub preference_left: Option<PathBuf>,

    /// Right preference map for the lr tokenizer
    #[arg(long, value_name = "FILE")]
    pub preference_right: Option<PathBuf>,

    /// Tolerance for the l-token tokenizer
    #[arg(long, value_name = "SCORE")]
    pub tolerance: Option<f64>,

    /// Maximum candidate span length in characters
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Score for substrings missing from the dictionary
    #[arg(long, value_name = "SCORE")]
    pub unknown_score: Option<f64>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Process lines in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel processing (0 = all cores)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Space-joined tokens, one line per input line
    Text,
    /// JSON records with token offsets and scores
    Json,
}

/// Available tokenizers
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TokenizerKind {
    /// Maximal-score cover over a single dictionary
    MaxScore,
    /// Left/Right dictionary pairs with domination pruning
    Lr,
    /// One split point per eojeol by Left score alone
    LToken,
    /// Character-class pattern splitting
    Pattern,
}

/// Effective settings after merging the config file and CLI flags
struct Settings {
    segmenter: SegmenterConfig,
    scores: Option<PathBuf>,
    left_scores: Option<PathBuf>,
    right_scores: Option<PathBuf>,
    preference_left: Option<PathBuf>,
    preference_right: Option<PathBuf>,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.effective_settings(&file_config);
        let tokenizer = self.build_tokenizer(&settings)?;

        if self.parallel {
            self.configure_thread_pool();
        }

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(fs::File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match self.effective_format(&file_config)? {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, file_config.output.pretty_json))
            }
        };

        let mut line_number = 0usize;
        if self.input.is_empty() {
            log::info!("Reading from stdin");
            let text = io::read_to_string(io::stdin()).context("Failed to read stdin")?;
            self.process_text(&text, tokenizer.as_ref(), formatter.as_mut(), &mut line_number)?;
        } else {
            let files = resolve_patterns(&self.input)?;
            log::info!("Processing {} input file(s)", files.len());
            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64);
            for file in &files {
                let text = FileReader::read_text(file)?;
                self.process_text(
                    &text,
                    tokenizer.as_ref(),
                    formatter.as_mut(),
                    &mut line_number,
                )?;
                progress.file_completed(&file.display().to_string());
            }
            progress.finish();
        }
        formatter.finish()?;

        log::info!("Tokenized {line_number} line(s)");
        Ok(())
    }

    fn process_text(
        &self,
        text: &str,
        tokenizer: &dyn Tokenizer,
        formatter: &mut dyn OutputFormatter,
        line_number: &mut usize,
    ) -> Result<()> {
        let lines: Vec<&str> = text.lines().collect();
        let tokenized: Vec<Vec<Token>> = if self.parallel {
            lines.par_iter().map(|line| tokenizer.tokenize(line)).collect()
        } else {
            lines.iter().map(|line| tokenizer.tokenize(line)).collect()
        };
        for tokens in &tokenized {
            *line_number += 1;
            formatter.write_line(*line_number, tokens)?;
        }
        Ok(())
    }

    /// CLI flags win over the configuration file
    fn effective_settings(&self, config: &CliConfig) -> Settings {
        let mut segmenter = config.segmenter.clone();
        if let Some(value) = self.max_length {
            segmenter.max_length = value;
        }
        if let Some(value) = self.unknown_score {
            segmenter.unknown_score = value;
        }
        if let Some(value) = self.tolerance {
            segmenter.tolerance = value;
        }
        Settings {
            segmenter,
            scores: self.scores.clone().or_else(|| config.dictionary.scores.clone()),
            left_scores: self
                .left_scores
                .clone()
                .or_else(|| config.dictionary.left_scores.clone()),
            right_scores: self
                .right_scores
                .clone()
                .or_else(|| config.dictionary.right_scores.clone()),
            preference_left: self
                .preference_left
                .clone()
                .or_else(|| config.dictionary.preference_left.clone()),
            preference_right: self
                .preference_right
                .clone()
                .or_else(|| config.dictionary.preference_right.clone()),
        }
    }

    fn build_tokenizer(&self, settings: &Settings) -> Result<Box<dyn Tokenizer>> {
        match self.tokenizer {
            TokenizerKind::MaxScore => {
                let scores = load_scores(self.required_scores(settings)?)?;
                let tokenizer =
                    MaxScoreTokenizer::with_config(scores, settings.segmenter.max_score_config())?;
                Ok(Box::new(tokenizer))
            }
            TokenizerKind::Lr => {
                let left = match &settings.left_scores {
                    Some(path) => load_scores(path)?,
                    None => {
                        return Err(CliError::ConfigError(
                            "the lr tokenizer needs --left-scores or [dictionary].left_scores"
                                .to_string(),
                        )
                        .into())
                    }
                };
                let right = match &settings.right_scores {
                    Some(path) => load_scores(path)?,
                    None => HashMap::new(),
                };
                let mut builder = MaxLrScoreTokenizer::builder()
                    .left_scores(left)
                    .right_scores(right)
                    .config(settings.segmenter.lr_config());
                if let Some(path) = &settings.preference_left {
                    builder = builder.preference_left(load_scores(path)?);
                }
                if let Some(path) = &settings.preference_right {
                    builder = builder.preference_right(load_scores(path)?);
                }
                Ok(Box::new(builder.build()?))
            }
            TokenizerKind::LToken => {
                let scores = load_scores(self.required_scores(settings)?)?;
                let tokenizer = LTokenizer::with_options(
                    scores,
                    settings.segmenter.unknown_score,
                    settings.segmenter.tolerance,
                )?;
                Ok(Box::new(tokenizer))
            }
            TokenizerKind::Pattern => Ok(Box::new(RegexTokenizer::new()?)),
        }
    }

    fn required_scores<'a>(&self, settings: &'a Settings) -> Result<&'a PathBuf> {
        settings.scores.as_ref().ok_or_else(|| {
            CliError::ConfigError(format!(
                "the {:?} tokenizer needs --scores or [dictionary].scores",
                self.tokenizer
            ))
            .into()
        })
    }

    fn effective_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        match config.output.default_format.as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => {
                Err(CliError::ConfigError(format!("unknown output format '{other}'")).into())
            }
        }
    }

    fn configure_thread_pool(&self) {
        if let Some(threads) = self.threads {
            let count = if threads == 0 { num_cpus::get() } else { threads };
            if let Err(error) = rayon::ThreadPoolBuilder::new()
                .num_threads(count)
                .build_global()
            {
                log::warn!("Failed to configure thread pool: {error}");
            }
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> TokenizeArgs {
        TokenizeArgs {
            input: vec![],
            output: None,
            format: None,
            tokenizer: TokenizerKind::MaxScore,
            scores: None,
            left_scores: None,
            right_scores: None,
            preference_left: None,
            preference_right: None,
            tolerance: None,
            max_length: None,
            unknown_score: None,
            config: None,
            parallel: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_flags_override_config_file_values() {
        let mut tokenize = args();
        tokenize.max_length = Some(4);
        tokenize.tolerance = Some(0.05);
        let settings = tokenize.effective_settings(&CliConfig::default());
        assert_eq!(settings.segmenter.max_length, 4);
        assert_eq!(settings.segmenter.tolerance, 0.05);
        assert_eq!(settings.segmenter.iteration_cap, 100);
    }

    #[test]
    fn test_missing_scores_is_a_config_error() {
        let tokenize = args();
        let settings = tokenize.effective_settings(&CliConfig::default());
        let result = tokenize.build_tokenizer(&settings);
        let err = match result {
            Ok(_) => panic!("expected a config error"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("--scores"));
    }

    #[test]
    fn test_pattern_tokenizer_needs_no_dictionary() {
        let mut tokenize = args();
        tokenize.tokenizer = TokenizerKind::Pattern;
        let settings = tokenize.effective_settings(&CliConfig::default());
        assert!(tokenize.build_tokenizer(&settings).is_ok());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let tokenize = args();
        let mut config = CliConfig::default();
        config.output.default_format = "yaml".to_string();
        assert!(tokenize.effective_format(&config).is_err());
    }
}
