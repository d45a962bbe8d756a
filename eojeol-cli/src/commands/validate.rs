//! Validate command implementation

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use crate::config::CliConfig;
use crate::input::load_scores;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match check_config(&self.config) {
            Ok(report) => {
                println!("✓ Configuration is valid!");
                for line in report {
                    println!("  {line}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

/// Validate the segmenter options and every configured dictionary
fn check_config(path: &Path) -> Result<Vec<String>> {
    let config = CliConfig::load(path)?;

    config.segmenter.max_score_config().validate()?;
    config.segmenter.lr_config().validate()?;

    let mut report = vec![format!(
        "max_length: {}, iteration_cap: {}",
        config.segmenter.max_length, config.segmenter.iteration_cap
    )];

    let dictionaries = [
        ("scores", &config.dictionary.scores),
        ("left_scores", &config.dictionary.left_scores),
        ("right_scores", &config.dictionary.right_scores),
        ("preference_left", &config.dictionary.preference_left),
        ("preference_right", &config.dictionary.preference_right),
    ];
    for (name, dict_path) in dictionaries {
        if let Some(dict_path) = dict_path {
            let scores = load_scores(dict_path)?;
            report.push(format!("{name}: {} entries", scores.len()));
        }
    }

    Ok(report)
}
