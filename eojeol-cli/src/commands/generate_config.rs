//! Generate config command implementation

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, CliConfig::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file and point it at your dictionaries");
        println!("2. Validate your configuration:");
        println!("   eojeol validate --config {}", self.output.display());
        println!("3. Use it for tokenization:");
        println!(
            "   eojeol tokenize -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generated_template_is_loadable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eojeol.toml");
        let args = GenerateConfigArgs {
            output: path.clone(),
        };
        args.execute().unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.segmenter.max_length, 10);
    }
}
