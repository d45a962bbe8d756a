//! Command-line entry point for eojeol word segmentation

use clap::Parser;

use eojeol_cli::commands::Commands;

/// Statistical word segmentation for whitespace-delimited text
#[derive(Debug, Parser)]
#[command(name = "eojeol", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.command.execute() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
