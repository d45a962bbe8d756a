//! Output formatting module

use anyhow::Result;
use eojeol_core::Token;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output the tokens of a single input line
    fn write_line(&mut self, line_number: usize, tokens: &[Token]) -> Result<()>;

    /// Finalize output (e.g., close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
