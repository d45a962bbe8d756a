//! JSON output formatter

use std::io::Write;

use anyhow::Result;
use eojeol_core::Token;
use serde::{Deserialize, Serialize};

use super::OutputFormatter;

/// JSON formatter - outputs one record per input line
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    lines: Vec<LineData>,
}

/// Data structure for one line of JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct LineData {
    /// 1-based line number in the input
    pub line: usize,
    /// Tokens of the line, in order
    pub tokens: Vec<TokenData>,
}

/// Data structure for one token
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenData {
    /// Surface text
    pub text: String,
    /// Character offset of the first character
    pub begin: usize,
    /// Character offset one past the last character
    pub end: usize,
    /// Dictionary score
    pub score: f64,
}

impl From<&Token> for TokenData {
    fn from(token: &Token) -> Self {
        Self {
            text: token.text.clone(),
            begin: token.begin,
            end: token.end,
            score: token.score,
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            lines: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_line(&mut self, line_number: usize, tokens: &[Token]) -> Result<()> {
        self.lines.push(LineData {
            line: line_number,
            tokens: tokens
                .iter()
                .filter(|t| !t.is_empty())
                .map(TokenData::from)
                .collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.lines)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
