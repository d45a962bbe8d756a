//! Plain text output formatter

use std::io::{self, Write};

use anyhow::Result;
use eojeol_core::Token;

use super::OutputFormatter;

/// Plain text formatter - outputs space-joined tokens, one line per input line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_line(&mut self, _line_number: usize, tokens: &[Token]) -> Result<()> {
        let mut first = true;
        for token in tokens.iter().filter(|t| !t.is_empty()) {
            if !first {
                write!(self.writer, " ")?;
            }
            write!(self.writer, "{}", token.text)?;
            first = false;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_joined_tokens() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            let tokens = vec![Token::new("파스타", 0, 0.7), Token::new("가", 3, 0.0)];
            formatter.write_line(1, &tokens).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "파스타 가\n");
    }

    #[test]
    fn test_empty_line_stays_empty() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.write_line(1, &[]).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "\n");
    }
}
