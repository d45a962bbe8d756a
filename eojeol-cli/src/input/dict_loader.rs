//! Score dictionary loading
//!
//! Dictionaries are TSV files with one `word<TAB>score` entry per line.
//! Blank lines and lines starting with `#` are skipped.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::CliError;

/// Load a score dictionary from a TSV file
pub fn load_scores(path: &Path) -> Result<HashMap<String, f64>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;
    parse_scores(&content).with_context(|| format!("Failed to parse dictionary: {}", path.display()))
}

fn parse_scores(content: &str) -> Result<HashMap<String, f64>> {
    let mut scores = HashMap::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (word, score) = line.split_once('\t').ok_or_else(|| {
            CliError::DictionaryError(format!("line {}: expected word<TAB>score", index + 1))
        })?;
        let score: f64 = score.trim().parse().map_err(|_| {
            CliError::DictionaryError(format!(
                "line {}: invalid score '{}'",
                index + 1,
                score.trim()
            ))
        })?;
        scores.insert(word.trim().to_string(), score);
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_scores() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dict.tsv");
        fs::write(&path, "파스타\t0.7\n좋아\t0.3\n").unwrap();

        let scores = load_scores(&path).unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores["파스타"], 0.7);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let scores = parse_scores("# header\n\n가\t1.0\n").unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores["가"], 1.0);
    }

    #[test]
    fn test_missing_tab_is_an_error() {
        let result = parse_scores("파스타 0.7\n");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("line 1"));
    }

    #[test]
    fn test_invalid_score_is_an_error() {
        let result = parse_scores("파스타\thigh\n");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("invalid score 'high'"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_scores(Path::new("/nonexistent/dict.tsv"));
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }
}
