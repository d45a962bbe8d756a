//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Malformed dictionary file
    DictionaryError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::DictionaryError(msg) => write!(f, "Dictionary error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("corpus.txt".to_string());
        assert_eq!(error.to_string(), "File not found: corpus.txt");
    }

    #[test]
    fn test_dictionary_error_display() {
        let error = CliError::DictionaryError("line 3: invalid score 'abc'".to_string());
        assert_eq!(
            error.to_string(),
            "Dictionary error: line 3: invalid score 'abc'"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown format 'yaml'".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown format 'yaml'");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        let _: &dyn std::error::Error = &error;
        assert!(format!("{:?}", error).contains("InvalidPattern"));
    }
}
