//! Core error types

use thiserror::Error;

/// Errors raised while constructing tokenizers or their configuration
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration rejected at construction time
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Pattern pipeline failed to compile
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
