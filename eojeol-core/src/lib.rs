//! Unsupervised statistical word segmentation
//!
//! This crate tokenizes whitespace-delimited chunks of text (*eojeols*)
//! using score dictionaries instead of a trained model. Candidate
//! substrings are proposed, scored, and selected into a non-overlapping
//! cover of each chunk, with fallback subtokens filling any gaps.
//!
//! Four tokenizers share the [`Tokenizer`] interface:
//!
//! - [`MaxScoreTokenizer`] — maximal-score cover over a single dictionary
//! - [`MaxLrScoreTokenizer`] — Left/Right dictionary pairs with
//!   domination pruning and Right preemption
//! - [`LTokenizer`] — one split point per eojeol by Left score alone
//! - [`RegexTokenizer`] — character-class pattern splitting
//!
//! Dictionaries are plain `HashMap<String, f64>` score maps built
//! elsewhere; this crate only consumes them.

#![warn(missing_docs)]

pub mod config;
pub mod dictionary;
pub mod error;
pub mod lr;
pub mod ltoken;
pub mod max_score;
pub mod regex_split;
pub mod token;

// Re-export key types
pub use config::{LrConfig, MaxScoreConfig};
pub use dictionary::ScoreDict;
pub use error::{CoreError, Result};
pub use lr::{MaxLrScoreTokenizer, MaxLrScoreTokenizerBuilder};
pub use ltoken::LTokenizer;
pub use max_score::MaxScoreTokenizer;
pub use regex_split::RegexTokenizer;
pub use token::Token;

use token::eojeols;

/// Common tokenization interface over whitespace-delimited input
///
/// Implementors only provide per-word tokenization; line handling and the
/// flat surface view come for free. Tokenizers are immutable after
/// construction, so one instance may serve parallel callers.
pub trait Tokenizer: Send + Sync {
    /// Tokenize one whitespace-free word at character offset `offset`
    fn tokenize_word(&self, word: &str, offset: usize) -> Vec<Token>;

    /// Tokenize a line, processing each whitespace-delimited chunk at its
    /// own character-offset base
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for (offset, chunk) in eojeols(text) {
            tokens.extend(self.tokenize_word(chunk, offset));
        }
        tokens
    }

    /// Flat surface strings in order, empty pieces excluded
    fn surfaces(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .into_iter()
            .filter(|t| !t.is_empty())
            .map(|t| t.text)
            .collect()
    }
}
