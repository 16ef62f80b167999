//! Error types for wordmatch-core.

use thiserror::Error;

/// Result type alias for game-level operations.
pub type Result<T> = std::result::Result<T, GameError>;

/// Recoverable failures from catalog lookups and board deals.
///
/// Neither variant is fatal: a caller that fails to deal a replacement
/// board keeps its previous one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no word list for {language}/{category}")]
    ListNotFound { language: String, category: String },

    #[error("not enough word pairs: have {have}, need {need}")]
    InsufficientPairs { have: usize, need: usize },
}

/// Errors that can occur while parsing a word-pair list file.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing ',' separator at line {line}")]
    MissingSeparator { line: usize },

    #[error("empty term at line {line}")]
    EmptyTerm { line: usize },
}
