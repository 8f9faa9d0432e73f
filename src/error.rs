//! Error types for the Common Lisp scanner
//!
//! Scanning never fails: malformed input is reported through the
//! `MISMATCHED_*` token categories. These errors cover the surfaces around
//! the scanner (configuration, category names, balance checks).

use thiserror::Error;

/// Scanner errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed span found in a token stream
    ///
    /// **Triggered by:** `check_balanced` on a stream holding a `MISMATCHED_*` token
    /// **Example:** `"abc` (missing closing double quote)
    #[error("Syntax error at line {line}, column {col}: {message}")]
    SyntaxError {
        /// Line number where the malformed span starts (1-indexed)
        line: usize,
        /// Column number where the malformed span starts (1-indexed)
        col: usize,
        /// Error description
        message: String,
    },

    /// Unknown token category name
    #[error("Unknown token category: {0}")]
    UnknownCategory(String),

    /// Invalid scanner configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that cannot be recovered from
    Fatal,
    /// Error the caller may correct and retry
    Recoverable,
}

impl Error {
    /// Create a syntax error at a 1-indexed position
    pub fn syntax(line: usize, col: usize, message: impl Into<String>) -> Self {
        Error::SyntaxError {
            line,
            col,
            message: message.into(),
        }
    }

    /// Classify error severity
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::SyntaxError { .. } => ErrorSeverity::Fatal,
            Error::UnknownCategory(_) | Error::Config(_) => ErrorSeverity::Recoverable,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type for scanner operations
pub type Result<T> = std::result::Result<T, Error>;
