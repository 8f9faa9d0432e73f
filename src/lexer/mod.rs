//! Lexical analysis for Common Lisp source
//!
//! Converts source text into a flat stream of classified tokens with
//! line/column spans.

mod scanner;
mod token;

pub use scanner::Lexer;
pub use token::{Position, Token, TokenCategory};

use crate::error::{Error, Result};
use rayon::prelude::*;

/// Scan `source` with the standard vocabulary and default options
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).get_tokens()
}

/// Scan independent sources in parallel, preserving input order
///
/// Each source gets its own [`Lexer`]; they share only the read-only
/// standard keyword table.
pub fn tokenize_all(sources: &[&str]) -> Vec<Vec<Token>> {
    sources.par_iter().map(|source| tokenize(source)).collect()
}

/// Report the first malformed token in `tokens` as a syntax error
///
/// Positions in the error are 1-indexed.
pub fn check_balanced(tokens: &[Token]) -> Result<()> {
    match tokens.iter().find(|token| token.is_malformed()) {
        None => Ok(()),
        Some(token) => {
            let message = match token.category {
                TokenCategory::MismatchedDoubleQuote => "unterminated string",
                TokenCategory::MismatchedBar => "unterminated escaped symbol",
                _ => "unterminated block comment",
            };
            Err(Error::syntax(
                token.start.line + 1,
                token.start.column + 1,
                message,
            ))
        }
    }
}
