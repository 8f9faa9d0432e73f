//! Scanner configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Configuration for a [`Lexer`](crate::Lexer) run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerOptions {
    /// Upper-case the text of `|escaped|` identifiers (default: true)
    ///
    /// Bar quoting conventionally preserves case, but the scanner folds it
    /// like any other identifier. Turn this off to keep the original case.
    pub fold_escaped_identifiers: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            fold_escaped_identifiers: true,
        }
    }
}

impl LexerOptions {
    /// Parse options from a JSON object; missing fields keep their defaults
    ///
    /// # Example
    /// ```
    /// use cl_lexer::LexerOptions;
    ///
    /// let options = LexerOptions::from_json(r#"{"fold_escaped_identifiers": false}"#).unwrap();
    /// assert!(!options.fold_escaped_identifiers);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
