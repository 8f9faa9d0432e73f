//! # cl-lexer - A Common Lisp Scanner
//!
//! Turns Common Lisp source text into a flat stream of classified tokens for
//! editor tooling: highlighting, completion, and the structure builders that
//! group tokens into forms.
//!
//! ## Features
//!
//! - **Total coverage** - every character of the input lands in a token
//! - **Precise spans** - 0-indexed line/column start and end for each token
//! - **Vocabulary classification** - standard symbols come out as `KEYWORD`,
//!   `MACRO`, `SPECIAL_OPERATOR`, `CONTROL` or `PACKAGE_KEYWORD`
//! - **Never fails** - unterminated strings, `|escaped symbols|` and
//!   `#| block comments |#` are reported as `MISMATCHED_*` tokens
//!
//! ## Quick Start
//!
//! ```rust
//! use cl_lexer::{Lexer, TokenCategory};
//!
//! let mut lexer = Lexer::new("(defun square (x) (* x x))");
//! let tokens = lexer.get_tokens();
//!
//! assert_eq!(tokens[0].category, TokenCategory::OpenParen);
//! assert_eq!(tokens[1].category, TokenCategory::Macro);
//! assert_eq!(tokens[1].text, "DEFUN");
//! assert_eq!(tokens[3].category, TokenCategory::Identifier);
//! assert_eq!(tokens[3].text, "SQUARE");
//! ```
//!
//! ### Package-qualified names
//!
//! A qualified name is always two adjacent tokens:
//!
//! ```rust
//! use cl_lexer::{tokenize, TokenCategory};
//!
//! let tokens = tokenize("alexandria:flatten");
//! assert_eq!(tokens[0].category, TokenCategory::PackageName);
//! assert_eq!(tokens[0].text, "ALEXANDRIA");
//! assert_eq!(tokens[1].category, TokenCategory::Symbol);
//! assert_eq!(tokens[1].text, ":FLATTEN");
//! ```
//!
//! ### Malformed input
//!
//! ```rust
//! use cl_lexer::{check_balanced, tokenize, TokenCategory};
//!
//! let tokens = tokenize("(format t \"hello");
//! assert_eq!(tokens.last().unwrap().category, TokenCategory::MismatchedDoubleQuote);
//!
//! let err = check_balanced(&tokens).unwrap_err();
//! assert!(err.to_string().contains("unterminated string"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer (+ KeywordTable) → Tokens → structure builders / editor features
//! ```
//!
//! - [`Lexer`] - mode-driven scanner; one instance per source text
//! - [`KeywordTable`] - upper-cased label → category, built once from [`keywords::BATCHES`]
//! - [`Token`] / [`Position`] / [`TokenCategory`] - immutable scan results
//! - [`LexerOptions`] - scanner configuration
//!
//! ## License
//!
//! Licensed under the [MIT License](https://opensource.org/licenses/MIT).

/// Version of the scanner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod keywords;
pub mod lexer;

// Re-export main types
pub use config::LexerOptions;
pub use error::{Error, ErrorSeverity, Result};
pub use keywords::{Batch, EntryKind, KeywordEntry, KeywordTable};
pub use lexer::{check_balanced, tokenize, tokenize_all, Lexer, Position, Token, TokenCategory};

/// Type alias for the scanner.
/// Converts raw source text into tokens.
pub type Scanner<'t> = Lexer<'t>;
