use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A line/column cursor position (both 0-indexed)
///
/// Ordering is line-major, column-minor.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed, counted in characters)
    pub column: usize,
}

impl Position {
    /// Creates a position
    pub const fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    /// Position after consuming `ch` from this position
    pub fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            Position::new(self.line + 1, 0)
        } else {
            Position::new(self.line, self.column + 1)
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A single scanned token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Classification of the token
    pub category: TokenCategory,
    /// Cursor position before the first consumed character
    pub start: Position,
    /// Cursor position after the last consumed character
    pub end: Position,
    /// Consumed text, upper-cased for symbol-like categories
    pub text: String,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(category: TokenCategory, start: Position, end: Position, text: String) -> Self {
        Token {
            category,
            start,
            end,
            text,
        }
    }

    /// True for unterminated strings, escaped symbols and block comments
    pub fn is_malformed(&self) -> bool {
        self.category.is_malformed()
    }
}

/// Closed set of token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenCategory {
    /// Run of blank characters
    Whitespace,
    /// `;` line comment or balanced `#| ... |#` block comment
    Comment,
    /// Block comment left open at end of input
    MismatchedComment,
    /// `|escaped symbol` left open at a newline or end of input
    MismatchedBar,
    /// String left open at end of input
    MismatchedDoubleQuote,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `'`
    SingleQuote,
    /// `` ` ``
    BackQuote,
    /// Double-quoted string, delimiters included
    String,
    /// `#` reader-macro sequence
    PoundSequence,
    /// Qualifier in front of a `:` package separator
    PackageName,
    /// Colon-prefixed symbol
    Symbol,
    /// Identifier not found in the keyword table
    Identifier,
    /// Standard vocabulary entry
    Keyword,
    /// Standard macro
    Macro,
    /// Special operator
    SpecialOperator,
    /// Control-flow vocabulary entry
    Control,
    /// Package-system vocabulary entry
    PackageKeyword,
}

impl TokenCategory {
    /// Every category, in declaration order
    pub const ALL: [TokenCategory; 19] = [
        TokenCategory::Whitespace,
        TokenCategory::Comment,
        TokenCategory::MismatchedComment,
        TokenCategory::MismatchedBar,
        TokenCategory::MismatchedDoubleQuote,
        TokenCategory::OpenParen,
        TokenCategory::CloseParen,
        TokenCategory::SingleQuote,
        TokenCategory::BackQuote,
        TokenCategory::String,
        TokenCategory::PoundSequence,
        TokenCategory::PackageName,
        TokenCategory::Symbol,
        TokenCategory::Identifier,
        TokenCategory::Keyword,
        TokenCategory::Macro,
        TokenCategory::SpecialOperator,
        TokenCategory::Control,
        TokenCategory::PackageKeyword,
    ];

    /// Canonical upper-case name
    pub fn name(self) -> &'static str {
        match self {
            TokenCategory::Whitespace => "WHITESPACE",
            TokenCategory::Comment => "COMMENT",
            TokenCategory::MismatchedComment => "MISMATCHED_COMMENT",
            TokenCategory::MismatchedBar => "MISMATCHED_BAR",
            TokenCategory::MismatchedDoubleQuote => "MISMATCHED_DOUBLE_QUOTE",
            TokenCategory::OpenParen => "OPEN_PAREN",
            TokenCategory::CloseParen => "CLOSE_PAREN",
            TokenCategory::SingleQuote => "SINGLE_QUOTE",
            TokenCategory::BackQuote => "BACK_QUOTE",
            TokenCategory::String => "STRING",
            TokenCategory::PoundSequence => "POUND_SEQUENCE",
            TokenCategory::PackageName => "PACKAGE_NAME",
            TokenCategory::Symbol => "SYMBOL",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Keyword => "KEYWORD",
            TokenCategory::Macro => "MACRO",
            TokenCategory::SpecialOperator => "SPECIAL_OPERATOR",
            TokenCategory::Control => "CONTROL",
            TokenCategory::PackageKeyword => "PACKAGE_KEYWORD",
        }
    }

    /// Check if the category marks malformed input
    pub fn is_malformed(self) -> bool {
        matches!(
            self,
            TokenCategory::MismatchedComment
                | TokenCategory::MismatchedBar
                | TokenCategory::MismatchedDoubleQuote
        )
    }

    /// Check if the category carries no syntactic meaning
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenCategory::Whitespace | TokenCategory::Comment)
    }

    /// Check if tokens of this category are emitted upper-cased
    pub fn is_case_folded(self) -> bool {
        matches!(
            self,
            TokenCategory::Identifier
                | TokenCategory::Keyword
                | TokenCategory::Macro
                | TokenCategory::SpecialOperator
                | TokenCategory::Control
                | TokenCategory::PackageKeyword
                | TokenCategory::Symbol
                | TokenCategory::PackageName
        )
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for TokenCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TokenCategory::ALL
            .iter()
            .copied()
            .find(|category| category.name() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
