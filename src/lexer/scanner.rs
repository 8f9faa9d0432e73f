use super::token::{Position, Token, TokenCategory};
use crate::config::LexerOptions;
use crate::keywords::KeywordTable;

/// Scanning mode the lexer is in while building one token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Looking at the first character of a token
    Start,
    Whitespace,
    LineComment,
    QuotedString,
    /// Just past a `#`
    Pound,
    /// Inside `#| ... |#`
    BlockComment,
    PoundSequence,
    /// Inside `| ... |`
    EscapedIdentifier,
    Identifier,
}

/// Outcome of running one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Token finished with this category; `true` upper-cases its text
    Emit(TokenCategory, bool),
    /// Keep building the token in another mode
    Continue(Mode),
}

/// Scanner for Common Lisp source text
///
/// Produces a flat stream of classified tokens covering the whole input.
/// Malformed spans (unterminated strings, escaped symbols and block comments)
/// come out as `MISMATCHED_*` tokens; scanning itself never fails.
///
/// # Example
/// ```
/// use cl_lexer::{Lexer, TokenCategory};
///
/// let tokens = Lexer::new("(defun foo (x) x)").get_tokens();
/// assert_eq!(tokens[1].category, TokenCategory::Macro);
/// assert_eq!(tokens[3].text, "FOO");
/// ```
pub struct Lexer<'t> {
    /// Source code as character vector
    source: Vec<char>,
    /// Vocabulary used to classify identifiers
    table: &'t KeywordTable,
    options: LexerOptions,
    /// Current position in source
    current: usize,
    /// Cursor line/column
    position: Position,
    /// Start position of current token
    start: Position,
    /// Text of the token under construction
    text: String,
    /// Unmatched `#|` openers inside the current block comment
    depth: i32,
}

impl Lexer<'static> {
    /// Creates a scanner over `source` using the standard vocabulary
    pub fn new(source: &str) -> Self {
        Lexer::with_table(source, KeywordTable::standard())
    }
}

impl<'t> Lexer<'t> {
    /// Creates a scanner classifying identifiers against `table`
    pub fn with_table(source: &str, table: &'t KeywordTable) -> Self {
        Lexer::with_options(source, table, LexerOptions::default())
    }

    /// Creates a scanner with explicit vocabulary and options
    pub fn with_options(source: &str, table: &'t KeywordTable, options: LexerOptions) -> Self {
        Lexer {
            source: source.chars().collect(),
            table,
            options,
            current: 0,
            position: Position::default(),
            start: Position::default(),
            text: String::new(),
            depth: 0,
        }
    }

    /// Scans all remaining tokens and returns them in order
    pub fn get_tokens(&mut self) -> Vec<Token> {
        let tokens: Vec<Token> = self.by_ref().collect();
        tracing::debug!(tokens = tokens.len(), "scan finished");
        tokens
    }

    /// Scans the next token, or returns `None` at end of input
    pub fn next_token(&mut self) -> Option<Token> {
        self.start = self.position;
        self.text.clear();
        self.peek()?;

        let mut mode = Mode::Start;
        loop {
            let step = match mode {
                Mode::Start => self.dispatch(),
                Mode::Whitespace => self.whitespace(),
                Mode::LineComment => self.line_comment(),
                Mode::QuotedString => self.quoted_string(),
                Mode::Pound => self.pound(),
                Mode::BlockComment => self.block_comment(),
                Mode::PoundSequence => self.pound_sequence(),
                Mode::EscapedIdentifier => self.escaped_identifier(),
                Mode::Identifier => self.identifier(),
            };

            match step {
                Step::Continue(next) => mode = next,
                Step::Emit(category, upcase) => return Some(self.emit(category, upcase)),
            }
        }
    }

    /// Current cursor position
    pub fn position(&self) -> Position {
        self.position
    }

    fn dispatch(&mut self) -> Step {
        match self.peek() {
            Some(c) if is_whitespace(c) => Step::Continue(Mode::Whitespace),
            Some('(') => self.single(TokenCategory::OpenParen),
            Some(')') => self.single(TokenCategory::CloseParen),
            Some('\'') => self.single(TokenCategory::SingleQuote),
            Some('`') => self.single(TokenCategory::BackQuote),
            Some('"') => Step::Continue(Mode::QuotedString),
            Some('#') => Step::Continue(Mode::Pound),
            Some('|') => Step::Continue(Mode::EscapedIdentifier),
            Some(';') => Step::Continue(Mode::LineComment),
            _ => Step::Continue(Mode::Identifier),
        }
    }

    fn single(&mut self, category: TokenCategory) -> Step {
        self.take();
        Step::Emit(category, false)
    }

    fn whitespace(&mut self) -> Step {
        self.take();
        while self.peek().is_some_and(is_whitespace) {
            self.take();
        }
        Step::Emit(TokenCategory::Whitespace, false)
    }

    fn line_comment(&mut self) -> Step {
        self.take();
        while self.peek().is_some_and(|c| c != '\n') {
            self.take();
        }
        Step::Emit(TokenCategory::Comment, false)
    }

    fn quoted_string(&mut self) -> Step {
        self.take(); // Opening "

        loop {
            match self.peek() {
                None => return Step::Emit(TokenCategory::MismatchedDoubleQuote, false),
                Some('"') => {
                    self.take();
                    return Step::Emit(TokenCategory::String, false);
                }
                Some('\\') => {
                    // The escaped character is taken whatever it is
                    self.take();
                    self.take();
                }
                Some(_) => self.take(),
            }
        }
    }

    fn escaped_identifier(&mut self) -> Step {
        self.advance(); // Opening |, not recorded

        loop {
            match self.peek() {
                None | Some('\n') => return Step::Emit(TokenCategory::MismatchedBar, false),
                Some('\\') => {
                    self.take();
                    if self.peek().is_none() {
                        return Step::Emit(TokenCategory::MismatchedBar, false);
                    }
                    self.take();
                }
                Some('|') => {
                    self.advance();
                    return Step::Emit(
                        TokenCategory::Identifier,
                        self.options.fold_escaped_identifiers,
                    );
                }
                Some(_) => self.take(),
            }
        }
    }

    fn pound(&mut self) -> Step {
        self.advance();

        if self.peek() == Some('|') {
            self.advance();
            self.depth = 0;
            Step::Continue(Mode::BlockComment)
        } else {
            self.text.push('#');
            Step::Continue(Mode::PoundSequence)
        }
    }

    fn block_comment(&mut self) -> Step {
        loop {
            match self.peek() {
                None => return Step::Emit(TokenCategory::MismatchedComment, false),
                Some('|') => {
                    self.advance();
                    if self.peek() == Some('#') {
                        self.advance();
                        self.depth -= 1;
                        if self.depth < 0 {
                            return Step::Emit(TokenCategory::Comment, false);
                        }
                        self.text.push_str("|#");
                    } else {
                        self.text.push('|');
                    }
                }
                Some('\\') => {
                    self.take();
                    self.take();
                }
                Some('#') => {
                    self.take();
                    if self.peek() == Some('|') {
                        self.depth += 1;
                        self.take();
                    }
                }
                Some(_) => self.take(),
            }
        }
    }

    fn pound_sequence(&mut self) -> Step {
        // #\x captures exactly one character, delimiter or not
        if self.peek() == Some('\\') {
            self.take();
            self.take();
            return Step::Emit(TokenCategory::PoundSequence, false);
        }

        while !self.at_delimiter() {
            self.take();
        }
        Step::Emit(TokenCategory::PoundSequence, false)
    }

    fn identifier(&mut self) -> Step {
        self.take();

        while !self.at_delimiter() {
            if self.peek() == Some(':') && self.is_package_prefix() {
                return Step::Emit(TokenCategory::PackageName, true);
            }
            self.take();
        }

        if self.text.starts_with(':') {
            return Step::Emit(TokenCategory::Symbol, true);
        }

        let label = self.text.to_uppercase();
        let category = self
            .table
            .lookup(&label)
            .unwrap_or(TokenCategory::Identifier);
        Step::Emit(category, true)
    }

    /// A qualifier is at least two characters and does not start with `:`
    fn is_package_prefix(&self) -> bool {
        self.text.chars().nth(1).is_some() && !self.text.starts_with(':')
    }

    fn emit(&mut self, category: TokenCategory, upcase: bool) -> Token {
        let text = if upcase {
            self.text.to_uppercase()
        } else {
            std::mem::take(&mut self.text)
        };

        if category.is_malformed() {
            tracing::debug!(%category, start = %self.start, "malformed token");
        }

        Token::new(category, self.start, self.position, text)
    }

    fn at_delimiter(&self) -> bool {
        is_delimiter(self.peek())
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    /// Consume one character without recording it
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += 1;
        self.position = self.position.advance(c);
        Some(c)
    }

    /// Consume one character into the token text
    fn take(&mut self) {
        if let Some(c) = self.advance() {
            self.text.push(c);
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Blank characters: Unicode white space except NEL, plus the byte-order mark
fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn is_delimiter(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => is_whitespace(c) || matches!(c, '(' | ')' | '"'),
    }
}
