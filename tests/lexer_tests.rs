//! Tests for the scanner's token stream on representative Common Lisp input

use cl_lexer::{
    check_balanced, tokenize, Error, KeywordTable, Lexer, LexerOptions, Position, Token,
    TokenCategory,
};

fn categories(tokens: &[Token]) -> Vec<TokenCategory> {
    tokens.iter().map(|t| t.category).collect()
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

// ====================
// Basic forms
// ====================

#[test]
fn test_defun_form() {
    let tokens = tokenize("(defun foo (x) x)");

    assert_eq!(
        categories(&tokens),
        vec![
            TokenCategory::OpenParen,
            TokenCategory::Macro,
            TokenCategory::Whitespace,
            TokenCategory::Identifier,
            TokenCategory::Whitespace,
            TokenCategory::OpenParen,
            TokenCategory::Identifier,
            TokenCategory::CloseParen,
            TokenCategory::Whitespace,
            TokenCategory::Identifier,
            TokenCategory::CloseParen,
        ]
    );
    assert_eq!(
        texts(&tokens),
        vec!["(", "DEFUN", " ", "FOO", " ", "(", "X", ")", " ", "X", ")"]
    );
}

#[test]
fn test_vocabulary_categories() {
    let tokens = tokenize("(let ((x (car y))) (if x (funcall #'f) (use-package :foo)))");
    let classified: Vec<(TokenCategory, &str)> = tokens
        .iter()
        .filter(|t| !t.category.is_trivia())
        .map(|t| (t.category, t.text.as_str()))
        .filter(|(c, _)| !matches!(c, TokenCategory::OpenParen | TokenCategory::CloseParen))
        .collect();

    assert_eq!(
        classified,
        vec![
            (TokenCategory::SpecialOperator, "LET"),
            (TokenCategory::Identifier, "X"),
            (TokenCategory::Keyword, "CAR"),
            (TokenCategory::Identifier, "Y"),
            (TokenCategory::SpecialOperator, "IF"),
            (TokenCategory::Identifier, "X"),
            (TokenCategory::Control, "FUNCALL"),
            (TokenCategory::PoundSequence, "#'f"),
            (TokenCategory::PackageKeyword, "USE-PACKAGE"),
            (TokenCategory::Symbol, ":FOO"),
        ]
    );
}

#[test]
fn test_mixed_case_input_is_folded() {
    let tokens = tokenize("(DeFuN Foo () NIL)");

    assert_eq!(tokens[1].text, "DEFUN");
    assert_eq!(tokens[1].category, TokenCategory::Macro);
    assert_eq!(tokens[3].text, "FOO");
    assert_eq!(tokens[8].text, "NIL");
    assert_eq!(tokens[8].category, TokenCategory::Control);
}

// ====================
// Strings
// ====================

#[test]
fn test_unterminated_string() {
    let tokens = tokenize("\"abc");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].category, TokenCategory::MismatchedDoubleQuote);
    assert_eq!(tokens[0].text, "\"abc");
    assert_eq!(tokens[0].end, Position::new(0, 4));
}

#[test]
fn test_string_keeps_case_and_quotes() {
    let tokens = tokenize("(print \"Hello, World\")");

    assert_eq!(tokens[3].category, TokenCategory::String);
    assert_eq!(tokens[3].text, "\"Hello, World\"");
}

#[test]
fn test_string_ends_identifier() {
    let tokens = tokenize("abc\"def\"");

    assert_eq!(tokens[0].text, "ABC");
    assert_eq!(tokens[1].category, TokenCategory::String);
}

// ====================
// Comments
// ====================

#[test]
fn test_nested_block_comment() {
    let source = "#| outer #| inner |# still-outer |#";
    let tokens = tokenize(source);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].category, TokenCategory::Comment);
    assert_eq!(tokens[0].start, Position::new(0, 0));
    assert_eq!(tokens[0].end, Position::new(0, source.chars().count()));
    assert_eq!(tokens[0].text, " outer #| inner |# still-outer ");
}

#[test]
fn test_block_comment_spanning_lines() {
    let tokens = tokenize("#|\n  doc\n|#(x)");

    assert_eq!(tokens[0].category, TokenCategory::Comment);
    assert_eq!(tokens[0].end, Position::new(2, 2));
    assert_eq!(tokens[1].category, TokenCategory::OpenParen);
    assert_eq!(tokens[1].start, Position::new(2, 2));
}

#[test]
fn test_line_comment_excludes_newline() {
    let tokens = tokenize(";; comment\n");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].category, TokenCategory::Comment);
    assert_eq!(tokens[0].text, ";; comment");
    assert_eq!(tokens[1].category, TokenCategory::Whitespace);
    assert_eq!(tokens[1].text, "\n");
    assert_eq!(tokens[1].end, Position::new(1, 0));
}

#[test]
fn test_line_comment_preserves_case() {
    let tokens = tokenize("(x) ; Mixed Case");

    assert_eq!(tokens.last().unwrap().text, "; Mixed Case");
}

// ====================
// Symbols and packages
// ====================

#[test]
fn test_package_qualified_symbol() {
    let tokens = tokenize("pkg:foo");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].category, TokenCategory::PackageName);
    assert_eq!(tokens[0].text, "PKG");
    assert_eq!(tokens[0].end, Position::new(0, 3));
    assert_eq!(tokens[1].category, TokenCategory::Symbol);
    assert_eq!(tokens[1].text, ":FOO");
    assert_eq!(tokens[1].start, Position::new(0, 3));
}

#[test]
fn test_package_name_not_looked_up() {
    let tokens = tokenize("list:first");

    assert_eq!(tokens[0].category, TokenCategory::PackageName);
    assert_eq!(tokens[0].text, "LIST");
}

#[test]
fn test_bar_escaped_identifier_is_folded() {
    let tokens = tokenize("|MixedCase|");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].category, TokenCategory::Identifier);
    assert_eq!(tokens[0].text, "MIXEDCASE");
    assert_eq!(tokens[0].end, Position::new(0, 11));
}

#[test]
fn test_bar_escaped_identifier_keeps_case_when_configured() {
    let options = LexerOptions::from_json(r#"{"fold_escaped_identifiers": false}"#).unwrap();
    let tokens = Lexer::with_options("|MixedCase|", KeywordTable::standard(), options).get_tokens();

    assert_eq!(tokens[0].text, "MixedCase");
}

#[test]
fn test_bar_escaped_identifier_is_not_classified() {
    let tokens = tokenize("|defun|");

    assert_eq!(tokens[0].category, TokenCategory::Identifier);
    assert_eq!(tokens[0].text, "DEFUN");
}

// ====================
// Reader macros
// ====================

#[test]
fn test_pound_sequences() {
    let tokens = tokenize("#'car #+sbcl #x1F #\\a #\\)");
    let pounds: Vec<&str> = tokens
        .iter()
        .filter(|t| t.category == TokenCategory::PoundSequence)
        .map(|t| t.text.as_str())
        .collect();

    assert_eq!(pounds, vec!["#'car", "#+sbcl", "#x1F", "#\\a", "#\\)"]);
}

#[test]
fn test_vector_literal() {
    let tokens = tokenize("#(1 2)");

    assert_eq!(tokens[0].text, "#");
    assert_eq!(tokens[1].category, TokenCategory::OpenParen);
}

// ====================
// Malformed input
// ====================

#[test]
fn test_check_balanced_reports_first_problem() {
    let tokens = tokenize("(ok)\n|bad\n\"worse");

    assert_eq!(tokens.iter().filter(|t| t.is_malformed()).count(), 2);
    assert_eq!(
        check_balanced(&tokens),
        Err(Error::syntax(2, 1, "unterminated escaped symbol"))
    );
}

#[test]
fn test_unbalanced_block_comment() {
    let tokens = tokenize("(x) #| never closed");

    let last = tokens.last().unwrap();
    assert_eq!(last.category, TokenCategory::MismatchedComment);
    assert_eq!(last.text, " never closed");
}

// ====================
// Scanner protocol
// ====================

#[test]
fn test_rescan_is_identical() {
    let source = "(defmacro m (&body b) `(progn ,@b)) ; ok";

    assert_eq!(Lexer::new(source).get_tokens(), Lexer::new(source).get_tokens());
}

#[test]
fn test_iterator_matches_get_tokens() {
    let source = "(a b)";
    let from_iter: Vec<Token> = Lexer::new(source).collect();

    assert_eq!(from_iter, tokenize(source));
}

#[test]
fn test_token_serializes_to_json() {
    let token = &tokenize("car")[0];
    let json = serde_json::to_value(token).unwrap();

    assert_eq!(json["category"], "KEYWORD");
    assert_eq!(json["text"], "CAR");
    assert_eq!(json["end"]["column"], 3);
}
