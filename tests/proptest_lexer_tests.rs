//! Property-based tests for the scanner
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. Every character of the input is covered by exactly one token span
//! 2. Token spans are contiguous and ordered
//! 3. Token text matches its span (modulo case folding and dropped delimiters)
//! 4. Re-scanning the same text yields the same tokens

use cl_lexer::{Lexer, Position, Token, TokenCategory};
use proptest::prelude::*;
use std::collections::HashMap;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Random text over characters that exercise every scanner mode
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r##"[a-zA-Zéß0-9 \t\n\x{85}\x{3000}\x{feff}()'`"#|;:\\-]{0,200}"##)
        .unwrap()
}

/// Lisp-looking text assembled from plausible tokens
fn lisp_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(lisp_fragment(), 0..40).prop_map(|parts| parts.concat())
}

fn lisp_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just("'".to_string()),
        Just("`".to_string()),
        Just("defun".to_string()),
        Just("let*".to_string()),
        Just("in-package".to_string()),
        Just("#'car".to_string()),
        Just("#|".to_string()),
        Just("|#".to_string()),
        Just("#\\".to_string()),
        "[a-z][a-z0-9-]{0,8}".prop_map(|s| s),
        "[a-z]{2,6}:{1,2}[a-z]{1,6}".prop_map(|s| s),
        ":[a-z]{1,6}".prop_map(|s| s),
        r#""[a-zA-Z ]{0,10}"?"#.prop_map(|s| s),
        r"\|[a-zA-Z ]{0,6}\|?".prop_map(|s| s),
        ";[^\n]{0,20}".prop_map(|s| s),
    ]
}

// =============================================================================
// HELPERS
// =============================================================================

/// Map each cursor position reached while consuming `chars` to its offset
fn offsets(chars: &[char]) -> HashMap<Position, usize> {
    let mut map = HashMap::new();
    let mut pos = Position::default();
    map.insert(pos, 0);
    for (i, c) in chars.iter().enumerate() {
        pos = pos.advance(*c);
        map.insert(pos, i + 1);
    }
    map
}

fn span(chars: &[char], offsets: &HashMap<Position, usize>, token: &Token) -> String {
    let start = offsets[&token.start];
    let end = offsets[&token.end];
    chars[start..end].iter().collect()
}

/// Check that a token's text is what its span implies
fn assert_text_matches_span(token: &Token, span: &str) {
    match token.category {
        TokenCategory::Comment if span.starts_with("#|") => {
            assert_eq!(span, format!("#|{}|#", token.text));
        }
        TokenCategory::MismatchedComment => {
            assert_eq!(span, format!("#|{}", token.text));
        }
        TokenCategory::MismatchedBar => {
            assert_eq!(span, format!("|{}", token.text));
        }
        TokenCategory::Identifier if span.starts_with('|') => {
            let inner: String = span.chars().skip(1).take(span.chars().count() - 2).collect();
            assert_eq!(token.text, inner.to_uppercase());
        }
        category if category.is_case_folded() => {
            assert_eq!(token.text, span.to_uppercase());
        }
        _ => assert_eq!(token.text, span),
    }
}

fn check_stream(source: &str) {
    let chars: Vec<char> = source.chars().collect();
    let offsets = offsets(&chars);
    let end = chars
        .iter()
        .fold(Position::default(), |pos, c| pos.advance(*c));
    let tokens = Lexer::new(source).get_tokens();

    let mut cursor = Position::default();
    for token in &tokens {
        assert_eq!(token.start, cursor, "gap before {:?}", token);
        assert!(token.start < token.end, "empty span {:?}", token);
        assert_text_matches_span(token, &span(&chars, &offsets, token));
        cursor = token.end;
    }
    assert_eq!(cursor, end);
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_tokens_cover_random_text(source in arbitrary_source_string()) {
        check_stream(&source);
    }

    #[test]
    fn prop_tokens_cover_lisp_like_text(source in lisp_like_string()) {
        check_stream(&source);
    }

    #[test]
    fn prop_rescan_is_identical(source in arbitrary_source_string()) {
        let first = Lexer::new(&source).get_tokens();
        let second = Lexer::new(&source).get_tokens();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_symbol_like_text_is_upper_case(source in lisp_like_string()) {
        for token in Lexer::new(&source).get_tokens() {
            if token.category.is_case_folded() {
                prop_assert_eq!(token.text.to_uppercase(), token.text.clone());
            }
        }
    }

    #[test]
    fn prop_strings_are_closed(source in arbitrary_source_string()) {
        for token in Lexer::new(&source).get_tokens() {
            if token.category == TokenCategory::String {
                prop_assert!(token.text.len() >= 2 && token.text.ends_with('"'));
            }
        }
    }
}
