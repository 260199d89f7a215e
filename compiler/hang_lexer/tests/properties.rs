//! Property-based tests for the tokenizer.
//!
//! These check invariants that must hold for any input, valid or not.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use hang_ir::TokenKind;
use hang_lexer::lex;
use proptest::prelude::*;

/// Lines built from names, brackets and commas, indented by 0 or 4 spaces.
fn arb_bracket_line() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-z]{1,6}",
        Just("(".to_string()),
        Just(")".to_string()),
        Just("[".to_string()),
        Just("]".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just(", ".to_string()),
        Just(" = ".to_string()),
    ];
    prop::collection::vec(piece, 1..8).prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The lexer never panics; it either tokenizes or reports an error.
    #[test]
    fn lexer_no_panic(input in ".{0,120}") {
        let _ = lex(&input);
    }

    /// Successful output always ends with exactly one `EndMarker`.
    #[test]
    fn lexer_ends_with_end_marker(input in "[ -~\n]{0,80}") {
        if let Ok(tokens) = lex(&input) {
            let markers = tokens.iter().filter(|t| t.kind == TokenKind::EndMarker).count();
            prop_assert_eq!(markers, 1);
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndMarker));
        }
    }

    /// Every bracket character in the source appears as a bracket token, in order.
    #[test]
    fn brackets_preserved(lines in prop::collection::vec(arb_bracket_line(), 1..6)) {
        let source = lines.join("\n") + "\n";
        let tokens = lex(&source).unwrap();
        let from_tokens: String = tokens
            .iter()
            .filter(|t| t.kind.bracket().is_some())
            .map(|t| &*t.text)
            .collect();
        let from_source: String = source.chars().filter(|c| "()[]{}".contains(*c)).collect();
        prop_assert_eq!(from_tokens, from_source);
    }

    /// Token starts never decrease.
    #[test]
    fn positions_are_monotonic(lines in prop::collection::vec(arb_bracket_line(), 1..6)) {
        let source = lines.join("\n");
        let tokens = lex(&source).unwrap();
        for pair in tokens.as_slice().windows(2) {
            prop_assert!(pair[0].span.start <= pair[1].span.start,
                "{:?} after {:?}", pair[1], pair[0]);
        }
    }

    /// Lexing is deterministic.
    #[test]
    fn lexer_deterministic(input in "[ -~\n]{0,60}") {
        prop_assert_eq!(lex(&input), lex(&input));
    }
}

#[test]
fn test_empty_input() {
    let tokens = lex("").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::EndMarker]);
}

#[test]
fn test_crlf_line_endings() {
    let tokens = lex("f(\r\n    a)\r\n").unwrap();
    let a = tokens.iter().find(|t| &*t.text == "a").unwrap();
    assert_eq!((a.span.start.line, a.span.start.column), (2, 4));
}

#[test]
fn test_unicode_columns_count_characters() {
    let tokens = lex("é = f(\n    ünï)\n").unwrap();
    let close = tokens.iter().find(|t| t.kind == TokenKind::RParen).unwrap();
    assert_eq!((close.span.start.line, close.span.start.column), (2, 7));
}
