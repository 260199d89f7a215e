#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use hang_ir::{BracketFamily, SourcePosition, TokenList};
use pretty_assertions::assert_eq;

use super::BracketIndex;
use crate::InputContractError;

fn lex(source: &str) -> TokenList {
    hang_lexer::lex(source).unwrap()
}

fn pos(line: u32, column: u32) -> SourcePosition {
    SourcePosition::new(line, column)
}

/// `(family, open, close)` for every pair, in closing order.
fn pair_positions(
    index: &BracketIndex<'_>,
) -> Vec<(BracketFamily, SourcePosition, SourcePosition)> {
    index
        .pairs()
        .iter()
        .map(|p| (p.family(), p.open.position(), p.close.position()))
        .collect()
}

#[test]
fn test_pairs_nested_families() {
    let tokens = lex("x = f([1, {2: (3)}])\n");
    let index = BracketIndex::resolve(&tokens).unwrap();
    assert_eq!(
        pair_positions(&index),
        vec![
            (BracketFamily::Round, pos(1, 14), pos(1, 16)),
            (BracketFamily::Curly, pos(1, 10), pos(1, 17)),
            (BracketFamily::Square, pos(1, 6), pos(1, 18)),
            (BracketFamily::Round, pos(1, 5), pos(1, 19)),
        ]
    );
}

#[test]
fn test_brackets_in_comments_and_strings_are_ignored() {
    let tokens = lex("f((  # ((\n    ')]}',\n))\n");
    let index = BracketIndex::resolve(&tokens).unwrap();
    assert_eq!(index.pairs().len(), 2);
}

#[test]
fn test_line_indent_skips_layout_markers() {
    let tokens = lex("if a:\n    b = [\n        1,\n    ]\nc = 2\n");
    let index = BracketIndex::resolve(&tokens).unwrap();
    let indent = index.line_indent();
    assert_eq!(indent.get(1), Some(0));
    assert_eq!(indent.get(2), Some(4));
    assert_eq!(indent.get(3), Some(8));
    assert_eq!(indent.get(4), Some(4));
    // `c` follows a dedent marker at the same position.
    assert_eq!(indent.get(5), Some(0));
}

#[test]
fn test_line_indent_counts_comments() {
    let tokens = lex("x = [\n  # note\n    1,\n]\n");
    let index = BracketIndex::resolve(&tokens).unwrap();
    assert_eq!(index.line_indent().get(2), Some(2));
}

#[test]
fn test_line_indent_inside_multiline_string() {
    let tokens = lex("x = '''\n    body\n'''\n");
    let index = BracketIndex::resolve(&tokens).unwrap();
    assert_eq!(index.line_indent().get(2), None);
    assert_eq!(index.line_indent().column(2), 0);
}

#[test]
fn test_pair_closed_at() {
    let tokens = lex("foo(\n    a,\n)\n");
    let index = BracketIndex::resolve(&tokens).unwrap();
    let pair = index.pair_closed_at(pos(3, 0)).unwrap();
    assert_eq!(pair.open.position(), pos(1, 3));
    assert!(pair.is_multiline());
    assert!(index.pair_closed_at(pos(1, 3)).is_none());
}

#[test]
fn test_left_open_on() {
    let tokens = lex("x = f({(\n    1\n)}, [2])\n");
    let index = BracketIndex::resolve(&tokens).unwrap();
    assert_eq!(index.left_open_on(1), 3);
    assert_eq!(index.left_open_on(3), 0);
}

#[test]
fn test_closed_before_counts_same_line_openers() {
    let tokens = lex("f({(\n    1\n)})\n");
    let index = BracketIndex::resolve(&tokens).unwrap();
    let call = index.pair_closed_at(pos(3, 2)).unwrap();
    assert_eq!(index.closed_before(&call.close, call.open.line()), 2);

    let tuple = index.pair_closed_at(pos(3, 0)).unwrap();
    assert_eq!(index.closed_before(&tuple.close, tuple.open.line()), 0);
}

#[test]
fn test_closed_before_ignores_other_open_lines() {
    let tokens = lex("f(\n    [1,\n    2])\n");
    let index = BracketIndex::resolve(&tokens).unwrap();
    let call = index.pair_closed_at(pos(3, 6)).unwrap();
    assert_eq!(index.closed_before(&call.close, call.open.line()), 0);
}

#[test]
fn test_unmatched_close_is_fatal() {
    let tokens = lex("x = 1)\n");
    assert_eq!(
        BracketIndex::resolve(&tokens).unwrap_err(),
        InputContractError::UnmatchedClose {
            bracket: ')',
            position: pos(1, 5),
        }
    );
}

#[test]
fn test_family_mismatch_is_fatal() {
    let tokens = lex("x = (]\n");
    let err = BracketIndex::resolve(&tokens).unwrap_err();
    assert_eq!(
        err,
        InputContractError::UnmatchedClose {
            bracket: ']',
            position: pos(1, 5),
        }
    );
}

#[test]
fn test_unclosed_open_is_fatal() {
    let tokens = lex("x = [(\n");
    assert_eq!(
        BracketIndex::resolve(&tokens).unwrap_err(),
        InputContractError::UnclosedOpen {
            bracket: '[',
            position: pos(1, 4),
        }
    );
}
