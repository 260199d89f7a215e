use hang_ir::{Call, ExprKind, StmtKind, SyntaxTree};
use pretty_assertions::assert_eq;

use super::{argument, keyword, Extent};
use crate::test_support::parse_source;

/// The call that is the value of the first statement.
fn call_of(tree: &SyntaxTree) -> &Call {
    let stmt = tree.arena.stmt(tree.body[0]);
    let value = match &stmt.kind {
        StmtKind::Expr(value) | StmtKind::Assign { value, .. } => *value,
        other => panic!("expected expression statement, got {other:?}"),
    };
    match &tree.arena.expr(value).kind {
        ExprKind::Call(call) => call,
        other => panic!("expected call, got {other:?}"),
    }
}

#[test]
fn test_plain_argument() {
    let tree = parse_source("f(\n    a + [\n        1,\n    ],\n)\n");
    let call = call_of(&tree);
    assert_eq!(
        argument(&tree.arena, call.args[0]),
        Extent {
            line: 2,
            column: 4,
            end_line: 4,
        }
    );
}

#[test]
fn test_keyword_column_is_name_column() {
    let tree = parse_source("f(\n    value=1,\n    **rest,\n)\n");
    let call = call_of(&tree);
    let named = keyword(&tree.arena, &call.keywords[0]);
    assert_eq!((named.line, named.column, named.end_line), (2, 4, 2));
    // `**rest`: value at column 6, minus the missing name and one.
    let unpacked = keyword(&tree.arena, &call.keywords[1]);
    assert_eq!(unpacked.column, 5);
}

#[test]
fn test_keyword_with_spaces_around_equals() {
    let tree = parse_source("f(\n    value = 1,\n)\n");
    let call = call_of(&tree);
    assert_eq!(keyword(&tree.arena, &call.keywords[0]).column, 6);
}

#[test]
fn test_keyword_column_can_be_negative() {
    let tree = parse_source("f(long_name=(\n  1),\n)\n");
    let call = call_of(&tree);
    let extent = keyword(&tree.arena, &call.keywords[0]);
    assert_eq!((extent.line, extent.column), (2, -8));
    assert_eq!(extent.report_column(), 0);
}

#[test]
fn test_keyword_end_line_is_value_end_line() {
    let tree = parse_source("f(key=[\n    1,\n])\n");
    let call = call_of(&tree);
    assert_eq!(keyword(&tree.arena, &call.keywords[0]).end_line, 3);
}

#[test]
fn test_generator_reports_element() {
    let tree = parse_source("x = join(\n    part[:n]\n    for part in\n    values\n)\n");
    let call = call_of(&tree);
    assert_eq!(
        argument(&tree.arena, call.args[0]),
        Extent {
            line: 2,
            column: 4,
            end_line: 4,
        }
    );
}

#[test]
fn test_generator_end_ignores_conditions() {
    let tree = parse_source("f(\n    x for x in y\n    if x\n)\n");
    let call = call_of(&tree);
    assert_eq!(argument(&tree.arena, call.args[0]).end_line, 2);
}
