//! FHG007: the closing bracket of a multi-line assignment.

use hang_diagnostic::{DiagnosticQueue, RuleCode};
use hang_ir::Stmt;

use super::RuleContext;

/// The statement must end at its first line's indentation plus one column
/// per bracket that first line leaves open, so `x = foo({` closes as `})`
/// at the indentation of `x`.
///
/// Only bracketed right-hand sides are checked: a statement whose first line
/// leaves nothing open spans several lines through a multi-line string or a
/// backslash continuation.
pub(super) fn check(ctx: &RuleContext<'_, '_>, stmt: &Stmt, queue: &mut DiagnosticQueue) {
    if stmt.span.is_single_line() {
        return;
    }
    let first_line = stmt.span.start.line;
    let left_open = ctx.brackets.left_open_on(first_line);
    if left_open == 0 {
        return;
    }
    let expected = ctx.brackets.line_indent().column(first_line) + left_open;
    if stmt.span.end.column != expected {
        queue.record(stmt.span.end, RuleCode::FHG007);
    }
}
