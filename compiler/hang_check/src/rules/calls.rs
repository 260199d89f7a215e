//! Call rules: wrapped arguments and the closing bracket.

use tracing::trace;

use hang_diagnostic::{DiagnosticQueue, RuleCode};
use hang_ir::{Call, Expr, SourcePosition};

use super::{off_grid, RuleContext};
use crate::extent::{self, Extent};
use crate::qualified_name;

pub(super) fn check(
    ctx: &RuleContext<'_, '_>,
    expr: &Expr,
    call: &Call,
    queue: &mut DiagnosticQueue,
) {
    let mut scan = ArgumentScan::new(expr);

    for &arg in &call.args {
        let extent = extent::argument(ctx.arena, arg);
        if scan.starts_next_line(&extent) && scan.misplaced(ctx, call, &extent, true) {
            queue.record(extent.position(), RuleCode::FHG002);
        }
        scan.advance(&extent);
    }

    for keyword in &call.keywords {
        let extent = extent::keyword(ctx.arena, keyword);
        // `**mapping` has no name, so its column is never on the grid.
        let grid = keyword.name.is_some();
        if scan.starts_next_line(&extent) && scan.misplaced(ctx, call, &extent, grid) {
            queue.record(extent.position(), RuleCode::FHG003);
        }
        scan.advance(&extent);
    }

    if scan.wrapped {
        check_close_bracket(ctx, expr, &scan, queue);
    }
}

/// State carried across one call's arguments, in source order.
struct ArgumentScan {
    call_line: u32,
    call_column: u32,
    /// End line of the previous argument; the call's own line at first.
    prior_end: u32,
    /// Furthest end line among arguments not starting on the call line.
    last_inner: Option<u32>,
    /// Some argument ends after the call line.
    wrapped: bool,
    name_bound: Option<i64>,
}

impl ArgumentScan {
    fn new(expr: &Expr) -> Self {
        ArgumentScan {
            call_line: expr.span.start.line,
            call_column: expr.span.start.column,
            prior_end: expr.span.start.line,
            last_inner: None,
            wrapped: false,
            name_bound: None,
        }
    }

    /// The argument starts on the line right after the previous fragment.
    fn starts_next_line(&self, extent: &Extent) -> bool {
        extent.line == self.prior_end + 1
    }

    /// Past the call's name, or off the indentation grid when `grid` holds.
    fn misplaced(
        &mut self,
        ctx: &RuleContext<'_, '_>,
        call: &Call,
        extent: &Extent,
        grid: bool,
    ) -> bool {
        let bound = self.name_bound(ctx, call);
        extent.column > bound || (grid && off_grid(extent.column, ctx.indent_width))
    }

    /// Rightmost column a wrapped argument may start at: the call's column
    /// plus its name length, and at least one indent step.
    fn name_bound(&mut self, ctx: &RuleContext<'_, '_>, call: &Call) -> i64 {
        let call_column = i64::from(self.call_column);
        *self.name_bound.get_or_insert_with(|| {
            let name_len = qualified_name::length(ctx.arena, call.func);
            let reach = u32::try_from(name_len)
                .unwrap_or(u32::MAX)
                .max(ctx.indent_width);
            call_column + i64::from(reach)
        })
    }

    fn advance(&mut self, extent: &Extent) {
        self.prior_end = extent.end_line;
        if extent.end_line > self.call_line {
            self.wrapped = true;
        }
        if extent.line != self.call_line {
            self.last_inner = Some(self.last_inner.map_or(extent.end_line, |line| {
                line.max(extent.end_line)
            }));
        }
    }
}

/// FHG005 when the closing bracket trails the last wrapped argument,
/// otherwise FHG006 when it is not at the opening line's indentation.
///
/// Brackets opened on the opening line and closed just before this one on
/// its line (`)})`) each shift the expected column by one.
fn check_close_bracket(
    ctx: &RuleContext<'_, '_>,
    expr: &Expr,
    scan: &ArgumentScan,
    queue: &mut DiagnosticQueue,
) {
    let end = expr.span.end;
    let close = SourcePosition::new(end.line, end.column.saturating_sub(1));

    if scan.last_inner == Some(close.line) {
        queue.record(close, RuleCode::FHG005);
        return;
    }

    let Some(pair) = ctx.brackets.pair_closed_at(close) else {
        trace!(%close, "call does not end at a closing bracket");
        return;
    };
    let open_line = pair.open.line();
    let expected = ctx.brackets.line_indent().column(open_line)
        + ctx.brackets.closed_before(&pair.close, open_line);
    if close.column != expected {
        queue.record(close, RuleCode::FHG006);
    }
}
