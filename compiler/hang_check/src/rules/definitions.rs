//! Definition rules, identical for `def` and `async def`.

use hang_diagnostic::{DiagnosticQueue, RuleCode};
use hang_ir::{FunctionDef, Stmt};

/// FHG001 for every parameter that starts a new line anywhere but one
/// indent step past the definition; FHG004 at the first parameter when it
/// stays on the definition line while later ones wrap.
pub(super) fn check(
    stmt: &Stmt,
    def: &FunctionDef,
    indent_width: u32,
    queue: &mut DiagnosticQueue,
) {
    let def_start = stmt.span.start;
    let expected_column = def_start.column + indent_width;
    let mut current_line = def_start.line;
    let mut wrapped = false;

    for param in &def.params {
        let start = param.span.start;
        if start.line == current_line {
            continue;
        }
        if start.column != expected_column {
            queue.record(start, RuleCode::FHG001);
        }
        current_line = start.line;
        wrapped = true;
    }

    if let Some(first) = def.params.first() {
        if wrapped && first.span.start.line == def_start.line {
            queue.record(first.span.start, RuleCode::FHG004);
        }
    }
}
