//! Hanging-indent rules.
//!
//! [`RuleVisitor`] walks the whole tree once and hands each construct to its
//! rule family:
//! - calls: FHG002, FHG003, FHG005, FHG006
//! - definitions (`def` and `async def`): FHG001, FHG004
//! - assignments (plain, annotated, augmented): FHG007
//!
//! Rules are stateless per node. Everything they report goes through the
//! [`DiagnosticQueue`], which keeps the first diagnostic at each position.

mod assignments;
mod calls;
mod definitions;

use hang_diagnostic::DiagnosticQueue;
use hang_ir::visitor::{walk_call, walk_function_def, walk_stmt};
use hang_ir::{Call, Expr, FunctionDef, Stmt, SyntaxArena, Visitor};

use crate::brackets::BracketIndex;

/// Shared inputs of every rule.
pub(crate) struct RuleContext<'a, 't> {
    pub arena: &'a SyntaxArena,
    pub brackets: &'a BracketIndex<'t>,
    /// Never zero.
    pub indent_width: u32,
}

pub(crate) struct RuleVisitor<'a, 't> {
    brackets: &'a BracketIndex<'t>,
    indent_width: u32,
    queue: DiagnosticQueue,
}

impl<'a, 't> RuleVisitor<'a, 't> {
    pub(crate) fn new(brackets: &'a BracketIndex<'t>, indent_width: u32) -> Self {
        RuleVisitor {
            brackets,
            indent_width: indent_width.max(1),
            queue: DiagnosticQueue::new(),
        }
    }

    pub(crate) fn into_queue(self) -> DiagnosticQueue {
        self.queue
    }

    fn context<'b>(&self, arena: &'b SyntaxArena) -> RuleContext<'b, 't>
    where
        'a: 'b,
    {
        RuleContext {
            arena,
            brackets: self.brackets,
            indent_width: self.indent_width,
        }
    }
}

impl<'ast> Visitor<'ast> for RuleVisitor<'_, '_> {
    fn visit_stmt(&mut self, stmt: &'ast Stmt, arena: &'ast SyntaxArena) {
        if stmt.kind.is_assignment() {
            assignments::check(&self.context(arena), stmt, &mut self.queue);
        }
        walk_stmt(self, stmt, arena);
    }

    fn visit_function_def(
        &mut self,
        stmt: &'ast Stmt,
        def: &'ast FunctionDef,
        arena: &'ast SyntaxArena,
    ) {
        definitions::check(stmt, def, self.indent_width, &mut self.queue);
        walk_function_def(self, stmt, def, arena);
    }

    fn visit_call(&mut self, expr: &'ast Expr, call: &'ast Call, arena: &'ast SyntaxArena) {
        calls::check(&self.context(arena), expr, call, &mut self.queue);
        walk_call(self, expr, call, arena);
    }
}

/// Whether `column` is off the indentation grid.
#[inline]
fn off_grid(column: i64, indent_width: u32) -> bool {
    column % i64::from(indent_width) != 0
}
