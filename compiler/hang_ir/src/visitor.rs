//! Syntax tree visitor.
//!
//! Default `visit_*` methods call the matching `walk_*` function, which visits
//! children depth-first in source order. Override a `visit_*` method to act on
//! a node and call the `walk_*` function to keep descending.
//!
//! ```text
//! struct CountCalls(usize);
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_call(&mut self, expr: &'ast Expr, call: &'ast Call, arena: &'ast SyntaxArena) {
//!         self.0 += 1;
//!         walk_call(self, expr, call, arena);
//!     }
//! }
//! ```

use crate::ast::{
    Call, Comprehension, ComprehensionClause, ExceptHandler, Expr, ExprId, ExprKind, FunctionDef,
    Keyword, Param, Stmt, StmtId, StmtKind, SyntaxArena, SyntaxTree,
};
use crate::stack::with_stack_room;

pub trait Visitor<'ast> {
    fn visit_tree(&mut self, tree: &'ast SyntaxTree) {
        walk_tree(self, tree);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt, arena: &'ast SyntaxArena) {
        walk_stmt(self, stmt, arena);
    }

    fn visit_stmt_id(&mut self, id: StmtId, arena: &'ast SyntaxArena) {
        self.visit_stmt(arena.stmt(id), arena);
    }

    /// `stmt` is the statement owning `def`; its span is the definition's.
    fn visit_function_def(
        &mut self,
        stmt: &'ast Stmt,
        def: &'ast FunctionDef,
        arena: &'ast SyntaxArena,
    ) {
        walk_function_def(self, stmt, def, arena);
    }

    fn visit_param(&mut self, param: &'ast Param, arena: &'ast SyntaxArena) {
        walk_param(self, param, arena);
    }

    fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast SyntaxArena) {
        walk_expr(self, expr, arena);
    }

    fn visit_expr_id(&mut self, id: ExprId, arena: &'ast SyntaxArena) {
        self.visit_expr(arena.expr(id), arena);
    }

    /// `expr` is the call expression itself; its span ends after `)`.
    fn visit_call(&mut self, expr: &'ast Expr, call: &'ast Call, arena: &'ast SyntaxArena) {
        walk_call(self, expr, call, arena);
    }

    fn visit_keyword(&mut self, keyword: &'ast Keyword, arena: &'ast SyntaxArena) {
        self.visit_expr_id(keyword.value, arena);
    }

    fn visit_comprehension(&mut self, comp: &'ast Comprehension, arena: &'ast SyntaxArena) {
        walk_comprehension(self, comp, arena);
    }
}

pub fn walk_tree<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, tree: &'ast SyntaxTree) {
    walk_body(visitor, &tree.body, &tree.arena);
}

fn walk_body<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    body: &[StmtId],
    arena: &'ast SyntaxArena,
) {
    for &id in body {
        visitor.visit_stmt_id(id, arena);
    }
}

fn walk_exprs<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    exprs: &[ExprId],
    arena: &'ast SyntaxArena,
) {
    for &id in exprs {
        visitor.visit_expr_id(id, arena);
    }
}

fn walk_opt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    expr: Option<ExprId>,
    arena: &'ast SyntaxArena,
) {
    if let Some(id) = expr {
        visitor.visit_expr_id(id, arena);
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    stmt: &'ast Stmt,
    arena: &'ast SyntaxArena,
) {
    with_stack_room(|| match &stmt.kind {
        StmtKind::Expr(value) => visitor.visit_expr_id(*value, arena),
        StmtKind::Assign { targets, value } => {
            walk_exprs(visitor, targets, arena);
            visitor.visit_expr_id(*value, arena);
        }
        StmtKind::AnnAssign {
            target,
            annotation,
            value,
        } => {
            visitor.visit_expr_id(*target, arena);
            visitor.visit_expr_id(*annotation, arena);
            walk_opt(visitor, *value, arena);
        }
        StmtKind::AugAssign { target, value, .. } => {
            visitor.visit_expr_id(*target, arena);
            visitor.visit_expr_id(*value, arena);
        }
        StmtKind::FunctionDef(def) => visitor.visit_function_def(stmt, def, arena),
        StmtKind::ClassDef(class) => {
            walk_exprs(visitor, &class.decorators, arena);
            walk_exprs(visitor, &class.bases, arena);
            for keyword in &class.keywords {
                visitor.visit_keyword(keyword, arena);
            }
            walk_body(visitor, &class.body, arena);
        }
        StmtKind::Return(value) => walk_opt(visitor, *value, arena),
        StmtKind::Delete(targets) => walk_exprs(visitor, targets, arena),
        StmtKind::Raise { exc, cause } => {
            walk_opt(visitor, *exc, arena);
            walk_opt(visitor, *cause, arena);
        }
        StmtKind::Assert { test, msg } => {
            visitor.visit_expr_id(*test, arena);
            walk_opt(visitor, *msg, arena);
        }
        StmtKind::If { test, body, orelse } | StmtKind::While { test, body, orelse } => {
            visitor.visit_expr_id(*test, arena);
            walk_body(visitor, body, arena);
            walk_body(visitor, orelse, arena);
        }
        StmtKind::For {
            target,
            iter,
            body,
            orelse,
            ..
        } => {
            visitor.visit_expr_id(*target, arena);
            visitor.visit_expr_id(*iter, arena);
            walk_body(visitor, body, arena);
            walk_body(visitor, orelse, arena);
        }
        StmtKind::With { items, body, .. } => {
            for item in items {
                visitor.visit_expr_id(item.context, arena);
                walk_opt(visitor, item.target, arena);
            }
            walk_body(visitor, body, arena);
        }
        StmtKind::Try {
            body,
            handlers,
            orelse,
            finalbody,
        } => {
            walk_body(visitor, body, arena);
            for ExceptHandler { kind, body, .. } in handlers {
                walk_opt(visitor, *kind, arena);
                walk_body(visitor, body, arena);
            }
            walk_body(visitor, orelse, arena);
            walk_body(visitor, finalbody, arena);
        }
        StmtKind::Pass
        | StmtKind::Break
        | StmtKind::Continue
        | StmtKind::Global(_)
        | StmtKind::Nonlocal(_)
        | StmtKind::Import(_)
        | StmtKind::ImportFrom { .. } => {}
    });
}

pub fn walk_function_def<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    _stmt: &'ast Stmt,
    def: &'ast FunctionDef,
    arena: &'ast SyntaxArena,
) {
    walk_exprs(visitor, &def.decorators, arena);
    for param in &def.params {
        visitor.visit_param(param, arena);
    }
    walk_opt(visitor, def.returns, arena);
    walk_body(visitor, &def.body, arena);
}

pub fn walk_param<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    param: &'ast Param,
    arena: &'ast SyntaxArena,
) {
    walk_opt(visitor, param.annotation, arena);
    walk_opt(visitor, param.default, arena);
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    expr: &'ast Expr,
    arena: &'ast SyntaxArena,
) {
    with_stack_room(|| match &expr.kind {
        ExprKind::Name(_) | ExprKind::Constant(_) | ExprKind::FormattedString => {}
        ExprKind::Attribute { value, .. } => visitor.visit_expr_id(*value, arena),
        ExprKind::Subscript { value, slice } => {
            visitor.visit_expr_id(*value, arena);
            visitor.visit_expr_id(*slice, arena);
        }
        ExprKind::Slice { lower, upper, step } => {
            walk_opt(visitor, *lower, arena);
            walk_opt(visitor, *upper, arena);
            walk_opt(visitor, *step, arena);
        }
        ExprKind::Call(call) => visitor.visit_call(expr, call, arena),
        ExprKind::BinOp { left, right, .. } => {
            visitor.visit_expr_id(*left, arena);
            visitor.visit_expr_id(*right, arena);
        }
        ExprKind::UnaryOp { operand, .. } => visitor.visit_expr_id(*operand, arena),
        ExprKind::BoolOp { values, .. } => walk_exprs(visitor, values, arena),
        ExprKind::Compare {
            left, comparators, ..
        } => {
            visitor.visit_expr_id(*left, arena);
            walk_exprs(visitor, comparators, arena);
        }
        ExprKind::IfExp { test, body, orelse } => {
            // Source order: `body if test else orelse`.
            visitor.visit_expr_id(*body, arena);
            visitor.visit_expr_id(*test, arena);
            visitor.visit_expr_id(*orelse, arena);
        }
        ExprKind::Lambda { params, body } => {
            for param in params {
                visitor.visit_param(param, arena);
            }
            visitor.visit_expr_id(*body, arena);
        }
        ExprKind::NamedExpr { target, value } => {
            visitor.visit_expr_id(*target, arena);
            visitor.visit_expr_id(*value, arena);
        }
        ExprKind::Await(value) | ExprKind::YieldFrom(value) | ExprKind::Starred(value) => {
            visitor.visit_expr_id(*value, arena);
        }
        ExprKind::Yield(value) => walk_opt(visitor, *value, arena),
        ExprKind::Tuple(elts) | ExprKind::List(elts) | ExprKind::Set(elts) => {
            walk_exprs(visitor, elts, arena);
        }
        ExprKind::Dict(entries) => {
            for entry in entries {
                walk_opt(visitor, entry.key, arena);
                visitor.visit_expr_id(entry.value, arena);
            }
        }
        ExprKind::Comprehension(comp) => visitor.visit_comprehension(comp, arena),
    });
}

pub fn walk_call<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    _expr: &'ast Expr,
    call: &'ast Call,
    arena: &'ast SyntaxArena,
) {
    visitor.visit_expr_id(call.func, arena);
    walk_exprs(visitor, &call.args, arena);
    for keyword in &call.keywords {
        visitor.visit_keyword(keyword, arena);
    }
}

pub fn walk_comprehension<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    comp: &'ast Comprehension,
    arena: &'ast SyntaxArena,
) {
    visitor.visit_expr_id(comp.element, arena);
    walk_opt(visitor, comp.value, arena);
    for ComprehensionClause {
        target, iter, ifs, ..
    } in &comp.generators
    {
        visitor.visit_expr_id(*target, arena);
        visitor.visit_expr_id(*iter, arena);
        walk_exprs(visitor, ifs, arena);
    }
}
