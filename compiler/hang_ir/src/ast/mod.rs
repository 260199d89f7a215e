//! Arena-allocated syntax tree.
//!
//! Nodes refer to each other through [`ExprId`]/[`StmtId`] indices into a
//! [`SyntaxArena`] rather than through boxes. Ids are only meaningful for the
//! arena that issued them.
//!
//! # Positions
//!
//! Node spans follow the host parser the hanging-indent rules were designed
//! against:
//! - A composite node spans from the first token of its grammar rule to the
//!   last token it consumed, so `(a).b` starts at the `(`.
//! - A parenthesized expression is the inner node with the inner node's
//!   own span; the parentheses belong to nothing.
//! - Tuples and generator expressions written with their own parentheses
//!   include them.

mod expr;
mod operators;
mod stmt;

use std::fmt;

pub use expr::{
    Call, Comprehension, ComprehensionClause, ComprehensionKind, Constant, DictEntry, Expr,
    ExprKind, Keyword,
};
pub use operators::{BinaryOp, BoolOp, CmpOp, UnaryOp};
pub use stmt::{
    Alias, ClassDef, ExceptHandler, FunctionDef, Param, ParamKind, Stmt, StmtKind, WithItem,
};

/// Index of an expression in a [`SyntaxArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Index of a statement in a [`SyntaxArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct StmtId(u32);

impl StmtId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        StmtId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StmtId({})", self.0)
    }
}

/// Storage for all nodes of one syntax tree.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct SyntaxArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
}

impl SyntaxArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId(index_u32(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId(index_u32(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    /// # Panics
    /// Panics if `id` was issued by another arena.
    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// # Panics
    /// Panics if `id` was issued by another arena.
    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Mutable access, used by the parser to fix up spans after the fact.
    #[inline]
    pub fn expr_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}

fn index_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// A parsed file: top-level statements plus the arena holding every node.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct SyntaxTree {
    pub body: Vec<StmtId>,
    pub arena: SyntaxArena,
}

impl SyntaxTree {
    pub fn new(body: Vec<StmtId>, arena: SyntaxArena) -> Self {
        SyntaxTree { body, arena }
    }

    /// Top-level statements in source order.
    pub fn statements(&self) -> impl Iterator<Item = &Stmt> {
        self.body.iter().map(|&id| self.arena.stmt(id))
    }
}
