//! Statement nodes.

use super::{BinaryOp, ExprId, Keyword, StmtId};
use crate::{Span, Spanned};

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum StmtKind {
    Expr(ExprId),
    /// `a = b = value`
    Assign {
        targets: Vec<ExprId>,
        value: ExprId,
    },
    /// `target: annotation [= value]`
    AnnAssign {
        target: ExprId,
        annotation: ExprId,
        value: Option<ExprId>,
    },
    /// `target op= value`
    AugAssign {
        target: ExprId,
        op: BinaryOp,
        value: ExprId,
    },

    FunctionDef(FunctionDef),
    ClassDef(ClassDef),

    Return(Option<ExprId>),
    Delete(Vec<ExprId>),
    Pass,
    Break,
    Continue,
    Global(Vec<Box<str>>),
    Nonlocal(Vec<Box<str>>),
    Raise {
        exc: Option<ExprId>,
        cause: Option<ExprId>,
    },
    Assert {
        test: ExprId,
        msg: Option<ExprId>,
    },
    Import(Vec<Alias>),
    ImportFrom {
        module: Option<Box<str>>,
        /// Number of leading dots.
        level: u32,
        names: Vec<Alias>,
    },

    /// `elif` chains nest as a single `If` in `orelse`.
    If {
        test: ExprId,
        body: Vec<StmtId>,
        orelse: Vec<StmtId>,
    },
    While {
        test: ExprId,
        body: Vec<StmtId>,
        orelse: Vec<StmtId>,
    },
    For {
        is_async: bool,
        target: ExprId,
        iter: ExprId,
        body: Vec<StmtId>,
        orelse: Vec<StmtId>,
    },
    With {
        is_async: bool,
        items: Vec<WithItem>,
        body: Vec<StmtId>,
    },
    Try {
        body: Vec<StmtId>,
        handlers: Vec<ExceptHandler>,
        orelse: Vec<StmtId>,
        finalbody: Vec<StmtId>,
    },
}

impl StmtKind {
    /// Whether this is one of the three assignment forms.
    #[inline]
    pub fn is_assignment(&self) -> bool {
        matches!(
            self,
            StmtKind::Assign { .. } | StmtKind::AnnAssign { .. } | StmtKind::AugAssign { .. }
        )
    }
}

/// `def` / `async def`.
///
/// The owning statement's span starts at `def` (or `async`), never at a
/// decorator.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionDef {
    pub name: Box<str>,
    pub is_async: bool,
    pub decorators: Vec<ExprId>,
    /// Parameters in declaration order.
    pub params: Vec<Param>,
    pub returns: Option<ExprId>,
    pub body: Vec<StmtId>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ClassDef {
    pub name: Box<str>,
    pub decorators: Vec<ExprId>,
    pub bases: Vec<ExprId>,
    pub keywords: Vec<Keyword>,
    pub body: Vec<StmtId>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParamKind {
    /// Declared before a `/` marker.
    PositionalOnly,
    Positional,
    /// `*args`
    VarPositional,
    /// Declared after `*` or `*args`.
    KeywordOnly,
    /// `**kwargs`
    VarKeyword,
}

/// A function or lambda parameter.
///
/// The span of a star parameter starts at its `*`/`**`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Param {
    pub name: Box<str>,
    pub kind: ParamKind,
    pub annotation: Option<ExprId>,
    pub default: Option<ExprId>,
    pub span: Span,
}

impl Spanned for Param {
    fn span(&self) -> Span {
        self.span
    }
}

/// `import name [as asname]`
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Alias {
    pub name: Box<str>,
    pub asname: Option<Box<str>>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct WithItem {
    pub context: ExprId,
    pub target: Option<ExprId>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ExceptHandler {
    pub kind: Option<ExprId>,
    pub name: Option<Box<str>>,
    pub body: Vec<StmtId>,
    pub span: Span,
}
