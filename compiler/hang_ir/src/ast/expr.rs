//! Expression nodes.

use super::{BinaryOp, BoolOp, CmpOp, ExprId, Param, UnaryOp};
use crate::{Span, Spanned};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Literal constants.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Constant {
    None,
    True,
    False,
    Ellipsis,
    /// Numeric literal as written.
    Number(Box<str>),
    /// String or bytes literal. `value` is the literal's content without
    /// prefix and quotes; implicitly concatenated pieces are joined.
    Str { value: Box<str>, is_bytes: bool },
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExprKind {
    Name(Box<str>),
    Constant(Constant),
    /// Formatted string literal, alone or concatenated with plain strings.
    FormattedString,

    Attribute {
        value: ExprId,
        attr: Box<str>,
    },
    Subscript {
        value: ExprId,
        slice: ExprId,
    },
    Slice {
        lower: Option<ExprId>,
        upper: Option<ExprId>,
        step: Option<ExprId>,
    },
    Call(Call),

    BinOp {
        left: ExprId,
        op: BinaryOp,
        right: ExprId,
    },
    UnaryOp {
        op: UnaryOp,
        operand: ExprId,
    },
    BoolOp {
        op: BoolOp,
        values: Vec<ExprId>,
    },
    Compare {
        left: ExprId,
        ops: Vec<CmpOp>,
        comparators: Vec<ExprId>,
    },
    IfExp {
        test: ExprId,
        body: ExprId,
        orelse: ExprId,
    },
    Lambda {
        params: Vec<Param>,
        body: ExprId,
    },
    /// `target := value`
    NamedExpr {
        target: ExprId,
        value: ExprId,
    },
    Await(ExprId),
    Yield(Option<ExprId>),
    YieldFrom(ExprId),
    Starred(ExprId),

    Tuple(Vec<ExprId>),
    List(Vec<ExprId>),
    Set(Vec<ExprId>),
    Dict(Vec<DictEntry>),
    Comprehension(Comprehension),
}

/// A call `func(args..., keywords...)`.
///
/// Positional arguments (including `*iterable`) and keyword arguments
/// (including `**mapping`) are kept in two separate ordered lists.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Call {
    pub func: ExprId,
    pub args: Vec<ExprId>,
    pub keywords: Vec<Keyword>,
}

/// `name=value`, or `**value` when `name` is `None`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Keyword {
    pub name: Option<Box<str>>,
    pub value: ExprId,
    pub span: Span,
}

impl Spanned for Keyword {
    fn span(&self) -> Span {
        self.span
    }
}

/// Dict display entry. `key` is `None` for `**mapping` unpacking.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DictEntry {
    pub key: Option<ExprId>,
    pub value: ExprId,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ComprehensionKind {
    List,
    Set,
    Dict,
    Generator,
}

/// List/set/dict comprehension or generator expression.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Comprehension {
    pub kind: ComprehensionKind,
    /// The element expression; the key for dict comprehensions.
    pub element: ExprId,
    /// Value expression of a dict comprehension.
    pub value: Option<ExprId>,
    pub generators: Vec<ComprehensionClause>,
}

/// One `for target in iter if cond...` clause.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ComprehensionClause {
    pub target: ExprId,
    pub iter: ExprId,
    pub ifs: Vec<ExprId>,
    pub is_async: bool,
}
