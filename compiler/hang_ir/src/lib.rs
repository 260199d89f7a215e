//! Hang IR - shared data model for the hanging-indent checker.
//!
//! - Source positions, spans and byte-offset conversion
//! - Tokens and `TokenList` for lexer output
//! - The arena-allocated syntax tree
//! - A `Visitor` over that tree
//!
//! All types are created per analyzed file and never shared across files.

pub mod ast;
mod position;
mod stack;
mod token;
pub mod visitor;

pub use ast::{
    Alias, BinaryOp, BoolOp, Call, ClassDef, CmpOp, Comprehension, ComprehensionClause,
    ComprehensionKind, Constant, DictEntry, ExceptHandler, Expr, ExprId, ExprKind, FunctionDef,
    Keyword, Param, ParamKind, Stmt, StmtId, StmtKind, SyntaxArena, SyntaxTree, UnaryOp,
    WithItem,
};
pub use position::{LineIndex, SourcePosition, Span, Spanned};
pub use stack::with_stack_room;
pub use token::{BracketFamily, Token, TokenKind, TokenList};
pub use visitor::Visitor;
