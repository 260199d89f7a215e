//! Recursive descent parser.
//!
//! Builds the arena-allocated [`SyntaxTree`] from a token stream produced
//! by `hang_lexer`. Node spans follow the conventions documented on
//! [`hang_ir::ast`]: a composite node spans from the first token its rule
//! consumed to the last, and parentheses around an expression belong to
//! nothing.

mod cursor;
mod error;
mod grammar;

use tracing::debug;

use hang_ir::{
    Expr, ExprId, ExprKind, SourcePosition, Span, Stmt, StmtId, StmtKind, SyntaxArena, SyntaxTree,
    TokenList,
};

use cursor::Cursor;
pub use error::ParseError;

/// Parse a whole file.
pub fn parse(tokens: &TokenList) -> Result<SyntaxTree, ParseError> {
    let mut parser = Parser::new(tokens);
    let body = parser.parse_module()?;
    debug!(
        statements = parser.arena.stmt_count(),
        expressions = parser.arena.expr_count(),
        "parsed"
    );
    Ok(SyntaxTree::new(body, parser.arena))
}

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: SyntaxArena,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: SyntaxArena::new(),
        }
    }

    /// Start of the next token; the start of any node parsed from here.
    #[inline]
    fn start(&self) -> SourcePosition {
        self.cursor.current_span().start
    }

    /// Span from `start` to the end of the last consumed token.
    #[inline]
    fn span_from(&self, start: SourcePosition) -> Span {
        Span::new(start, self.cursor.previous_span().end)
    }

    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    /// Allocate an expression spanning from `start` to the last consumed token.
    fn finish(&mut self, kind: ExprKind, start: SourcePosition) -> ExprId {
        let span = self.span_from(start);
        self.alloc(kind, span)
    }

    fn finish_stmt(&mut self, kind: StmtKind, span: Span) -> StmtId {
        self.arena.alloc_stmt(Stmt::new(kind, span))
    }

    #[inline]
    fn expr_span(&self, id: ExprId) -> Span {
        self.arena.expr(id).span
    }
}

#[cfg(test)]
mod tests;
