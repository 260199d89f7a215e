//! Parser tests over lexed source text.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod statements;

use hang_ir::{Expr, ExprId, SourcePosition, Span, Stmt, SyntaxTree};

use crate::ParseError;

pub(crate) fn parse_source(source: &str) -> SyntaxTree {
    let tokens = match hang_lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("lex failed: {err}"),
    };
    match crate::parse(&tokens) {
        Ok(tree) => tree,
        Err(err) => panic!("parse failed: {err}\n{source}"),
    }
}

pub(crate) fn parse_failure(source: &str) -> ParseError {
    let tokens = hang_lexer::lex(source).unwrap();
    match crate::parse(&tokens) {
        Ok(tree) => panic!("expected a parse error, got {tree:?}"),
        Err(err) => err,
    }
}

/// The single top-level statement of `tree`.
pub(crate) fn only_stmt(tree: &SyntaxTree) -> &Stmt {
    assert_eq!(tree.body.len(), 1, "expected one statement");
    tree.arena.stmt(tree.body[0])
}

pub(crate) fn expr(tree: &SyntaxTree, id: ExprId) -> &Expr {
    tree.arena.expr(id)
}

pub(crate) fn span(start: (u32, u32), end: (u32, u32)) -> Span {
    Span::new(
        SourcePosition::new(start.0, start.1),
        SourcePosition::new(end.0, end.1),
    )
}
