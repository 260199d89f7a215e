//! Source-to-tree helpers for unit tests.

use hang_ir::SyntaxTree;

pub(crate) fn parse_source(source: &str) -> SyntaxTree {
    let tokens = match hang_lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("lex failed: {err}\n{source}"),
    };
    match hang_parse::parse(&tokens) {
        Ok(tree) => tree,
        Err(err) => panic!("parse failed: {err}\n{source}"),
    }
}
