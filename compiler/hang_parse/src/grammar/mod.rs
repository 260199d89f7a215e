//! Grammar productions, split by syntactic category.
//!
//! Each submodule adds `parse_*` methods to [`Parser`](crate::Parser).

mod expr;
mod params;
mod stmt;

use hang_ir::TokenKind;

/// Whether a token of `kind` can begin an expression.
///
/// Used to tell a trailing comma from a comma before another element.
pub(crate) fn starts_expression(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Name
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::None
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Ellipsis
            | TokenKind::LParen
            | TokenKind::LBracket
            | TokenKind::LBrace
            | TokenKind::Minus
            | TokenKind::Plus
            | TokenKind::Tilde
            | TokenKind::Not
            | TokenKind::Lambda
            | TokenKind::Await
            | TokenKind::Star
    )
}
