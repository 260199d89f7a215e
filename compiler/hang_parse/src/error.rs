//! Parse errors.
//!
//! Parsing stops at the first error. A file that fails to parse is
//! unanalyzable; it never produces style diagnostics.

use hang_ir::{SourcePosition, Token, TokenKind};

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseError {
    #[error("{position}: expected {expected}, found `{found}`")]
    UnexpectedToken {
        expected: &'static str,
        found: Box<str>,
        position: SourcePosition,
    },

    #[error("{position}: unexpected end of input, expected {expected}")]
    UnexpectedEof {
        expected: &'static str,
        position: SourcePosition,
    },
}

impl ParseError {
    /// Error for finding `token` where `expected` was required.
    pub(crate) fn unexpected(expected: &'static str, token: &Token) -> Self {
        let position = token.span.start;
        if token.kind == TokenKind::EndMarker {
            return ParseError::UnexpectedEof { expected, position };
        }
        let found = if token.text.trim().is_empty() {
            token.kind.display_name().into()
        } else {
            token.text.clone()
        };
        ParseError::UnexpectedToken {
            expected,
            found,
            position,
        }
    }

    pub fn position(&self) -> SourcePosition {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEof { position, .. } => *position,
        }
    }
}
