//! Lexer errors.
//!
//! A file that fails to lex is unanalyzable; it never produces style
//! diagnostics.

use hang_ir::SourcePosition;

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// No closing quote before end of line (single-quoted) or end of input.
    #[error("{position}: unterminated string literal")]
    UnterminatedString { position: SourcePosition },

    /// A character that starts no token.
    #[error("{position}: invalid character `{found}`")]
    InvalidCharacter {
        position: SourcePosition,
        found: char,
    },

    /// Dedent to a column that matches no enclosing indentation level.
    #[error("{position}: unindent does not match any outer indentation level")]
    InconsistentDedent { position: SourcePosition },
}

impl LexError {
    /// Where the error was detected.
    pub fn position(&self) -> SourcePosition {
        match self {
            LexError::UnterminatedString { position }
            | LexError::InvalidCharacter { position, .. }
            | LexError::InconsistentDedent { position } => *position,
        }
    }
}
