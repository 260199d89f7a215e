use hang_ir::SourcePosition;

/// The token stream does not agree with a tree that parsed successfully.
///
/// Never a style diagnostic: the file is unanalyzable and no partial results
/// are returned.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum InputContractError {
    #[error("unmatched closing bracket `{bracket}` at {position}")]
    UnmatchedClose {
        bracket: char,
        position: SourcePosition,
    },
    #[error("bracket `{bracket}` opened at {position} is never closed")]
    UnclosedOpen {
        bracket: char,
        position: SourcePosition,
    },
}

impl InputContractError {
    pub fn position(&self) -> SourcePosition {
        match self {
            InputContractError::UnmatchedClose { position, .. }
            | InputContractError::UnclosedOpen { position, .. } => *position,
        }
    }
}
