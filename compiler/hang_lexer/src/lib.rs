//! Tokenizer for the checked source language.
//!
//! Produces the token stream the checker consumes: every bracket, comment
//! and layout token, with 1-based lines and 0-based character columns.

mod cooker;
mod keywords;
mod lex_error;
mod raw_token;

use tracing::debug;

use hang_ir::TokenList;

pub use lex_error::LexError;

/// Tokenize `source`.
///
/// The result always ends with `EndMarker`. Stops at the first error.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let tokens = cooker::LayoutCooker::new(source).cook()?;
    debug!(tokens = tokens.len(), bytes = source.len(), "lexed");
    Ok(tokens)
}
