//! Hanging-indent checks over one parsed file.
//!
//! The engine takes a [`SyntaxTree`](hang_ir::SyntaxTree) and the
//! [`TokenList`](hang_ir::TokenList) it was parsed from:
//! - the bracket resolver pairs brackets and records line indentation
//! - the rule visitor checks calls, definitions and assignments
//! - the diagnostic queue deduplicates and sorts what the rules report
//!
//! Engines share nothing, so files can be checked in parallel.

pub mod brackets;
mod config;
mod engine;
mod error;
pub mod extent;
pub mod qualified_name;
mod rules;

#[cfg(test)]
mod test_support;

pub use brackets::{BracketIndex, BracketPair, BracketToken, LineIndent};
pub use config::CheckConfig;
pub use engine::{check, Engine};
pub use error::InputContractError;
