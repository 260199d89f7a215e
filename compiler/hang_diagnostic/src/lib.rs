//! Diagnostics for the hanging-indent checker.
//!
//! - `RuleCode`: the FHG001-FHG007 rule table
//! - `RuleSet`: which rules are enabled
//! - `DiagnosticQueue`: per-run collector, one diagnostic per position
//! - Emitters for text and JSON output
//! - `RuleDocs`: long-form rule documentation

mod diagnostic;
mod docs;
pub mod emitter;
pub mod queue;
mod rule_code;
mod rule_set;

pub use diagnostic::Diagnostic;
pub use docs::RuleDocs;
pub use queue::DiagnosticQueue;
pub use rule_code::{RuleCode, UnknownRuleCode};
pub use rule_set::{RuleSelectError, RuleSet};
