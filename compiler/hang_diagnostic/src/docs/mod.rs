//! Embedded rule documentation for `hangover explain`.
//!
//! One markdown file per rule, embedded at compile time.

use crate::RuleCode;

/// Registry of embedded rule documentation.
pub struct RuleDocs;

impl RuleDocs {
    /// Markdown documentation for `code`.
    pub fn get(code: RuleCode) -> &'static str {
        match code {
            RuleCode::FHG001 => include_str!("FHG001.md"),
            RuleCode::FHG002 => include_str!("FHG002.md"),
            RuleCode::FHG003 => include_str!("FHG003.md"),
            RuleCode::FHG004 => include_str!("FHG004.md"),
            RuleCode::FHG005 => include_str!("FHG005.md"),
            RuleCode::FHG006 => include_str!("FHG006.md"),
            RuleCode::FHG007 => include_str!("FHG007.md"),
        }
    }
}
