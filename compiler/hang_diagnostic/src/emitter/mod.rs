//! Diagnostic output formats.
//!
//! - Text: `path:line:col: CODE message`, one per line
//! - JSON: an array of flat objects for tooling
//!
//! Both implement [`DiagnosticEmitter`]. Diagnostics are emitted per file in
//! the order the caller supplies them.

mod json;
mod text;

pub use json::JsonEmitter;
pub use text::TextEmitter;

use std::fmt::Write;

use crate::Diagnostic;

/// Output sink for diagnostics of one run.
pub trait DiagnosticEmitter {
    /// Emit one diagnostic found in `path`.
    fn emit(&mut self, path: &str, diagnostic: &Diagnostic);

    fn emit_all(&mut self, path: &str, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(path, diag);
        }
    }

    fn flush(&mut self);

    /// Report totals once all files are done.
    fn emit_summary(&mut self, diagnostic_count: usize, file_count: usize);
}

/// Escape a string for a JSON string literal.
pub(crate) fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", u32::from(c));
            }
            c => result.push(c),
        }
    }
    result
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
