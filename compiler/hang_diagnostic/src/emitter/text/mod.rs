//! Text emitter: one `path:line:col: CODE message` line per diagnostic.
//!
//! Columns are printed 1-based, the convention of the linters these rule
//! codes come from. The summary goes to a separate writer so it can be
//! routed to stderr while diagnostics go to stdout.

use std::io::Write;

use crate::Diagnostic;

use super::{plural_s, DiagnosticEmitter};

pub struct TextEmitter<W: Write, S: Write> {
    writer: W,
    summary: S,
}

impl<W: Write, S: Write> TextEmitter<W, S> {
    pub fn new(writer: W, summary: S) -> Self {
        TextEmitter { writer, summary }
    }
}

impl<W: Write, S: Write> DiagnosticEmitter for TextEmitter<W, S> {
    fn emit(&mut self, path: &str, diagnostic: &Diagnostic) {
        let _ = writeln!(
            self.writer,
            "{path}:{}:{}: {} {}",
            diagnostic.line(),
            diagnostic.column() + 1,
            diagnostic.code(),
            diagnostic.message()
        );
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
        let _ = self.summary.flush();
    }

    fn emit_summary(&mut self, diagnostic_count: usize, file_count: usize) {
        if diagnostic_count == 0 {
            let _ = writeln!(
                self.summary,
                "No hanging-indent issues in {file_count} file{}",
                plural_s(file_count)
            );
        } else {
            let _ = writeln!(
                self.summary,
                "Found {diagnostic_count} issue{} in {file_count} file{}",
                plural_s(diagnostic_count),
                plural_s(file_count)
            );
        }
    }
}
