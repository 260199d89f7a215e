//! JSON emitter.
//!
//! Built by hand; the output is a flat array of
//! `{path, line, column, code, message}` objects with 0-based columns.

use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, DiagnosticEmitter};

pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Open the array.
    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    /// Close the array.
    pub fn end(&mut self) {
        if self.first {
            let _ = writeln!(self.writer, "]");
        } else {
            let _ = writeln!(self.writer, "\n]");
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, path: &str, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = write!(self.writer, ",");
        }
        self.first = false;

        let _ = write!(
            self.writer,
            "\n  {{\"path\": \"{}\", \"line\": {}, \"column\": {}, \"code\": \"{}\", \"message\": \"{}\"}}",
            escape_json(path),
            diagnostic.line(),
            diagnostic.column(),
            diagnostic.code(),
            escape_json(diagnostic.message())
        );
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _diagnostic_count: usize, _file_count: usize) {
        // The array is the whole output.
    }
}
