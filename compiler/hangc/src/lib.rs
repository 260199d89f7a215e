//! Driver for the hanging-indent checker.
//!
//! ```text
//! PATH... ──► discover ──► read ──► lex ──► parse ──► check ──► emit
//! ```
//!
//! Every file runs through its own pipeline with its own engine; nothing is
//! shared between files, so `check` fans them out over a rayon pool and
//! collects the reports back in input order.

pub mod commands;
pub mod discover;
pub mod pipeline;
pub mod tracing_setup;

pub use pipeline::{analyze_file, analyze_files, analyze_source, AnalyzeError, FileReport};
