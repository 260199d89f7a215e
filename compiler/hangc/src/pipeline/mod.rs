//! Per-file analysis: read, lex, parse, check.
//!
//! A file that fails any front-end phase is unanalyzable. Its report
//! carries the error and no diagnostics; other files are unaffected.

use std::io;
use std::path::{Path, PathBuf};

use hang_check::{CheckConfig, InputContractError};
use hang_diagnostic::Diagnostic;
use hang_lexer::LexError;
use hang_parse::ParseError;
use rayon::prelude::*;
use tracing::{debug, debug_span, warn};

/// Worker stack size. The parser grows its own stack on deep nesting;
/// this only sets the starting size.
const WORKER_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Why a file produced no diagnostics at all.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("{}", read_failure(.0))]
    Io(#[from] io::Error),

    #[error("lex error at {0}")]
    Lex(#[from] LexError),

    #[error("parse error at {0}")]
    Parse(#[from] ParseError),

    #[error("internal error: {0}")]
    InputContract(#[from] InputContractError),
}

fn read_failure(e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::NotFound => "cannot find file".to_string(),
        io::ErrorKind::PermissionDenied => "permission denied".to_string(),
        io::ErrorKind::InvalidData => "file contains invalid UTF-8 data".to_string(),
        _ => format!("cannot read file: {e}"),
    }
}

/// Outcome for one input path.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<Vec<Diagnostic>, AnalyzeError>,
}

impl FileReport {
    /// Path as printed in output.
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match &self.result {
            Ok(diagnostics) => diagnostics,
            Err(_) => &[],
        }
    }
}

/// Lex, parse and check one source text.
pub fn analyze_source(source: &str, config: CheckConfig) -> Result<Vec<Diagnostic>, AnalyzeError> {
    let tokens = hang_lexer::lex(source)?;
    let tree = hang_parse::parse(&tokens)?;
    let diagnostics = hang_check::check(&tree, &tokens, config)?;
    Ok(diagnostics)
}

/// Read and analyze one file.
pub fn analyze_file(path: &Path, config: CheckConfig) -> FileReport {
    let _span = debug_span!("analyze", path = %path.display()).entered();

    let result = std::fs::read_to_string(path)
        .map_err(AnalyzeError::from)
        .and_then(|source| analyze_source(&source, config));

    match &result {
        Ok(diagnostics) => debug!(diagnostics = diagnostics.len(), "analyzed"),
        Err(e) => debug!(error = %e, "unanalyzable"),
    }

    FileReport {
        path: path.to_path_buf(),
        result,
    }
}

/// Analyze every path. Reports come back in the order of `paths`.
pub fn analyze_files(paths: &[PathBuf], config: CheckConfig, parallel: bool) -> Vec<FileReport> {
    if !parallel || paths.len() < 2 {
        return analyze_sequential(paths, config);
    }

    rayon::ThreadPoolBuilder::new()
        .stack_size(WORKER_STACK_SIZE)
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                paths
                    .par_iter()
                    .map(|path| analyze_file(path, config))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            warn!("failed to create thread pool ({e}), running sequentially");
            analyze_sequential(paths, config)
        })
}

fn analyze_sequential(paths: &[PathBuf], config: CheckConfig) -> Vec<FileReport> {
    paths.iter().map(|path| analyze_file(path, config)).collect()
}
