//! The `check` command: analyze files and report hanging-indent issues.

use std::io::Write;
use std::path::PathBuf;

use hang_check::CheckConfig;
use hang_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TextEmitter};
use hang_diagnostic::{RuleSelectError, RuleSet};
use tracing::debug;

use crate::discover::expand_paths;
use crate::pipeline::{analyze_files, FileReport};

/// How diagnostics are printed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `path:line:col: CODE message`, summary on stderr.
    #[default]
    Text,
    /// One JSON array on stdout.
    Json,
}

/// Options for `hangover check`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    /// Files and directories to analyze.
    pub paths: Vec<PathBuf>,
    /// Rules to keep; `None` keeps all.
    pub select: Option<RuleSet>,
    /// Rules to drop, applied after `select`.
    pub ignore: RuleSet,
    pub indent_width: u32,
    pub format: OutputFormat,
    /// Analyze files on a rayon pool.
    pub parallel: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            paths: Vec::new(),
            select: None,
            ignore: RuleSet::empty(),
            indent_width: CheckConfig::DEFAULT_INDENT_WIDTH,
            format: OutputFormat::Text,
            parallel: true,
        }
    }
}

impl CheckOptions {
    /// Engine configuration for these options.
    pub fn config(&self) -> CheckConfig {
        let rules = self.select.unwrap_or_default() - self.ignore;
        CheckConfig::default()
            .with_indent_width(self.indent_width)
            .with_rules(rules)
    }
}

/// A malformed `check` argument.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("invalid --select: {0}")]
    Select(RuleSelectError),

    #[error("invalid --ignore: {0}")]
    Ignore(RuleSelectError),

    #[error("invalid --indent-width `{0}`: expected a positive integer")]
    IndentWidth(String),

    #[error("invalid --format `{0}`: expected `text` or `json`")]
    Format(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Parse the arguments following `check`.
///
/// Options may appear anywhere among the paths. With no path, the current
/// directory is checked.
pub fn parse_check_options(args: &[String]) -> Result<CheckOptions, OptionsError> {
    let mut options = CheckOptions::default();

    for arg in args {
        if let Some(codes) = arg.strip_prefix("--select=") {
            let selected = RuleSet::select(codes).map_err(OptionsError::Select)?;
            options.select = Some(options.select.unwrap_or_else(RuleSet::empty) | selected);
        } else if let Some(codes) = arg.strip_prefix("--ignore=") {
            options.ignore |= RuleSet::select(codes).map_err(OptionsError::Ignore)?;
        } else if let Some(width) = arg.strip_prefix("--indent-width=") {
            options.indent_width = width
                .parse::<u32>()
                .ok()
                .filter(|&w| w > 0)
                .ok_or_else(|| OptionsError::IndentWidth(width.to_string()))?;
        } else if let Some(format) = arg.strip_prefix("--format=") {
            options.format = match format {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(OptionsError::Format(format.to_string())),
            };
        } else if arg == "--no-parallel" {
            options.parallel = false;
        } else if arg.starts_with('-') {
            return Err(OptionsError::UnknownOption(arg.clone()));
        } else {
            options.paths.push(PathBuf::from(arg));
        }
    }

    if options.paths.is_empty() {
        options.paths.push(PathBuf::from("."));
    }
    Ok(options)
}

/// Result of a `check` run, mapped onto the process exit status.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CheckStatus {
    /// Every file analyzed, nothing reported.
    Clean,
    /// Every file analyzed, at least one diagnostic.
    IssuesFound,
    /// Some file could not be read or analyzed.
    Failed,
}

impl CheckStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            CheckStatus::Clean => 0,
            CheckStatus::IssuesFound => 1,
            CheckStatus::Failed => super::EXIT_UNANALYZABLE,
        }
    }
}

/// Run `check`, writing to the process's stdout and stderr.
pub fn run_check(options: &CheckOptions) -> CheckStatus {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_check_to(options, &mut stdout.lock(), &mut stderr.lock())
}

/// Run `check`, writing diagnostics to `out` and errors and the summary
/// to `err`.
pub fn run_check_to<W: Write, E: Write>(
    options: &CheckOptions,
    out: &mut W,
    err: &mut E,
) -> CheckStatus {
    let files = expand_paths(&options.paths);
    debug!(files = files.len(), "discovered");

    let reports = analyze_files(&files, options.config(), options.parallel);

    let mut failed = false;
    for report in &reports {
        if let Err(e) = &report.result {
            let _ = writeln!(err, "{}: error: {e}", report.display_path());
            failed = true;
        }
    }

    let total = match options.format {
        OutputFormat::Text => emit_reports(&mut TextEmitter::new(out, err), &reports),
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(out);
            emitter.begin();
            let total = emit_reports(&mut emitter, &reports);
            emitter.end();
            emitter.flush();
            total
        }
    };

    if failed {
        CheckStatus::Failed
    } else if total > 0 {
        CheckStatus::IssuesFound
    } else {
        CheckStatus::Clean
    }
}

/// Emit every analyzed file's diagnostics in report order. Returns the count.
fn emit_reports(emitter: &mut impl DiagnosticEmitter, reports: &[FileReport]) -> usize {
    let mut total = 0;
    let mut analyzed = 0;
    for report in reports {
        if let Ok(diagnostics) = &report.result {
            emitter.emit_all(&report.display_path(), diagnostics);
            total += diagnostics.len();
            analyzed += 1;
        }
    }
    emitter.emit_summary(total, analyzed);
    emitter.flush();
    total
}
