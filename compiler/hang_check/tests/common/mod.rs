//! Shared helpers for the rule scenario tests.

#![allow(dead_code, reason = "each test binary uses a subset")]

use hang_check::{check, CheckConfig};
use hang_diagnostic::{Diagnostic, RuleCode};

/// Strip the indentation common to all non-blank lines.
pub fn dedent(text: &str) -> String {
    let margin = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        out.push_str(line.get(margin..).unwrap_or(""));
        out.push('\n');
    }
    out
}

/// Lex, parse and check `source` with the default configuration.
pub fn diagnostics(source: &str) -> Vec<Diagnostic> {
    let tokens = match hang_lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("lex failed: {err}\n{source}"),
    };
    let tree = match hang_parse::parse(&tokens) {
        Ok(tree) => tree,
        Err(err) => panic!("parse failed: {err}\n{source}"),
    };
    match check(&tree, &tokens, CheckConfig::default()) {
        Ok(found) => found,
        Err(err) => panic!("input contract violated: {err}\n{source}"),
    }
}

/// Sorted rule codes found in `source`.
pub fn codes(source: &str) -> Vec<RuleCode> {
    let mut found: Vec<_> = diagnostics(source).into_iter().map(|d| d.rule).collect();
    found.sort_unstable();
    found
}

/// One scenario: a name for failure messages, the code, expected codes.
pub struct Case {
    pub name: &'static str,
    pub code: &'static str,
    pub expected: &'static [RuleCode],
}

/// Run every case, collecting all mismatches before failing.
pub fn run_cases(cases: &[Case], transform: impl Fn(&str) -> String) {
    let mut failures = Vec::new();
    for case in cases {
        let source = transform(&dedent(case.code));
        let mut expected = case.expected.to_vec();
        expected.sort_unstable();
        let found = codes(&source);
        if found != expected {
            failures.push(format!(
                "{}: expected {expected:?}, found {:?}\n{source}",
                case.name,
                diagnostics(&source)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
