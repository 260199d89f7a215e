//! Command handlers for the `hangover` CLI.
//!
//! Each submodule implements one command. Shared helpers live here.

mod check;
mod explain;
mod tokens;

pub use check::{
    parse_check_options, run_check, run_check_to, CheckOptions, CheckStatus, OptionsError,
    OutputFormat,
};
pub use explain::explain_rule;
pub use tokens::print_tokens;

/// Exit status for unreadable or unanalyzable input.
pub const EXIT_UNANALYZABLE: i32 = 2;

/// Read a file to a string, or print why not and exit.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(EXIT_UNANALYZABLE);
        }
    }
}
