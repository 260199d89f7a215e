//! Source file discovery.
//!
//! Directories are walked recursively for `.py` files; files named on the
//! command line are taken as given.

use std::fs;
use std::path::{Path, PathBuf};

/// Extension of files picked up from directories.
pub const SOURCE_EXTENSION: &str = "py";

/// All source files under `root`, sorted by path.
pub fn discover_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    discover_recursive(root, &mut files);
    files.sort();
    files
}

fn discover_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                continue;
            }
        }

        if path.is_dir() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if matches!(name, "__pycache__" | "node_modules") {
                    continue;
                }
            }
            discover_recursive(&path, files);
        } else if path.extension().is_some_and(|e| e == SOURCE_EXTENSION) {
            files.push(path);
        }
    }
}

/// Expand command-line paths into the files to analyze, in argument order.
///
/// A path that is neither a directory nor readable is kept, so the
/// pipeline reports it instead of it vanishing silently.
pub fn expand_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(discover_sources(path));
        } else {
            files.push(path.clone());
        }
    }
    files
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
