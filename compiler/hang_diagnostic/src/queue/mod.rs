//! Diagnostic collection with first-write-wins deduplication.
//!
//! Rules record diagnostics in traversal order; the queue keeps at most one
//! per position and hands them back sorted by `(line, column)`.

use rustc_hash::FxHashSet;
use tracing::trace;

use hang_ir::SourcePosition;

use crate::{Diagnostic, RuleCode};

/// Collector for one engine run.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.record(position, RuleCode::FHG005);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    occupied: FxHashSet<SourcePosition>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `rule` at `position`.
    ///
    /// Returns `false` and drops the diagnostic if the position already holds
    /// one.
    pub fn record(&mut self, position: SourcePosition, rule: RuleCode) -> bool {
        if !self.occupied.insert(position) {
            trace!(%position, %rule, "dropped: position already reported");
            return false;
        }
        trace!(%position, %rule, "recorded");
        self.diagnostics.push(Diagnostic::new(position, rule));
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Whether a diagnostic exists at `position`.
    #[inline]
    pub fn is_occupied(&self, position: SourcePosition) -> bool {
        self.occupied.contains(&position)
    }

    /// Take all diagnostics in ascending `(line, column)` order and reset.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| w[0].position <= w[1].position);

        // Positions are unique, so an unstable sort is still deterministic.
        if !already_sorted {
            self.diagnostics.sort_unstable_by_key(|d| d.position);
        }

        self.occupied.clear();
        std::mem::take(&mut self.diagnostics)
    }

    /// Consume the queue, returning sorted diagnostics.
    pub fn results(mut self) -> Vec<Diagnostic> {
        self.flush()
    }
}
