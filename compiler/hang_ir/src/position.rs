//! Source positions and spans.
//!
//! Positions follow the convention of the parser the hanging-indent rules
//! were designed against: lines are 1-based, columns are 0-based and counted
//! in characters. A span's `end` is exclusive, so for a call `foo(x)` the
//! end column sits one past the closing `)`.

use std::fmt;

/// A `(line, column)` location in a source file.
///
/// Ordering is lexicographic on `(line, column)`, which is the order
/// diagnostics are reported in.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct SourcePosition {
    /// 1-based line number.
    pub line: u32,
    /// 0-based column, in characters.
    pub column: u32,
}

impl SourcePosition {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        SourcePosition { line, column }
    }
}

impl fmt::Debug for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start/end extent of a token or syntax node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: SourcePosition,
    /// Exclusive end.
    pub end: SourcePosition,
}

impl Span {
    #[inline]
    pub const fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Span { start, end }
    }

    /// Whether the span starts and ends on the same line.
    #[inline]
    pub const fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Create a span covering both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Trait for nodes that carry a span.
pub trait Spanned {
    fn span(&self) -> Span;
}

/// Byte offset to [`SourcePosition`] conversion for one source text.
///
/// Built once per file from the positions of its `\n` bytes. Lookups are a
/// binary search over line starts plus a character count within the line.
#[derive(Clone, Debug)]
pub struct LineIndex<'src> {
    source: &'src str,
    /// Byte offset of the first byte of each line. Always starts with `0`.
    line_starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = Vec::with_capacity(source.len() / 32 + 1);
        line_starts.push(0);
        let bytes = source.as_bytes();
        // `\r\n`, `\n` and a lone `\r` each end a line.
        line_starts.extend(
            bytes
                .iter()
                .enumerate()
                .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
                .map(|(i, _)| i + 1),
        );
        LineIndex {
            source,
            line_starts,
        }
    }

    /// Number of lines, counting a trailing line with no terminator.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a position.
    ///
    /// Offsets past the end of the source clamp to the end. Offsets that
    /// fall inside a multi-byte character count that character as started.
    pub fn position(&self, offset: usize) -> SourcePosition {
        let offset = offset.min(self.source.len());
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line_start = self.line_starts[line_idx];
        let column = self.source.as_bytes()[line_start..offset]
            .iter()
            .filter(|&&b| !is_utf8_continuation(b))
            .count();
        SourcePosition {
            line: to_u32(line_idx + 1),
            column: to_u32(column),
        }
    }

    /// Convert a byte range into a span.
    pub fn span(&self, range: std::ops::Range<usize>) -> Span {
        Span::new(self.position(range.start), self.position(range.end))
    }
}

#[inline]
fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Saturating `usize -> u32`; sources beyond 4 GiB are not a supported input.
#[inline]
fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
