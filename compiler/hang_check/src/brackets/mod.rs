//! Bracket pairing and per-line indentation over the raw token stream.
//!
//! One pass over the tokens pairs every opening bracket with its closing
//! bracket, using one LIFO stack per [`BracketFamily`], and records the
//! column of each line's first substantive token. Comments and strings are
//! single tokens, so bracket characters inside them are never seen here.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use hang_ir::{BracketFamily, SourcePosition, Token, TokenList};

use crate::InputContractError;

/// A bracket token tagged with its family and direction.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BracketToken<'t> {
    pub token: &'t Token,
    pub family: BracketFamily,
    pub is_open: bool,
}

impl BracketToken<'_> {
    #[inline]
    pub fn position(&self) -> SourcePosition {
        self.token.span.start
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.token.span.start.line
    }
}

/// A resolved open/close pair of the same family, `open` first.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BracketPair<'t> {
    pub open: BracketToken<'t>,
    pub close: BracketToken<'t>,
}

impl BracketPair<'_> {
    #[inline]
    pub fn family(&self) -> BracketFamily {
        self.open.family
    }

    #[inline]
    pub fn is_multiline(&self) -> bool {
        self.open.line() != self.close.line()
    }
}

/// Column of each line's first token that is not `Indent`/`Dedent`.
#[derive(Clone, Default, Debug)]
pub struct LineIndent {
    columns: FxHashMap<u32, u32>,
}

impl LineIndent {
    /// Columns are recorded first-write-wins per line.
    fn record(&mut self, token: &Token) {
        if token.kind.is_layout_marker() {
            return;
        }
        let start = token.span.start;
        self.columns.entry(start.line).or_insert(start.column);
    }

    pub fn get(&self, line: u32) -> Option<u32> {
        self.columns.get(&line).copied()
    }

    /// Indentation of `line`, or `0` for lines no token starts on (the
    /// inside of a multi-line string).
    pub fn column(&self, line: u32) -> u32 {
        self.get(line).unwrap_or(0)
    }
}

/// Everything the resolver learns about one token stream.
#[derive(Clone, Debug)]
pub struct BracketIndex<'t> {
    /// Pairs in order of their closing bracket.
    pairs: Vec<BracketPair<'t>>,
    indent: LineIndent,
    /// Closing bracket position to pair index.
    by_close: FxHashMap<SourcePosition, usize>,
    /// Close line to indices of pairs closing there, in stream order.
    closing_on: FxHashMap<u32, SmallVec<[usize; 4]>>,
    /// Line to number of brackets opened there and closed on a later line.
    left_open: FxHashMap<u32, u32>,
}

impl<'t> BracketIndex<'t> {
    /// Pair every bracket in `tokens`.
    ///
    /// A closing bracket with nothing open in its family, or an opening
    /// bracket still open at the end, means the stream is inconsistent with
    /// a successful parse.
    pub fn resolve(tokens: &'t TokenList) -> Result<Self, InputContractError> {
        let mut stacks: [SmallVec<[BracketToken<'t>; 16]>; 3] = Default::default();
        let mut pairs = Vec::new();
        let mut indent = LineIndent::default();

        for token in tokens {
            indent.record(token);
            let Some((family, is_open)) = token.kind.bracket() else {
                continue;
            };
            let bracket = BracketToken {
                token,
                family,
                is_open,
            };
            let stack = &mut stacks[family.index()];
            if is_open {
                stack.push(bracket);
                continue;
            }
            let open = stack
                .pop()
                .ok_or_else(|| InputContractError::UnmatchedClose {
                    bracket: family.close_char(),
                    position: bracket.position(),
                })?;
            pairs.push(BracketPair {
                open,
                close: bracket,
            });
        }

        // Report the earliest bracket left open.
        if let Some(open) = stacks
            .iter()
            .filter_map(|stack| stack.first())
            .min_by_key(|open| open.position())
        {
            return Err(InputContractError::UnclosedOpen {
                bracket: open.family.open_char(),
                position: open.position(),
            });
        }

        debug!(pairs = pairs.len(), "brackets resolved");
        Ok(Self::index(pairs, indent))
    }

    fn index(pairs: Vec<BracketPair<'t>>, indent: LineIndent) -> Self {
        let mut by_close = FxHashMap::default();
        let mut closing_on: FxHashMap<u32, SmallVec<[usize; 4]>> = FxHashMap::default();
        let mut left_open: FxHashMap<u32, u32> = FxHashMap::default();

        for (idx, pair) in pairs.iter().enumerate() {
            by_close.insert(pair.close.position(), idx);
            closing_on.entry(pair.close.line()).or_default().push(idx);
            if pair.is_multiline() {
                *left_open.entry(pair.open.line()).or_default() += 1;
            }
        }

        BracketIndex {
            pairs,
            indent,
            by_close,
            closing_on,
            left_open,
        }
    }

    #[inline]
    pub fn pairs(&self) -> &[BracketPair<'t>] {
        &self.pairs
    }

    #[inline]
    pub fn line_indent(&self) -> &LineIndent {
        &self.indent
    }

    /// The pair whose closing bracket starts at `position`.
    pub fn pair_closed_at(&self, position: SourcePosition) -> Option<&BracketPair<'t>> {
        self.by_close.get(&position).map(|&idx| &self.pairs[idx])
    }

    /// Number of brackets opened on `line` that close on a later line.
    pub fn left_open_on(&self, line: u32) -> u32 {
        self.left_open.get(&line).copied().unwrap_or(0)
    }

    /// Number of brackets closing on `close.line()` before `close` that were
    /// opened on `open_line`.
    pub fn closed_before(&self, close: &BracketToken<'_>, open_line: u32) -> u32 {
        let Some(on_line) = self.closing_on.get(&close.line()) else {
            return 0;
        };
        let before = close.position();
        let count = on_line
            .iter()
            .map(|&idx| &self.pairs[idx])
            .filter(|pair| pair.close.position() < before && pair.open.line() == open_line)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests;
