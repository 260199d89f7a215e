//! Uniform start/end extraction for argument-like nodes.
//!
//! Rules compare where an argument *visibly* starts on its line. Most
//! nodes report their own span; two shapes are adjusted:
//! - A keyword argument reports the column its name would start at,
//!   `value.column - len(name) - 1`. The result may be negative when the
//!   value sits left of where its name would fit.
//! - A generator expression reports its element, since its own start is the
//!   enclosing bracket.

use hang_ir::{ComprehensionKind, Expr, ExprId, ExprKind, Keyword, SourcePosition, SyntaxArena};

/// Where an argument starts and on which line it ends.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Extent {
    pub line: u32,
    /// Signed: a keyword's adjusted column can fall left of column 0.
    pub column: i64,
    pub end_line: u32,
}

impl Extent {
    /// Column clamped into the diagnostic coordinate space.
    pub fn report_column(&self) -> u32 {
        u32::try_from(self.column.max(0)).unwrap_or(u32::MAX)
    }

    /// Start position diagnostics are reported at.
    pub fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.report_column())
    }
}

/// Extent of a positional argument.
pub fn argument(arena: &SyntaxArena, id: ExprId) -> Extent {
    let expr = arena.expr(id);
    match &expr.kind {
        ExprKind::Comprehension(comp) if comp.kind == ComprehensionKind::Generator => {
            let element = arena.expr(comp.element);
            let end_line = comp
                .generators
                .first()
                .map_or(element.span.end.line, |clause| {
                    arena
                        .expr(clause.target)
                        .span
                        .end
                        .line
                        .max(arena.expr(clause.iter).span.end.line)
                });
            Extent {
                line: element.span.start.line,
                column: i64::from(element.span.start.column),
                end_line,
            }
        }
        _ => plain(expr),
    }
}

/// Extent of a keyword argument: the value's lines, the name's column.
pub fn keyword(arena: &SyntaxArena, keyword: &Keyword) -> Extent {
    let value = plain(arena.expr(keyword.value));
    let name_len = keyword
        .name
        .as_deref()
        .map_or(0, |name| name.chars().count());
    Extent {
        column: value.column - i64::try_from(name_len).unwrap_or(i64::MAX) - 1,
        ..value
    }
}

fn plain(expr: &Expr) -> Extent {
    Extent {
        line: expr.span.start.line,
        column: i64::from(expr.span.start.column),
        end_line: expr.span.end.line,
    }
}

#[cfg(test)]
mod tests;
