use std::fmt;

use hang_ir::SourcePosition;

use crate::RuleCode;

/// A rule violation at one source position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub position: SourcePosition,
    pub rule: RuleCode,
}

impl Diagnostic {
    #[inline]
    pub fn new(position: SourcePosition, rule: RuleCode) -> Self {
        Diagnostic { position, rule }
    }

    /// 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// 0-based column.
    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    #[inline]
    pub fn code(&self) -> &'static str {
        self.rule.as_str()
    }

    #[inline]
    pub fn message(&self) -> &'static str {
        self.rule.message()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.position, self.code(), self.message())
    }
}
