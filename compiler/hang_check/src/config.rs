use hang_diagnostic::RuleSet;

/// Settings for one engine run.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CheckConfig {
    /// Width of one indentation step, in columns.
    pub indent_width: u32,
    /// Rules whose diagnostics are kept.
    pub rules: RuleSet,
}

impl CheckConfig {
    pub const DEFAULT_INDENT_WIDTH: u32 = 4;

    #[must_use]
    pub fn with_indent_width(mut self, width: u32) -> Self {
        self.indent_width = width;
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            indent_width: Self::DEFAULT_INDENT_WIDTH,
            rules: RuleSet::all(),
        }
    }
}
