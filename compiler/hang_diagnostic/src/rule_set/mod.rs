//! Sets of enabled rules and `--select`/`--ignore` prefix parsing.

use bitflags::bitflags;

use crate::RuleCode;

bitflags! {
    /// Set of enabled rules. Bit `n` is `RuleCode::ALL[n]`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct RuleSet: u8 {
        const FHG001 = 1 << 0;
        const FHG002 = 1 << 1;
        const FHG003 = 1 << 2;
        const FHG004 = 1 << 3;
        const FHG005 = 1 << 4;
        const FHG006 = 1 << 5;
        const FHG007 = 1 << 6;
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::all()
    }
}

/// A `--select`/`--ignore` entry that names no rule.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum RuleSelectError {
    #[error("`{prefix}` does not match any rule code")]
    UnknownPrefix { prefix: String },
}

impl RuleSet {
    /// The singleton set for `code`.
    #[inline]
    pub fn of(code: RuleCode) -> RuleSet {
        RuleSet::from_bits_truncate(1 << code.ordinal())
    }

    #[inline]
    pub fn is_enabled(self, code: RuleCode) -> bool {
        self.contains(RuleSet::of(code))
    }

    /// Enabled codes in ascending order.
    pub fn codes(self) -> impl Iterator<Item = RuleCode> {
        RuleCode::ALL
            .into_iter()
            .filter(move |&code| self.is_enabled(code))
    }

    /// Parse a comma-separated list of code prefixes.
    ///
    /// `FHG` selects every rule, `FHG005` exactly one.
    /// Matching is case-insensitive and blank entries are skipped.
    pub fn select(list: &str) -> Result<RuleSet, RuleSelectError> {
        let mut set = RuleSet::empty();
        for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let prefix = entry.to_ascii_uppercase();
            let matched = RuleCode::ALL
                .into_iter()
                .filter(|code| code.as_str().starts_with(&prefix))
                .fold(RuleSet::empty(), |acc, code| acc | RuleSet::of(code));
            if matched.is_empty() {
                return Err(RuleSelectError::UnknownPrefix {
                    prefix: entry.to_string(),
                });
            }
            set |= matched;
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests;
