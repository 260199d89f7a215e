//! Rule codes for hanging-indent diagnostics.
//!
//! Codes and messages are part of the output contract: tools downstream match
//! on them verbatim.

use std::fmt;
use std::str::FromStr;

/// One hanging-indent rule.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum RuleCode {
    /// Wrapped parameter in a definition not at `def` column + indent width
    FHG001,
    /// Wrapped positional call argument past the name bound or off the indent grid
    FHG002,
    /// Wrapped keyword call argument past the name bound or off the indent grid
    FHG003,
    /// First parameter stays on the `def` line while later ones wrap
    FHG004,
    /// Call close bracket shares a line with the last wrapped argument
    FHG005,
    /// Call close bracket not at the indentation of the opening line
    FHG006,
    /// Assignment close bracket not at the indentation of the opening line
    FHG007,
}

impl RuleCode {
    pub const ALL: [RuleCode; 7] = [
        RuleCode::FHG001,
        RuleCode::FHG002,
        RuleCode::FHG003,
        RuleCode::FHG004,
        RuleCode::FHG005,
        RuleCode::FHG006,
        RuleCode::FHG007,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleCode::FHG001 => "FHG001",
            RuleCode::FHG002 => "FHG002",
            RuleCode::FHG003 => "FHG003",
            RuleCode::FHG004 => "FHG004",
            RuleCode::FHG005 => "FHG005",
            RuleCode::FHG006 => "FHG006",
            RuleCode::FHG007 => "FHG007",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RuleCode::FHG001 => "Function argument has hanging indentation",
            RuleCode::FHG002 => "Function call positional argument has hanging indentation",
            RuleCode::FHG003 => "Function call keyword argument has hanging indentation",
            RuleCode::FHG004 => "First function argument must be on new line",
            RuleCode::FHG005 => "Function close bracket must be on new line",
            RuleCode::FHG006 => "Function close bracket got over indentation",
            RuleCode::FHG007 => "Assignment close bracket must be on new line",
        }
    }

    /// Zero-based position in [`RuleCode::ALL`].
    #[inline]
    pub(crate) fn ordinal(self) -> u32 {
        match self {
            RuleCode::FHG001 => 0,
            RuleCode::FHG002 => 1,
            RuleCode::FHG003 => 2,
            RuleCode::FHG004 => 3,
            RuleCode::FHG005 => 4,
            RuleCode::FHG006 => 5,
            RuleCode::FHG007 => 6,
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown rule code text.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("unknown rule code `{0}`")]
pub struct UnknownRuleCode(pub String);

impl FromStr for RuleCode {
    type Err = UnknownRuleCode;

    /// Case-insensitive exact match on the code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRuleCode(s.to_string()))
    }
}
