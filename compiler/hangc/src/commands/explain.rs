//! The `explain` command: long-form documentation for a rule code.

use hang_diagnostic::{RuleCode, RuleDocs};

/// Print the documentation for `code_str`, or exit 1 if no rule has that code.
pub fn explain_rule(code_str: &str) {
    let Ok(code) = code_str.parse::<RuleCode>() else {
        eprintln!("Unknown rule code: {code_str}");
        eprintln!();
        eprintln!(
            "Rule codes run from {} to {}.",
            RuleCode::FHG001,
            RuleCode::FHG007
        );
        eprintln!("Example: hangover explain FHG005");
        std::process::exit(1);
    };

    println!("{}", RuleDocs::get(code).trim_end());
}
