use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_default_enables_everything() {
    let set = RuleSet::default();
    assert_eq!(set.codes().count(), RuleCode::ALL.len());
}

#[test]
fn test_singleton_bits_line_up_with_flags() {
    assert_eq!(RuleSet::of(RuleCode::FHG001), RuleSet::FHG001);
    assert_eq!(RuleSet::of(RuleCode::FHG007), RuleSet::FHG007);
}

#[test]
fn test_select_prefixes() {
    assert_eq!(RuleSet::select("FHG"), Ok(RuleSet::all()));
    assert_eq!(
        RuleSet::select("fhg005, FHG001"),
        Ok(RuleSet::FHG005 | RuleSet::FHG001)
    );
    assert_eq!(RuleSet::select("FHG00"), Ok(RuleSet::all()));
    assert_eq!(RuleSet::select(" , "), Ok(RuleSet::empty()));
}

#[test]
fn test_select_unknown_prefix() {
    assert_eq!(
        RuleSet::select("FHG005,E501"),
        Err(RuleSelectError::UnknownPrefix {
            prefix: "E501".to_string()
        })
    );
    assert_eq!(
        RuleSet::select("FHG0071").map_err(|e| e.to_string()),
        Err("`FHG0071` does not match any rule code".to_string())
    );
}

#[test]
fn test_codes_in_order() {
    let set = RuleSet::FHG006 | RuleSet::FHG002;
    let codes: Vec<_> = set.codes().collect();
    assert_eq!(codes, vec![RuleCode::FHG002, RuleCode::FHG006]);
    assert!(set.is_enabled(RuleCode::FHG002));
    assert!(!set.is_enabled(RuleCode::FHG003));
}
