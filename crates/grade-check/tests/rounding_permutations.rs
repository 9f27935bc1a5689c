use std::str::FromStr;

use grade_check::rounding::{round_each, MAX_PLACES};
use grade_check::{
    permutations_1dp, permutations_2dp, permutations_int, round_with, rounding_permutations_with,
    RoundingRule,
};
use grade_core::{format_decimal, BigDecimal, GradeError, Numeric};

fn dec(raw: &str) -> BigDecimal {
    BigDecimal::from_str(raw).unwrap()
}

fn rendered(values: &[BigDecimal]) -> Vec<String> {
    values.iter().map(format_decimal).collect()
}

#[test]
fn two_places_include_conventional_rounding() -> Result<(), GradeError> {
    let values = permutations_2dp(8.1966)?;
    assert!(values.contains(&dec("8.20")));
    assert_eq!(rendered(&values), vec!["8.20", "8.19"]);
    Ok(())
}

#[test]
fn ties_split_across_conventions() -> Result<(), GradeError> {
    assert_eq!(rendered(&permutations_2dp(2.675)?), vec!["2.67", "2.68"]);
    assert_eq!(rendered(&permutations_2dp(2.665)?), vec!["2.66", "2.67"]);
    assert_eq!(rendered(&permutations_1dp(0.15)?), vec!["0.1", "0.2"]);
    Ok(())
}

#[test]
fn whole_numbers_round_both_ways_on_halves() -> Result<(), GradeError> {
    assert_eq!(rendered(&permutations_int(2.5)?), vec!["2", "3"]);
    assert_eq!(rendered(&permutations_int(-2.5)?), vec!["-2", "-3"]);
    assert_eq!(rendered(&permutations_int(7)?), vec!["7"]);
    Ok(())
}

#[test]
fn each_rule_is_reported_in_order() -> Result<(), GradeError> {
    let table = round_each(2.675, 2, &RoundingRule::PLAUSIBLE)?;
    let rules: Vec<RoundingRule> = table.iter().map(|(rule, _)| *rule).collect();
    assert_eq!(rules, RoundingRule::PLAUSIBLE.to_vec());
    let values: Vec<String> = table.iter().map(|(_, value)| value.to_string()).collect();
    assert_eq!(values, vec!["2.67", "2.68", "2.68", "2.67"]);
    Ok(())
}

#[test]
fn directed_rules_are_available_on_request() -> Result<(), GradeError> {
    let values = rounding_permutations_with(
        -1.234,
        2,
        &[RoundingRule::Ceiling, RoundingRule::Floor, RoundingRule::Up, RoundingRule::Down],
    )?;
    assert_eq!(rendered(&values), vec!["-1.23", "-1.24"]);
    assert_eq!(round_with(&dec("1.001"), 2, RoundingRule::Up), dec("1.01"));
    Ok(())
}

#[test]
fn decimals_round_without_float_noise() -> Result<(), GradeError> {
    let values = permutations_2dp(dec("0.125"))?;
    assert_eq!(rendered(&values), vec!["0.12", "0.13"]);
    Ok(())
}

#[test]
fn non_finite_targets_are_rejected() {
    let err = permutations_2dp(f64::NAN).unwrap_err();
    assert_eq!(err.info().code, "non-finite");
}

#[test]
fn rounded_zero_keeps_its_places() -> Result<(), GradeError> {
    let values = permutations_2dp(0.001)?;
    assert_eq!(rendered(&values), vec!["0.00", "0.01"]);
    assert_eq!(Numeric::Decimal(values[0].clone()).to_string(), "0.00");
    assert_eq!(rendered(&permutations_1dp(-0.01)?), vec!["0.0", "-0.1"]);
    Ok(())
}

#[test]
fn place_count_is_bounded() -> Result<(), GradeError> {
    assert_eq!(rounding_permutations_with(1.5, MAX_PLACES, &[RoundingRule::HalfUp])?.len(), 1);
    for places in [MAX_PLACES + 1, u32::MAX] {
        let err = rounding_permutations_with(1.5, places, &RoundingRule::PLAUSIBLE).unwrap_err();
        assert!(matches!(err, GradeError::Rounding(_)));
        assert_eq!(err.info().code, "places-out-of-range");
        assert_eq!(err.info().context.get("places"), Some(&places.to_string()));
    }
    Ok(())
}
