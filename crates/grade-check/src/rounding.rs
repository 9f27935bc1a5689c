//! Rounding conventions differ between languages, calculators and
//! spreadsheets: some round halves up, some to even, some toward the
//! nearest 0 or 5. Permutation helpers enumerate every plausible rounded
//! form of a target so any of them can be accepted as an answer.

use std::fmt::{self, Display};
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use grade_core::errors::{ErrorInfo, GradeError};
use grade_core::Numeric;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A single rule for quantizing a decimal to a fixed number of places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingRule {
    /// Ties round toward zero.
    HalfDown,
    /// Ties round to the even neighbour (banker's rounding).
    HalfEven,
    /// Ties round away from zero.
    HalfUp,
    /// Truncate, then round away from zero when the kept digit is 0 or 5.
    #[serde(rename = "05up")]
    ZeroFiveUp,
    /// Always toward positive infinity.
    Ceiling,
    /// Always toward negative infinity.
    Floor,
    /// Always away from zero.
    Up,
    /// Always toward zero.
    Down,
}

impl RoundingRule {
    /// Rules used when enumerating plausible rounded forms of an answer.
    pub const PLAUSIBLE: [RoundingRule; 4] = [
        RoundingRule::HalfDown,
        RoundingRule::HalfEven,
        RoundingRule::HalfUp,
        RoundingRule::ZeroFiveUp,
    ];

    /// Every supported rule.
    pub const ALL: [RoundingRule; 8] = [
        RoundingRule::HalfDown,
        RoundingRule::HalfEven,
        RoundingRule::HalfUp,
        RoundingRule::ZeroFiveUp,
        RoundingRule::Ceiling,
        RoundingRule::Floor,
        RoundingRule::Up,
        RoundingRule::Down,
    ];

    /// Stable identifier used in reports and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            RoundingRule::HalfDown => "half-down",
            RoundingRule::HalfEven => "half-even",
            RoundingRule::HalfUp => "half-up",
            RoundingRule::ZeroFiveUp => "05up",
            RoundingRule::Ceiling => "ceiling",
            RoundingRule::Floor => "floor",
            RoundingRule::Up => "up",
            RoundingRule::Down => "down",
        }
    }

    fn mode(self) -> Option<RoundingMode> {
        match self {
            RoundingRule::HalfDown => Some(RoundingMode::HalfDown),
            RoundingRule::HalfEven => Some(RoundingMode::HalfEven),
            RoundingRule::HalfUp => Some(RoundingMode::HalfUp),
            RoundingRule::Ceiling => Some(RoundingMode::Ceiling),
            RoundingRule::Floor => Some(RoundingMode::Floor),
            RoundingRule::Up => Some(RoundingMode::Up),
            RoundingRule::Down => Some(RoundingMode::Down),
            RoundingRule::ZeroFiveUp => None,
        }
    }
}

impl Display for RoundingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingRule {
    type Err = GradeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim().to_ascii_lowercase().replace('_', "-");
        if needle == "zero-five-up" {
            return Ok(RoundingRule::ZeroFiveUp);
        }
        RoundingRule::ALL
            .into_iter()
            .find(|rule| rule.name() == needle)
            .ok_or_else(|| {
                GradeError::Rounding(
                    ErrorInfo::new("unknown-rule", "unrecognised rounding rule")
                        .with_context("rule", raw)
                        .with_hint(concat!(
                            "expected one of half-down, half-even, half-up, 05up, ",
                            "ceiling, floor, up, down"
                        )),
                )
            })
    }
}

/// Largest number of fractional places accepted by the rounding helpers.
///
/// Matches the 28 significant digits of a default decimal context; the
/// quantized value is materialized digit by digit, so the bound also keeps
/// memory use proportional to the request.
pub const MAX_PLACES: u32 = 28;

/// Quantizes `value` to `places` fractional digits using `rule`.
///
/// Callers are expected to keep `places` within [`MAX_PLACES`];
/// [`round_each`] and the permutation helpers enforce it.
pub fn round_with(value: &BigDecimal, places: u32, rule: RoundingRule) -> BigDecimal {
    let scale = i64::from(places);
    if let Some(mode) = rule.mode() {
        return value.with_scale_round(scale, mode);
    }

    let truncated = value.with_scale_round(scale, RoundingMode::Down);
    if &truncated == value {
        return truncated;
    }
    let (digits, _) = truncated.as_bigint_and_exponent();
    let last = (digits.magnitude() % 10u32).to_u32().unwrap_or(1);
    if last == 0 || last == 5 {
        value.with_scale_round(scale, RoundingMode::Up)
    } else {
        truncated
    }
}

/// Rounds `target` once per rule, keeping the rule alongside each result.
pub fn round_each(
    target: impl Into<Numeric>,
    places: u32,
    rules: &[RoundingRule],
) -> Result<Vec<(RoundingRule, BigDecimal)>, GradeError> {
    if rules.is_empty() {
        return Err(GradeError::Rounding(ErrorInfo::new(
            "empty-rules",
            "at least one rounding rule must be supplied",
        )));
    }
    if places > MAX_PLACES {
        return Err(GradeError::Rounding(
            ErrorInfo::new("places-out-of-range", "too many decimal places requested")
                .with_context("places", places.to_string())
                .with_hint(format!("use at most {MAX_PLACES} places")),
        ));
    }
    let target: Numeric = target.into();
    let raw = target.to_decimal()?;
    Ok(rules
        .iter()
        .map(|rule| (*rule, round_with(&raw, places, *rule)))
        .collect())
}

/// Returns the distinct rounded forms of `target` under `rules`, in rule order.
pub fn rounding_permutations_with(
    target: impl Into<Numeric>,
    places: u32,
    rules: &[RoundingRule],
) -> Result<Vec<BigDecimal>, GradeError> {
    let mut distinct: Vec<BigDecimal> = Vec::with_capacity(rules.len());
    for (_, value) in round_each(target, places, rules)? {
        if !distinct.contains(&value) {
            distinct.push(value);
        }
    }
    Ok(distinct)
}

/// Returns the distinct rounded forms of `target` under the plausible rules.
pub fn rounding_permutations(
    target: impl Into<Numeric>,
    places: u32,
) -> Result<Vec<BigDecimal>, GradeError> {
    rounding_permutations_with(target, places, &RoundingRule::PLAUSIBLE)
}

/// Plausible rounded forms at two decimal places.
pub fn permutations_2dp(target: impl Into<Numeric>) -> Result<Vec<BigDecimal>, GradeError> {
    rounding_permutations(target, 2)
}

/// Plausible rounded forms at one decimal place.
pub fn permutations_1dp(target: impl Into<Numeric>) -> Result<Vec<BigDecimal>, GradeError> {
    rounding_permutations(target, 1)
}

/// Plausible rounded forms as whole numbers.
pub fn permutations_int(target: impl Into<Numeric>) -> Result<Vec<BigDecimal>, GradeError> {
    rounding_permutations(target, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(raw: &str) -> BigDecimal {
        BigDecimal::from_str(raw).unwrap()
    }

    #[test]
    fn zero_five_up_rounds_away_only_after_zero_or_five() {
        assert_eq!(round_with(&dec("1.501"), 2, RoundingRule::ZeroFiveUp), dec("1.51"));
        assert_eq!(round_with(&dec("1.009"), 2, RoundingRule::ZeroFiveUp), dec("1.01"));
        assert_eq!(round_with(&dec("1.519"), 2, RoundingRule::ZeroFiveUp), dec("1.51"));
        assert_eq!(round_with(&dec("-1.551"), 2, RoundingRule::ZeroFiveUp), dec("-1.56"));
        assert_eq!(round_with(&dec("1.50"), 2, RoundingRule::ZeroFiveUp), dec("1.50"));
    }

    #[test]
    fn parses_rule_names() {
        assert_eq!(RoundingRule::from_str("half_even").unwrap(), RoundingRule::HalfEven);
        assert_eq!(RoundingRule::from_str("05UP").unwrap(), RoundingRule::ZeroFiveUp);
        assert_eq!(RoundingRule::from_str("zero-five-up").unwrap(), RoundingRule::ZeroFiveUp);
        assert_eq!(
            RoundingRule::from_str("sideways").unwrap_err().info().code,
            "unknown-rule"
        );
    }

    #[test]
    fn empty_rule_set_is_rejected() {
        let err = rounding_permutations_with(1.5, 0, &[]).unwrap_err();
        assert_eq!(err.info().code, "empty-rules");
    }

    #[test]
    fn places_beyond_the_cap_are_rejected() {
        let err = round_each(1.5, MAX_PLACES + 1, &RoundingRule::PLAUSIBLE).unwrap_err();
        assert!(matches!(err, GradeError::Rounding(_)));
        assert_eq!(err.info().code, "places-out-of-range");
    }
}
