use bigdecimal::BigDecimal;
use grade_core::errors::{ErrorInfo, GradeError};
use grade_core::Numeric;
use serde::{Deserialize, Serialize};

use crate::rounding::rounding_permutations;

fn empty_expected() -> GradeError {
    GradeError::Expectation(
        ErrorInfo::new("empty-expected", "expected value list must not be empty")
            .with_hint("supply at least one acceptable answer"),
    )
}

/// Acceptable answers for a single question.
///
/// A list matches when any one of its elements matches. Serialized as
/// `{"one": 210}` or `{"any_of": [8.2, "8.20"]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    /// Exactly one acceptable value.
    One(Numeric),
    /// Several acceptable values, checked in order.
    AnyOf(Vec<Numeric>),
}

impl Expected {
    /// Accepts a single value.
    pub fn one(value: impl Into<Numeric>) -> Self {
        Expected::One(value.into())
    }

    /// Accepts any of the provided values; the list must be non-empty.
    pub fn any_of<I, T>(values: I) -> Result<Self, GradeError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Numeric>,
    {
        let values: Vec<Numeric> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(empty_expected());
        }
        Ok(Expected::AnyOf(values))
    }

    /// Accepts every plausible rounding of `target` at `places` as well as
    /// the unrounded target itself.
    pub fn rounded_or_exact(target: impl Into<Numeric>, places: u32) -> Result<Self, GradeError> {
        let target: Numeric = target.into();
        let mut values: Vec<Numeric> = rounding_permutations(target.clone(), places)?
            .into_iter()
            .map(Numeric::Decimal)
            .collect();
        values.push(target);
        Ok(Expected::AnyOf(values))
    }

    /// Returns the candidate values in order.
    pub fn candidates(&self) -> &[Numeric] {
        match self {
            Expected::One(value) => std::slice::from_ref(value),
            Expected::AnyOf(values) => values,
        }
    }

    /// Fails when a list was built without going through [`Expected::any_of`].
    pub fn validate(&self) -> Result<(), GradeError> {
        if self.candidates().is_empty() {
            return Err(empty_expected());
        }
        Ok(())
    }
}

impl From<Numeric> for Expected {
    fn from(value: Numeric) -> Self {
        Expected::One(value)
    }
}

impl From<f64> for Expected {
    fn from(value: f64) -> Self {
        Expected::one(value)
    }
}

impl From<i64> for Expected {
    fn from(value: i64) -> Self {
        Expected::one(value)
    }
}

impl From<i32> for Expected {
    fn from(value: i32) -> Self {
        Expected::one(value)
    }
}

impl From<BigDecimal> for Expected {
    fn from(value: BigDecimal) -> Self {
        Expected::one(value)
    }
}

impl From<Vec<Numeric>> for Expected {
    fn from(values: Vec<Numeric>) -> Self {
        Expected::AnyOf(values)
    }
}

impl From<Vec<f64>> for Expected {
    fn from(values: Vec<f64>) -> Self {
        Expected::AnyOf(values.into_iter().map(Numeric::Float).collect())
    }
}

impl From<Vec<BigDecimal>> for Expected {
    fn from(values: Vec<BigDecimal>) -> Self {
        Expected::AnyOf(values.into_iter().map(Numeric::Decimal).collect())
    }
}
