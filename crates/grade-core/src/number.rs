//! Numeric values accepted as answers and expectations.

use std::fmt::{self, Display};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, GradeError};

/// A given answer or an expected value.
///
/// Integers and floats come straight from learner code; decimals carry an
/// explicit scale and usually originate from a rounding step. JSON numbers
/// decode as integers or floats; decimal strings such as `"8.20"` decode as
/// decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    /// Whole number answer.
    Int(i64),
    /// Binary floating point answer.
    Float(f64),
    /// Fixed-point decimal value.
    Decimal(BigDecimal),
}

impl Numeric {
    /// Converts the value to `f64` for tolerance comparisons.
    ///
    /// Decimals outside the `f64` range collapse to NaN, which never compares
    /// close to anything.
    pub fn to_f64(&self) -> f64 {
        match self {
            Numeric::Int(value) => *value as f64,
            Numeric::Float(value) => *value,
            Numeric::Decimal(value) => value.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// Converts the value to a decimal suitable for quantizing.
    ///
    /// Floats use their shortest round-trip representation, so `2.675`
    /// becomes the decimal `2.675` rather than its binary expansion.
    pub fn to_decimal(&self) -> Result<BigDecimal, GradeError> {
        match self {
            Numeric::Int(value) => Ok(BigDecimal::from(*value)),
            Numeric::Decimal(value) => Ok(value.clone()),
            Numeric::Float(value) => {
                if !value.is_finite() {
                    return Err(GradeError::Rounding(
                        ErrorInfo::new(
                            "non-finite",
                            "non-finite floats have no decimal representation",
                        )
                        .with_context("value", value.to_string()),
                    ));
                }
                BigDecimal::from_str(&value.to_string()).map_err(|err| {
                    GradeError::Rounding(
                        ErrorInfo::new("decimal-conversion", err.to_string())
                            .with_context("value", value.to_string()),
                    )
                })
            }
        }
    }

    /// Returns whether the value is a finite number.
    pub fn is_finite(&self) -> bool {
        match self {
            Numeric::Int(_) | Numeric::Decimal(_) => true,
            Numeric::Float(value) => value.is_finite(),
        }
    }
}

/// Renders a decimal keeping its scale, including for zero.
///
/// `BigDecimal`'s own formatting drops the scale of zero, so a value
/// quantized to `0.00` would otherwise print as `0`.
pub fn format_decimal(value: &BigDecimal) -> String {
    let places = value.fractional_digit_count();
    if value.is_zero() && places > 0 {
        return format!("0.{}", "0".repeat(places as usize));
    }
    value.to_string()
}

impl Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Int(value) => write!(f, "{value}"),
            Numeric::Float(value) => write!(f, "{value}"),
            Numeric::Decimal(value) => f.write_str(&format_decimal(value)),
        }
    }
}

impl FromStr for Numeric {
    type Err = GradeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Numeric::Int(value));
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Numeric::Float(value)),
            _ => Err(GradeError::Serde(
                ErrorInfo::new("invalid-number", "value is not a finite number")
                    .with_context("input", raw)
                    .with_hint("pass an integer such as `210` or a float such as `8.2`"),
            )),
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Int(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Int(i64::from(value))
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Numeric::Int(i64::from(value))
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

impl From<f32> for Numeric {
    fn from(value: f32) -> Self {
        Numeric::Float(f64::from(value))
    }
}

impl From<BigDecimal> for Numeric {
    fn from(value: BigDecimal) -> Self {
        Numeric::Decimal(value)
    }
}

impl From<&BigDecimal> for Numeric {
    fn from(value: &BigDecimal) -> Self {
        Numeric::Decimal(value.clone())
    }
}
