use grade_core::errors::{ErrorInfo, GradeError};
use serde::{Deserialize, Serialize};

fn tolerance_error(code: &str, message: impl Into<String>, value: f64) -> GradeError {
    GradeError::Tolerance(
        ErrorInfo::new(code, message.into()).with_context("value", value.to_string()),
    )
}

/// Tolerance policy applied when comparing a given answer with an expected value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Tolerance {
    /// Maximum difference relative to the larger magnitude of the two values.
    #[serde(default = "Tolerance::default_rel_tol")]
    pub rel_tol: f64,
    /// Minimum absolute difference always accepted, useful near zero.
    #[serde(default = "Tolerance::default_abs_tol")]
    pub abs_tol: f64,
}

impl Tolerance {
    const fn default_rel_tol() -> f64 {
        1e-5
    }

    const fn default_abs_tol() -> f64 {
        0.0
    }

    /// Builds a validated tolerance policy.
    pub fn new(rel_tol: f64, abs_tol: f64) -> Result<Self, GradeError> {
        let tolerance = Self { rel_tol, abs_tol };
        tolerance.validate()?;
        Ok(tolerance)
    }

    /// Rejects negative or non-finite tolerances, e.g. after deserializing.
    pub fn validate(&self) -> Result<(), GradeError> {
        if !self.rel_tol.is_finite() || self.rel_tol < 0.0 {
            return Err(tolerance_error(
                "invalid-rel-tol",
                "relative tolerance must be finite and non-negative",
                self.rel_tol,
            ));
        }
        if !self.abs_tol.is_finite() || self.abs_tol < 0.0 {
            return Err(tolerance_error(
                "invalid-abs-tol",
                "absolute tolerance must be finite and non-negative",
                self.abs_tol,
            ));
        }
        Ok(())
    }

    /// Returns whether `a` and `b` are close under this policy.
    ///
    /// Identical values are always close. Infinities are only close to
    /// themselves and NaN is never close to anything.
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if a.is_infinite() || b.is_infinite() {
            return false;
        }
        let diff = (a - b).abs();
        diff <= self.rel_tol * a.abs().max(b.abs()) || diff <= self.abs_tol
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rel_tol: Self::default_rel_tol(),
            abs_tol: Self::default_abs_tol(),
        }
    }
}
