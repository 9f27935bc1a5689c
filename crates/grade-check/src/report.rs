use grade_core::errors::GradeError;
use serde::{Deserialize, Serialize};

use crate::feedback::Verdict;
use crate::serde::to_json_bytes;
use crate::tolerance::Tolerance;

/// Record of one grading decision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradeReport {
    /// Exercise identifier the answer was graded against.
    pub exercise: String,
    /// The answer as submitted.
    pub given: String,
    /// Outcome of the comparison.
    pub verdict: Verdict,
    /// Message emitted to the learner.
    pub message: String,
    /// First candidate within tolerance of the answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
    /// All acceptable answers in the order they were checked.
    pub candidates: Vec<String>,
    /// Tolerance applied during the comparison.
    pub tolerance: Tolerance,
}

impl GradeReport {
    /// Serializes the report as pretty JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GradeError> {
        to_json_bytes(self)
    }
}
