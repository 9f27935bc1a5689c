use grade_core::errors::GradeError;
use grade_core::Numeric;

use crate::expected::Expected;
use crate::feedback::{Feedback, Verdict};
use crate::report::GradeReport;
use crate::sink::FeedbackSink;
use crate::tolerance::Tolerance;

/// Returns whether `given` is within `tolerance` of `expected`.
pub fn validate_float(
    given: impl Into<Numeric>,
    expected: impl Into<Numeric>,
    tolerance: &Tolerance,
) -> bool {
    let given: Numeric = given.into();
    let expected: Numeric = expected.into();
    tolerance.is_close(given.to_f64(), expected.to_f64())
}

/// Returns the index of the first candidate matching `given`, if any.
pub fn matching_candidate(
    given: &Numeric,
    expected: &Expected,
    tolerance: &Tolerance,
) -> Result<Option<usize>, GradeError> {
    expected.validate()?;
    let given = given.to_f64();
    Ok(expected
        .candidates()
        .iter()
        .position(|candidate| tolerance.is_close(given, candidate.to_f64())))
}

/// Emits the success message when `condition` holds and the failure message otherwise.
pub fn validate_condition<S: FeedbackSink>(
    condition: bool,
    feedback: &Feedback,
    mut sink: S,
) -> Result<Verdict, GradeError> {
    let verdict = Verdict::from_condition(condition);
    sink.emit(verdict.message(feedback))?;
    Ok(verdict)
}

/// Compares `given` against the acceptable answers and emits the matching message.
pub fn validate_floats<S: FeedbackSink>(
    given: impl Into<Numeric>,
    expected: &Expected,
    feedback: &Feedback,
    tolerance: &Tolerance,
    sink: S,
) -> Result<Verdict, GradeError> {
    let given: Numeric = given.into();
    let matched = matching_candidate(&given, expected, tolerance)?;
    validate_condition(matched.is_some(), feedback, sink)
}

/// Same decision as [`validate_floats`], returned as a report for `exercise`.
pub fn grade<S: FeedbackSink>(
    exercise: &str,
    given: impl Into<Numeric>,
    expected: &Expected,
    feedback: &Feedback,
    tolerance: &Tolerance,
    sink: S,
) -> Result<GradeReport, GradeError> {
    let given: Numeric = given.into();
    let matched = matching_candidate(&given, expected, tolerance)?;
    let verdict = validate_condition(matched.is_some(), feedback, sink)?;
    Ok(GradeReport {
        exercise: exercise.to_string(),
        given: given.to_string(),
        verdict,
        message: verdict.message(feedback).to_string(),
        matched: matched.map(|idx| expected.candidates()[idx].to_string()),
        candidates: expected.candidates().iter().map(ToString::to_string).collect(),
        tolerance: *tolerance,
    })
}
