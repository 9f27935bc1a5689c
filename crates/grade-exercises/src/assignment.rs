use grade_check::{validate_floats, Expected, Feedback, FeedbackSink, Tolerance, Verdict};
use grade_core::errors::GradeError;
use grade_core::Numeric;

use crate::catalog::Exercise;

/// Total the learner is asked to compute.
pub const EXPECTED_TOTAL: i64 = 210;

const FAILURE: &str = "I don't think that's the right answer...";

/// Assignment total: a single exact figure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assignment;

impl Exercise for Assignment {
    fn id(&self) -> &'static str {
        "assignment"
    }

    fn summary(&self) -> &'static str {
        "Compute the assignment total in dollars"
    }

    fn expected(&self) -> Result<Expected, GradeError> {
        Ok(Expected::one(EXPECTED_TOTAL))
    }

    fn feedback(&self, given: &Numeric) -> Feedback {
        Feedback::new(
            format!("Your answer was ${:.2}! Good job!", given.to_f64()),
            FAILURE,
        )
    }
}

/// Checks a learner's assignment total and emits one line of feedback.
pub fn check_assignment<S: FeedbackSink>(
    amount: impl Into<Numeric>,
    sink: S,
) -> Result<Verdict, GradeError> {
    let amount: Numeric = amount.into();
    let exercise = Assignment;
    validate_floats(
        amount.clone(),
        &exercise.expected()?,
        &exercise.feedback(&amount),
        &Tolerance::default(),
        sink,
    )
}
