use grade_check::{grade, Expected, Feedback, FeedbackSink, GradeReport, Tolerance};
use grade_core::errors::{ErrorInfo, GradeError};
use grade_core::Numeric;

use crate::assignment::Assignment;
use crate::electricity::ElectricityBill;

/// A gradeable exercise with a fixed set of acceptable answers.
pub trait Exercise {
    /// Stable identifier used on the command line and in reports.
    fn id(&self) -> &'static str;

    /// One-line description of what the learner computes.
    fn summary(&self) -> &'static str;

    /// Acceptable answers.
    fn expected(&self) -> Result<Expected, GradeError>;

    /// Messages for a given answer; the success message may quote it.
    fn feedback(&self, given: &Numeric) -> Feedback;

    /// Grades `given`, emitting one feedback line to `sink`.
    fn check(
        &self,
        given: Numeric,
        tolerance: &Tolerance,
        sink: &mut dyn FeedbackSink,
    ) -> Result<GradeReport, GradeError> {
        let expected = self.expected()?;
        let feedback = self.feedback(&given);
        grade(self.id(), given, &expected, &feedback, tolerance, sink)
    }
}

/// Every registered exercise, ordered by identifier.
pub fn catalog() -> Vec<Box<dyn Exercise>> {
    vec![Box::new(Assignment), Box::new(ElectricityBill)]
}

/// Looks up an exercise by identifier.
pub fn find(id: &str) -> Result<Box<dyn Exercise>, GradeError> {
    catalog()
        .into_iter()
        .find(|exercise| exercise.id() == id)
        .ok_or_else(|| {
            let known: Vec<&str> = catalog().iter().map(|exercise| exercise.id()).collect();
            GradeError::Exercise(
                ErrorInfo::new("unknown-exercise", "no exercise with this identifier")
                    .with_context("id", id)
                    .with_hint(format!("known exercises: {}", known.join(", "))),
            )
        })
}
