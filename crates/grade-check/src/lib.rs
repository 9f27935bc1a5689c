#![deny(missing_docs)]
#![doc = "Tolerance comparison, rounding permutations and feedback helpers for graded answers."]

/// Expected value sets accepted by the validators.
pub mod expected;
/// Success and failure messages plus the verdict type.
pub mod feedback;
/// Serializable grading reports.
pub mod report;
/// Decimal rounding rules and permutation generation.
pub mod rounding;
/// JSON helpers for reports.
pub mod serde;
/// Output sinks receiving feedback lines.
pub mod sink;
/// Relative and absolute tolerance policy.
pub mod tolerance;
/// Answer validation entry points.
pub mod validate;

pub use expected::Expected;
pub use feedback::{Feedback, Verdict};
pub use report::GradeReport;
pub use rounding::{
    permutations_1dp, permutations_2dp, permutations_int, round_with, rounding_permutations,
    rounding_permutations_with, RoundingRule,
};
pub use sink::{FeedbackSink, MemorySink, WriterSink};
pub use tolerance::Tolerance;
pub use validate::{grade, matching_candidate, validate_condition, validate_float, validate_floats};
