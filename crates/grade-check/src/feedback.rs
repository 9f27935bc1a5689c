use serde::{Deserialize, Serialize};

/// Pair of messages shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Printed when the answer is accepted.
    pub success: String,
    /// Printed when the answer is rejected.
    pub failure: String,
}

impl Feedback {
    /// Creates feedback from its success and failure messages.
    pub fn new(success: impl Into<String>, failure: impl Into<String>) -> Self {
        Self {
            success: success.into(),
            failure: failure.into(),
        }
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new("Correct!", "I don't think that's the right answer...")
    }
}

/// Outcome of a single grading decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The answer matched.
    Correct,
    /// The answer did not match.
    Incorrect,
}

impl Verdict {
    /// Maps a boolean condition onto a verdict.
    pub fn from_condition(condition: bool) -> Self {
        if condition {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    /// Returns whether the answer was accepted.
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }

    /// Selects the message matching this verdict.
    pub fn message(self, feedback: &Feedback) -> &str {
        match self {
            Verdict::Correct => &feedback.success,
            Verdict::Incorrect => &feedback.failure,
        }
    }
}
