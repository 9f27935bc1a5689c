//! A server draws a constant load for a month; the electricity cost plus a
//! fixed profit is split evenly between its users. Learners may report the
//! per-user bill either unrounded or rounded to cents under any convention.

use grade_check::{validate_floats, Expected, Feedback, FeedbackSink, Tolerance, Verdict};
use grade_core::errors::GradeError;
use grade_core::Numeric;

use crate::catalog::Exercise;

/// Constant draw in watts.
pub const WATTAGE: f64 = 300.0;
/// Tariff in cents per kWh.
pub const RATE_CENTS_PER_KWH: f64 = 25.0;
/// Hours in the billing month.
pub const HOURS_PER_MONTH: f64 = 30.0 * 24.0;
/// Fixed profit added on top of the bill, in dollars.
pub const PROFIT: f64 = 69.0;
/// Users sharing the cost.
pub const USER_COUNT: f64 = 15.0;

const SUCCESS: &str = "That's right! Sheeeeeesh!";
const FAILURE: &str = "I don't think that's the right answer...";

/// Monthly electricity cost in dollars.
pub fn electricity_bill() -> f64 {
    let kilowatts = WATTAGE / 1000.0;
    RATE_CENTS_PER_KWH * kilowatts * HOURS_PER_MONTH / 100.0
}

/// Electricity cost plus profit.
pub fn gross_margin() -> f64 {
    electricity_bill() + PROFIT
}

/// Amount each user pays.
pub fn bill_per_user() -> f64 {
    gross_margin() / USER_COUNT
}

/// Cent-rounded forms of the per-user bill plus the unrounded bill.
pub fn bill_candidates() -> Result<Expected, GradeError> {
    Expected::rounded_or_exact(bill_per_user(), 2)
}

/// Per-user electricity bill split.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElectricityBill;

impl Exercise for ElectricityBill {
    fn id(&self) -> &'static str {
        "electricity-bill"
    }

    fn summary(&self) -> &'static str {
        "Split a month of server electricity plus profit between users"
    }

    fn expected(&self) -> Result<Expected, GradeError> {
        bill_candidates()
    }

    fn feedback(&self, _given: &Numeric) -> Feedback {
        Feedback::new(SUCCESS, FAILURE)
    }
}

/// Checks a learner's per-user price and emits one line of feedback.
pub fn check_price<S: FeedbackSink>(
    amount: impl Into<Numeric>,
    sink: S,
) -> Result<Verdict, GradeError> {
    let amount: Numeric = amount.into();
    let exercise = ElectricityBill;
    validate_floats(
        amount.clone(),
        &exercise.expected()?,
        &exercise.feedback(&amount),
        &Tolerance::default(),
        sink,
    )
}
