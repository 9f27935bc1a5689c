use std::error::Error;

use clap::Args;
use grade_check::{validate_floats, Expected, Feedback, WriterSink};
use grade_core::Numeric;

use crate::policy::ToleranceArgs;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// The learner's answer.
    #[arg(long, allow_negative_numbers = true)]
    pub given: Numeric,
    /// Acceptable answers; any match passes.
    #[arg(long, required = true, num_args = 1.., allow_negative_numbers = true)]
    pub expected: Vec<Numeric>,
    /// Also accept every plausible rounding of each expected value at this many places.
    #[arg(long)]
    pub round_places: Option<u32>,
    /// Message printed on success.
    #[arg(long, default_value = "Correct!")]
    pub success: String,
    /// Message printed on failure.
    #[arg(long, default_value = "I don't think that's the right answer...")]
    pub failure: String,
    #[command(flatten)]
    pub tolerance: ToleranceArgs,
}

fn expected_values(args: &CompareArgs) -> Result<Expected, Box<dyn Error>> {
    let Some(places) = args.round_places else {
        return Ok(Expected::any_of(args.expected.iter().cloned())?);
    };
    let mut values = Vec::new();
    for target in &args.expected {
        let rounded = Expected::rounded_or_exact(target.clone(), places)?;
        values.extend(rounded.candidates().iter().cloned());
    }
    Ok(Expected::any_of(values)?)
}

/// Compares an answer against ad-hoc expectations and prints one feedback line.
pub fn run(args: &CompareArgs) -> Result<(), Box<dyn Error>> {
    let tolerance = args.tolerance.resolve()?;
    let expected = expected_values(args)?;
    let feedback = Feedback::new(args.success.clone(), args.failure.clone());
    validate_floats(
        args.given.clone(),
        &expected,
        &feedback,
        &tolerance,
        WriterSink::stdout(),
    )?;
    Ok(())
}
