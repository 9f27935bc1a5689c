use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use grade_check::WriterSink;
use grade_core::Numeric;
use grade_exercises::find;

use crate::policy::ToleranceArgs;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Exercise identifier, see `grade list`.
    #[arg(long)]
    pub exercise: String,
    /// The learner's answer.
    #[arg(long, allow_negative_numbers = true)]
    pub answer: Numeric,
    #[command(flatten)]
    pub tolerance: ToleranceArgs,
    /// Optional path receiving the JSON grade report.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Grades a single answer and prints one feedback line.
pub fn run(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    let exercise = find(&args.exercise)?;
    let tolerance = args.tolerance.resolve()?;
    let mut sink = WriterSink::stdout();
    let report = exercise.check(args.answer.clone(), &tolerance, &mut sink)?;
    if let Some(path) = &args.report {
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, report.to_bytes()?)?;
    }
    Ok(())
}
