use std::error::Error;

use clap::Args;
use grade_check::rounding::round_each;
use grade_check::{rounding_permutations_with, RoundingRule};
use grade_core::{format_decimal, Numeric};

#[derive(Args, Debug)]
pub struct RoundArgs {
    /// Number to round.
    #[arg(long, allow_negative_numbers = true)]
    pub target: Numeric,
    /// Fractional digits to keep, at most 28.
    #[arg(long, default_value_t = 2)]
    pub places: u32,
    /// Rounding rules to apply; defaults to half-down, half-even, half-up and 05up.
    #[arg(long = "rule", value_name = "RULE")]
    pub rules: Vec<RoundingRule>,
    /// Print one `rule<TAB>value` row per rule instead of the distinct values.
    #[arg(long)]
    pub table: bool,
}

/// Prints the rounded forms of the target, one per line.
pub fn run(args: &RoundArgs) -> Result<(), Box<dyn Error>> {
    let rules = if args.rules.is_empty() {
        RoundingRule::PLAUSIBLE.to_vec()
    } else {
        args.rules.clone()
    };
    if args.table {
        for (rule, value) in round_each(args.target.clone(), args.places, &rules)? {
            println!("{rule}\t{}", format_decimal(&value));
        }
        return Ok(());
    }
    for value in rounding_permutations_with(args.target.clone(), args.places, &rules)? {
        println!("{}", format_decimal(&value));
    }
    Ok(())
}
