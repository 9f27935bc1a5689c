use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    check::{self, CheckArgs},
    compare::{self, CompareArgs},
    list,
    round::{self, RoundArgs},
    version::{self, VersionArgs},
};

mod commands;
mod policy;

#[derive(Parser, Debug)]
#[command(name = "grade", about = "Grade numeric answers against acceptable values")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Grade an answer for a registered exercise.
    Check(CheckArgs),
    /// Compare an answer against ad-hoc expected values.
    Compare(CompareArgs),
    /// Print the plausible rounded forms of a number.
    Round(RoundArgs),
    /// List registered exercises.
    List,
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Check(args) => check::run(&args),
        Command::Compare(args) => compare::run(&args),
        Command::Round(args) => round::run(&args),
        Command::List => list::run(),
        Command::Version(args) => version::run(&args),
    }
}
