use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use grade_check::Tolerance;

/// Tolerance flags shared by the grading commands.
#[derive(Args, Debug, Clone)]
pub struct ToleranceArgs {
    /// Policy YAML providing `rel_tol` and `abs_tol`.
    #[arg(long)]
    pub policy: Option<PathBuf>,
    /// Relative tolerance, overriding the policy file.
    #[arg(long = "rel-tol", allow_negative_numbers = true)]
    pub rel_tol: Option<f64>,
    /// Absolute tolerance, overriding the policy file.
    #[arg(long = "abs-tol", allow_negative_numbers = true)]
    pub abs_tol: Option<f64>,
}

fn load_policy(path: &Path) -> Result<Tolerance, Box<dyn Error>> {
    let bytes = fs::read(path)?;
    let tolerance: Tolerance = serde_yaml::from_slice(&bytes)?;
    Ok(tolerance)
}

impl ToleranceArgs {
    /// Resolves defaults, then the policy file, then explicit flags.
    pub fn resolve(&self) -> Result<Tolerance, Box<dyn Error>> {
        let mut tolerance = match &self.policy {
            Some(path) => load_policy(path)?,
            None => Tolerance::default(),
        };
        if let Some(rel_tol) = self.rel_tol {
            tolerance.rel_tol = rel_tol;
        }
        if let Some(abs_tol) = self.abs_tol {
            tolerance.abs_tol = abs_tol;
        }
        tolerance.validate()?;
        Ok(tolerance)
    }
}
