use std::str::FromStr;

use grade_check::{MemorySink, Tolerance, Verdict};
use grade_core::{BigDecimal, GradeError, Numeric};
use grade_exercises::electricity::{bill_candidates, bill_per_user, electricity_bill, gross_margin};
use grade_exercises::{catalog, check_price, find};

#[test]
fn bill_figures_follow_the_tariff() {
    assert!((electricity_bill() - 54.0).abs() < 1e-9);
    assert!((gross_margin() - 123.0).abs() < 1e-9);
    assert!((bill_per_user() - 8.2).abs() < 1e-9);
}

#[test]
fn bill_accepts_rounded_and_unrounded_forms() -> Result<(), GradeError> {
    let candidates = bill_candidates()?;
    let rendered: Vec<String> = candidates.candidates().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["8.20", "8.2"]);

    let mut sink = MemorySink::new();
    assert_eq!(check_price(8.2, &mut sink)?, Verdict::Correct);
    assert_eq!(
        check_price(BigDecimal::from_str("8.20").unwrap(), &mut sink)?,
        Verdict::Correct
    );
    assert_eq!(check_price(8.1, &mut sink)?, Verdict::Incorrect);
    assert_eq!(
        sink.lines,
        vec![
            "That's right! Sheeeeeesh!".to_string(),
            "That's right! Sheeeeeesh!".to_string(),
            "I don't think that's the right answer...".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn catalog_lists_every_exercise_once() {
    let ids: Vec<&str> = catalog().iter().map(|exercise| exercise.id()).collect();
    assert_eq!(ids, vec!["assignment", "electricity-bill"]);
}

#[test]
fn lookup_grades_through_the_trait() -> Result<(), GradeError> {
    let exercise = find("assignment")?;
    let mut sink = MemorySink::new();
    let report = exercise.check(Numeric::Float(210.0), &Tolerance::default(), &mut sink)?;
    assert_eq!(report.exercise, "assignment");
    assert_eq!(report.verdict, Verdict::Correct);
    assert_eq!(report.matched.as_deref(), Some("210"));
    assert_eq!(sink.last(), Some("Your answer was $210.00! Good job!"));
    Ok(())
}

#[test]
fn unknown_exercise_lists_known_ids() {
    let err = find("tax-return").err().unwrap();
    assert_eq!(err.info().code, "unknown-exercise");
    assert_eq!(
        err.info().hint.as_deref(),
        Some("known exercises: assignment, electricity-bill")
    );
}
