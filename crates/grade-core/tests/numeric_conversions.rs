use std::str::FromStr;

use grade_core::{BigDecimal, GradeError, Numeric};

#[test]
fn floats_convert_through_shortest_representation() -> Result<(), GradeError> {
    let value = Numeric::from(2.675_f64);
    assert_eq!(value.to_decimal()?, BigDecimal::from_str("2.675").unwrap());

    let whole = Numeric::from(210);
    assert_eq!(whole.to_decimal()?, BigDecimal::from(210));
    assert_eq!(whole.to_f64(), 210.0);
    Ok(())
}

#[test]
fn non_finite_floats_have_no_decimal() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = Numeric::from(value).to_decimal().unwrap_err();
        assert_eq!(err.info().code, "non-finite");
    }
}

#[test]
fn decimals_keep_their_scale_when_displayed() {
    let value = Numeric::from(BigDecimal::from_str("8.20").unwrap());
    assert_eq!(value.to_string(), "8.20");
    assert!((value.to_f64() - 8.2).abs() < 1e-12);
}

#[test]
fn parsing_prefers_integers() {
    assert_eq!(Numeric::from_str("210").unwrap(), Numeric::Int(210));
    assert_eq!(Numeric::from_str(" 8.2 ").unwrap(), Numeric::Float(8.2));
    let err = Numeric::from_str("eight").unwrap_err();
    assert_eq!(err.info().code, "invalid-number");
    assert_eq!(err.info().context.get("input").map(String::as_str), Some("eight"));
}
