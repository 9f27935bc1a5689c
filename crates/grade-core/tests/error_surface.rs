use std::str::FromStr;

use grade_core::errors::GradeError;
use grade_core::Numeric;

#[test]
fn unparsable_answer_is_a_serde_error() {
    let err = Numeric::from_str("eight").unwrap_err();
    assert!(matches!(err, GradeError::Serde(_)));
    assert_eq!(err.info().code, "invalid-number");
    assert_eq!(err.info().context.get("input").map(String::as_str), Some("eight"));
    assert!(err.info().hint.is_some());
}

#[test]
fn non_finite_parse_results_are_rejected() {
    for raw in ["nan", "NaN", "inf", "-inf", "infinity"] {
        let err = Numeric::from_str(raw).unwrap_err();
        assert!(matches!(err, GradeError::Serde(_)), "{raw} should not parse");
        assert_eq!(err.info().code, "invalid-number");
    }
    assert_eq!(Numeric::from_str("1e3").unwrap(), Numeric::Float(1000.0));
}

#[test]
fn non_finite_float_is_a_rounding_error() {
    let err = Numeric::Float(f64::NAN).to_decimal().unwrap_err();
    assert!(matches!(err, GradeError::Rounding(_)));
    assert_eq!(err.info().code, "non-finite");
    assert_eq!(err.info().context.get("value").map(String::as_str), Some("NaN"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = Numeric::from_str("eight").unwrap_err();
    assert_eq!(
        err.to_string(),
        "serde error: value is not a finite number (code: invalid-number) \
         | context: [input=eight] \
         | hint: pass an integer such as `210` or a float such as `8.2`"
    );

    let err = Numeric::Float(f64::INFINITY).to_decimal().unwrap_err();
    assert_eq!(
        err.to_string(),
        "rounding error: non-finite floats have no decimal representation (code: non-finite) \
         | context: [value=inf]"
    );
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = Numeric::Float(f64::NEG_INFINITY).to_decimal().unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["family"], "Rounding");
    assert_eq!(json["detail"]["code"], "non-finite");
    assert_eq!(json["detail"]["context"]["value"], "-inf");
    let decoded: GradeError = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, err);
}
