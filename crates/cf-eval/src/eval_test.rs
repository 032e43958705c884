use super::*;

fn params(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

#[test]
fn test_arithmetic() {
    let empty = BTreeMap::new();
    assert_eq!(evaluate("1 + 2 * 3", &empty).unwrap(), 7.0);
    assert_eq!(evaluate("(1 + 2) * 3", &empty).unwrap(), 9.0);
    assert_eq!(evaluate("10 / 4", &empty).unwrap(), 2.5);
    assert_eq!(evaluate("-3 + 5", &empty).unwrap(), 2.0);
}

#[test]
fn test_parameter_lookup() {
    let p = params(&[("san_nha", 120.0), ("so_tang", 3.0)]);
    assert_eq!(evaluate("san_nha * so_tang", &p).unwrap(), 360.0);
}

#[test]
fn test_prefix_name_never_collides() {
    // `width` and `wall_width` are independent parameters.
    let p = params(&[("width", 2.0), ("wall_width", 10.0)]);
    assert_eq!(evaluate("wall_width - width", &p).unwrap(), 8.0);
}

#[test]
fn test_unknown_parameter() {
    let p = params(&[("a", 5.0)]);
    assert_eq!(
        evaluate("a * unknown_var", &p),
        Err(EvalError::UnknownParameter("unknown_var".to_string()))
    );
}

#[test]
fn test_division_by_zero() {
    let p = params(&[("x", 7.0)]);
    assert_eq!(evaluate("10 / (x - x)", &p), Err(EvalError::DivisionByZero));
    assert_eq!(
        evaluate("1 / 0", &BTreeMap::new()),
        Err(EvalError::DivisionByZero)
    );
}

#[test]
fn test_result_is_finite() {
    // Overflow to infinity is rejected, not returned.
    let p = params(&[("big", f64::MAX)]);
    assert_eq!(evaluate("big * big", &p), Err(EvalError::DivisionByZero));
}

#[test]
fn test_malformed_is_error_not_zero() {
    let p = params(&[("a", 1.0)]);
    assert!(matches!(
        evaluate("a ** 2", &p),
        Err(EvalError::MalformedFormula { .. })
    ));
    assert!(matches!(
        evaluate("a + ", &p),
        Err(EvalError::MalformedFormula { .. })
    ));
}

#[test]
fn test_unary_chain() {
    let empty = BTreeMap::new();
    assert_eq!(evaluate("--5", &empty).unwrap(), 5.0);
    assert_eq!(evaluate("2 * -3", &empty).unwrap(), -6.0);
}
