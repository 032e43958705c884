use super::*;

#[test]
fn test_round_quantity_three_decimals() {
    assert_eq!(round_quantity(1.23456), 1.235);
    assert_eq!(round_quantity(1.2344), 1.234);
    assert_eq!(round_quantity(60.0), 60.0);
}

#[test]
fn test_round_cost_two_decimals() {
    assert_eq!(round_cost(10.006), 10.01);
    assert_eq!(round_cost(10.004), 10.0);
}

#[test]
fn test_half_away_from_zero() {
    // Exact halves round away from zero, not toward even.
    assert_eq!(round_to(2.5, 0), 3.0);
    assert_eq!(round_to(-2.5, 0), -3.0);
    assert_eq!(round_to(0.25, 1), 0.3);
}

#[test]
fn test_round_to_custom_scale() {
    assert_eq!(round_to(3.14159, 0), 3.0);
    assert_eq!(round_to(3.14159, 4), 3.1416);
}
