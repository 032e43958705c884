//! Rounding rules for derived quantities and costs.
//!
//! Quantities are reported at 3 decimal places, monetary amounts at 2.
//! Both use round-half-away-from-zero, which is what `f64::round` does.

/// Decimal places for quantities (m³, m², kg, ...).
pub const QUANTITY_SCALE: u32 = 3;

/// Decimal places for unit prices and totals.
pub const COST_SCALE: u32 = 2;

/// Round `value` to `scale` decimal places, half away from zero.
pub fn round_to(value: f64, scale: u32) -> f64 {
    let factor = 10f64.powi(scale as i32);
    (value * factor).round() / factor
}

/// Round a quantity to [`QUANTITY_SCALE`] decimals.
pub fn round_quantity(value: f64) -> f64 {
    round_to(value, QUANTITY_SCALE)
}

/// Round a monetary amount to [`COST_SCALE`] decimals.
pub fn round_cost(value: f64) -> f64 {
    round_to(value, COST_SCALE)
}

#[cfg(test)]
#[path = "rounding_test.rs"]
mod tests;
