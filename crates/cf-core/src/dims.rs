//! Dimension-based quantity calculation.
//!
//! A manually-entered estimate line can carry four scalar dimensions
//! instead of a formula. The derived quantity is their product; any
//! missing dimension counts as 0, so an incomplete shape yields 0
//! rather than an error.

use crate::rounding::round_quantity;
use serde::{Deserialize, Serialize};

/// The four dimensions of a manually-measured work item.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length in the item's base unit
    #[serde(default)]
    pub length: Option<f64>,

    /// Width in the item's base unit
    #[serde(default)]
    pub width: Option<f64>,

    /// Height (or depth) in the item's base unit
    #[serde(default)]
    pub height: Option<f64>,

    /// Multiplier, e.g. a repeat count or a wastage coefficient
    #[serde(default)]
    pub factor: Option<f64>,
}

impl Dimensions {
    /// Build a fully-specified set of dimensions.
    pub fn new(length: f64, width: f64, height: f64, factor: f64) -> Self {
        Self {
            length: Some(length),
            width: Some(width),
            height: Some(height),
            factor: Some(factor),
        }
    }

    /// True if no dimension has been entered at all.
    pub fn is_empty(&self) -> bool {
        self.length.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.factor.is_none()
    }

    /// Derived quantity: `length * width * height * factor`, rounded to
    /// the quantity scale. Missing dimensions default to 0.
    pub fn quantity(&self) -> f64 {
        let product = self.length.unwrap_or(0.0)
            * self.width.unwrap_or(0.0)
            * self.height.unwrap_or(0.0)
            * self.factor.unwrap_or(0.0);
        round_quantity(product)
    }
}

#[cfg(test)]
#[path = "dims_test.rs"]
mod tests;
