//! Estimate line items, the unit of derived output.
//!
//! A project's estimate (its bill of quantities) is the flat list of
//! [`EstimationItem`] rows produced by a recompute or a spreadsheet
//! import. `total_cost` is always derived from quantity × unit price,
//! never stored.

use crate::dims::Dimensions;
use crate::rounding::round_cost;
use serde::{Deserialize, Serialize};

/// One line of a project's bill of quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationItem {
    /// Storage id (0 for not-yet-persisted)
    #[serde(default)]
    pub id: i64,

    /// Owning project
    pub project_id: i64,

    /// Section heading the item is grouped under
    pub section_name: String,

    /// Work item / material code
    pub material_code: String,

    /// Work item / material name
    pub material_name: String,

    /// Unit of measure
    pub unit: String,

    /// Derived quantity, already rounded to the quantity scale
    pub quantity: f64,

    /// Derived unit price, already rounded to the cost scale
    pub unit_price: f64,

    /// Manual dimensions, present only for dimension-entered items
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

impl EstimationItem {
    /// Derived line total: quantity × unit price at the cost scale.
    pub fn total_cost(&self) -> f64 {
        round_cost(self.quantity * self.unit_price)
    }
}

/// Sum of line totals for a slice of items, at the cost scale.
pub fn estimate_total(items: &[EstimationItem]) -> f64 {
    round_cost(items.iter().map(EstimationItem::total_cost).sum())
}

#[cfg(test)]
#[path = "estimate_test.rs"]
mod tests;
