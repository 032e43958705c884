//! Cost rollup: derive a norm's unit price from its resource lines.
//!
//! `unit_price = Σ(line.quantity_per_unit * material.ref_price)` over the
//! norm's resource lines. A line whose material has no reference price
//! contributes 0 and a warning, so an estimate with partially-unpriced
//! resources stays viewable instead of failing.

use crate::error::{EngineError, EngineResult};
use cf_core::{round_cost, CatalogSnapshot};

/// A rolled-up unit price with any soft-fail warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct RolledPrice {
    /// Derived unit price, at the cost scale
    pub unit_price: f64,

    /// One warning per resource line that priced at 0
    pub warnings: Vec<String>,
}

/// Resolve the derived unit price of `norm_code` against a catalog
/// snapshot.
///
/// Unknown norm codes are an error; unknown materials are not (see the
/// module docs for the soft-fail policy).
pub fn resolve_unit_price(
    catalog: &CatalogSnapshot,
    norm_code: &str,
) -> EngineResult<RolledPrice> {
    let norm = catalog
        .norm(norm_code)
        .ok_or_else(|| EngineError::UnknownNorm(norm_code.to_string()))?;

    let mut total = 0.0;
    let mut warnings = Vec::new();

    for line in catalog.resource_lines(&norm.code) {
        match catalog.material(&line.material_code) {
            Some(material) => {
                total += line.quantity_per_unit * material.ref_price;
            }
            None => {
                log::warn!(
                    "Norm {}: no reference price for material {}, line priced at 0",
                    norm.code,
                    line.material_code
                );
                warnings.push(format!(
                    "missing price for material {} ({})",
                    line.material_code, line.material_name
                ));
            }
        }
    }

    Ok(RolledPrice {
        unit_price: round_cost(total),
        warnings,
    })
}

#[cfg(test)]
#[path = "rollup_test.rs"]
mod tests;
