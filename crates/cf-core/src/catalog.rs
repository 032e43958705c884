//! Norm catalog: work-item definitions, resource-consumption lines, and
//! material reference prices.
//!
//! The catalog is master data, read-only to the estimation engine. A
//! recompute works against a [`CatalogSnapshot`] loaded up front so its
//! output is a pure function of explicit inputs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A standardized unit of construction work (e.g. "pour 1 m³ of
/// foundation concrete") with a known resource consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormDefinition {
    /// Storage id (0 for not-yet-persisted)
    #[serde(default)]
    pub id: i64,

    /// Unique norm code, e.g. "AF.11213"
    pub code: String,

    /// Human-readable work description
    pub name: String,

    /// Unit of the work item itself, e.g. "m3"
    pub unit: String,

    /// Norm kind, e.g. "material", "labor", "machine"
    #[serde(default)]
    pub kind: String,
}

/// One material/labor/equipment consumption entry belonging to a norm,
/// expressed as quantity per unit of the norm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormResourceLine {
    /// Code of the consumed material or resource
    pub material_code: String,

    /// Resource name as listed in the norm book
    pub material_name: String,

    /// Unit of the consumed resource
    pub unit: String,

    /// Consumption per one unit of the parent norm
    pub quantity_per_unit: f64,
}

/// A priced material/resource from the reference price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Unique material code
    pub code: String,

    /// Material name
    pub name: String,

    /// Unit the reference price applies to
    pub unit: String,

    /// Reference unit price
    pub ref_price: f64,
}

/// Read-only snapshot of the norm catalog used by one recompute.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    norms: HashMap<String, NormDefinition>,
    resource_lines: HashMap<String, Vec<NormResourceLine>>,
    materials: HashMap<String, Material>,
}

impl CatalogSnapshot {
    /// Empty catalog (every price resolves to nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a norm with its ordered resource lines.
    pub fn add_norm(&mut self, norm: NormDefinition, lines: Vec<NormResourceLine>) {
        self.resource_lines.insert(norm.code.clone(), lines);
        self.norms.insert(norm.code.clone(), norm);
    }

    /// Add a material to the reference price list.
    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.code.clone(), material);
    }

    /// Look up a norm definition by code.
    pub fn norm(&self, code: &str) -> Option<&NormDefinition> {
        self.norms.get(code)
    }

    /// The ordered resource lines of a norm, empty if the norm is unknown.
    pub fn resource_lines(&self, norm_code: &str) -> &[NormResourceLine] {
        self.resource_lines
            .get(norm_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look up a material by code.
    pub fn material(&self, code: &str) -> Option<&Material> {
        self.materials.get(code)
    }

    /// Number of norms in the snapshot.
    pub fn norm_count(&self) -> usize {
        self.norms.len()
    }
}
