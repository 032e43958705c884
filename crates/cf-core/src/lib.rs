//! cf-core - Core library for Costflow
//!
//! This crate provides the shared domain types (norm catalog, templates,
//! parameters, estimate items), configuration parsing, and the rounding
//! rules used across all Costflow components.

pub mod catalog;
pub mod config;
pub mod dims;
pub mod error;
pub mod estimate;
pub mod params;
pub mod rounding;
pub mod template;

pub use catalog::{CatalogSnapshot, Material, NormDefinition, NormResourceLine};
pub use config::Config;
pub use dims::Dimensions;
pub use error::{CoreError, CoreResult};
pub use estimate::EstimationItem;
pub use params::ParameterSet;
pub use rounding::{round_cost, round_quantity};
pub use template::{TaskSnapshot, Template, TemplateTask};
