//! cf-engine - The Costflow estimation engine.
//!
//! Combines the formula evaluator, the norm catalog, and the estimate
//! store into the recompute operations: instantiate a template (or a set
//! of categories) into a project's bill of quantities, roll up unit
//! prices from resource lines, and keep the whole replacement atomic.

pub mod error;
pub mod pipeline;
pub mod recompute;
pub mod rollup;

pub use error::{EngineError, EngineResult};
pub use pipeline::{instantiate, PipelineOutput};
pub use recompute::{
    recompute_from_categories, recompute_from_template, resolve_norm_unit_price,
    update_item_dimensions, RecomputeOutcome,
};
pub use rollup::{resolve_unit_price, RolledPrice};
