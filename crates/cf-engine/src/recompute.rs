//! Recompute orchestration: snapshot loads, pipeline runs, and the
//! transactional replacement of a project's derived data.
//!
//! Each recompute reads the catalog and task snapshots first, runs the
//! pure pipeline, then replaces the project's parameters and estimate
//! items inside a single transaction. A storage failure anywhere in the
//! replacement rolls the whole recompute back.

use crate::error::{EngineError, EngineResult};
use crate::pipeline::instantiate;
use crate::rollup;
use cf_core::{Dimensions, ParameterSet};
use cf_store::{catalog, estimates, params, templates, EstimateDb};

/// Result of a recompute: how many items were generated, and every
/// soft-fail warning collected along the way. Callers are expected to
/// display both.
#[derive(Debug, Clone)]
pub struct RecomputeOutcome {
    /// Number of estimate items now stored for the project
    pub count: usize,

    /// Warnings from soft-failed tasks and unpriced resource lines
    pub warnings: Vec<String>,
}

/// Regenerate a project's estimate from one template.
///
/// Identical inputs (template, catalog, parameters) always produce the
/// identical item set; running it twice leaves no duplicates and no
/// leftovers.
pub fn recompute_from_template(
    db: &EstimateDb,
    project_id: i64,
    template_id: i64,
    parameters: &ParameterSet,
) -> EngineResult<RecomputeOutcome> {
    let template = templates::get_template(db.conn(), template_id)?
        .ok_or_else(|| EngineError::UnknownTemplate(format!("id {template_id}")))?;
    let tasks = templates::load_template_tasks(db.conn(), template.id)?;
    let catalog_snapshot = catalog::load_catalog(db.conn())?;

    log::debug!(
        "Recomputing project {} from template '{}' ({} tasks)",
        project_id,
        template.name,
        tasks.len()
    );

    let output = instantiate(project_id, &tasks, &catalog_snapshot, parameters);

    let count = db.transaction(|conn| {
        params::replace_parameters(conn, project_id, parameters)?;
        estimates::replace_project_items(conn, project_id, &output.items)
    })?;

    Ok(RecomputeOutcome {
        count,
        warnings: output.warnings,
    })
}

/// Regenerate a project's estimate from every task tagged with any of
/// `categories`, across all templates.
pub fn recompute_from_categories(
    db: &EstimateDb,
    project_id: i64,
    parameters: &ParameterSet,
    categories: &[String],
) -> EngineResult<RecomputeOutcome> {
    let tasks = templates::load_tasks_by_categories(db.conn(), categories)?;
    let catalog_snapshot = catalog::load_catalog(db.conn())?;

    log::debug!(
        "Recomputing project {} from categories {:?} ({} tasks)",
        project_id,
        categories,
        tasks.len()
    );

    let output = instantiate(project_id, &tasks, &catalog_snapshot, parameters);

    let count = db.transaction(|conn| {
        params::replace_parameters(conn, project_id, parameters)?;
        estimates::replace_project_items(conn, project_id, &output.items)
    })?;

    Ok(RecomputeOutcome {
        count,
        warnings: output.warnings,
    })
}

/// Resolve a norm's derived unit price against the stored catalog.
pub fn resolve_norm_unit_price(db: &EstimateDb, norm_code: &str) -> EngineResult<rollup::RolledPrice> {
    let catalog_snapshot = catalog::load_catalog(db.conn())?;
    rollup::resolve_unit_price(&catalog_snapshot, norm_code)
}

/// Recompute one item's quantity from manual dimensions, in place,
/// without touching the rest of the project's estimate. Returns the new
/// quantity. A negative product (a negative dimension or factor) is
/// stored as 0, the same way a negative formula result is.
pub fn update_item_dimensions(
    db: &EstimateDb,
    project_id: i64,
    item_id: i64,
    dims: &Dimensions,
) -> EngineResult<f64> {
    let mut quantity = dims.quantity();
    if quantity < 0.0 {
        log::warn!(
            "item {item_id}: dimensions yield negative quantity {quantity}, storing 0"
        );
        quantity = 0.0;
    }
    let updated = db.transaction(|conn| {
        estimates::update_item_dimensions(conn, project_id, item_id, dims, quantity)
    })?;

    if !updated {
        return Err(EngineError::ItemNotFound {
            item_id,
            project_id,
        });
    }
    Ok(quantity)
}

#[cfg(test)]
#[path = "recompute_test.rs"]
mod tests;
