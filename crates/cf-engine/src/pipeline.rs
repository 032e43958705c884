//! Template/task pipeline: bulk-evaluate a task snapshot into estimate
//! line items.
//!
//! Pure function of its three snapshot inputs (tasks, catalog,
//! parameters), so the same call always produces the same item set.
//! The persistence side of a recompute lives in [`crate::recompute`].

use crate::rollup::resolve_unit_price;
use cf_core::{round_quantity, CatalogSnapshot, EstimationItem, ParameterSet, TaskSnapshot};

/// The items and warnings produced by one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    /// Estimate items in task order
    pub items: Vec<EstimationItem>,

    /// Human-readable warnings for every soft-failed task or line
    pub warnings: Vec<String>,
}

/// Evaluate every task against `params`, rolling up unit prices from
/// `catalog`.
///
/// A task whose formula fails to evaluate is emitted with quantity 0 and
/// a warning naming the task; one bad formula never aborts the run. A
/// task with an empty norm code keeps unit price 0 (to be priced later);
/// an unknown norm code soft-fails the same way, with a warning.
pub fn instantiate(
    project_id: i64,
    tasks: &TaskSnapshot,
    catalog: &CatalogSnapshot,
    params: &ParameterSet,
) -> PipelineOutput {
    let values = params.values();
    let mut output = PipelineOutput::default();

    for task in tasks.tasks() {
        let quantity = match cf_eval::evaluate(&task.formula, &values) {
            Ok(value) if value < 0.0 => {
                output.warnings.push(format!(
                    "task '{}': formula yielded negative quantity {value}, using 0",
                    task.item_name
                ));
                0.0
            }
            Ok(value) => round_quantity(value),
            Err(err) => {
                log::warn!("Task '{}' failed evaluation: {err}", task.item_name);
                output
                    .warnings
                    .push(format!("task '{}': {err}", task.item_name));
                0.0
            }
        };

        let unit_price = if task.norm_code.is_empty() {
            0.0
        } else {
            match resolve_unit_price(catalog, &task.norm_code) {
                Ok(rolled) => {
                    for warning in rolled.warnings {
                        output
                            .warnings
                            .push(format!("task '{}': {warning}", task.item_name));
                    }
                    rolled.unit_price
                }
                Err(err) => {
                    output
                        .warnings
                        .push(format!("task '{}': {err}", task.item_name));
                    0.0
                }
            }
        };

        output.items.push(EstimationItem {
            id: 0,
            project_id,
            section_name: task.section_name.clone(),
            material_code: task.norm_code.clone(),
            material_name: task.item_name.clone(),
            unit: task.unit.clone(),
            quantity,
            unit_price,
            dimensions: None,
        });
    }

    output
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
