//! Bill-of-quantities persistence.
//!
//! A project's estimate items are replaced wholesale per recompute
//! (delete-by-project then bulk insert) inside the caller's transaction.
//! Single-item dimension edits are the only in-place mutation.

use crate::error::{StoreError, StoreResult, StoreResultExt};
use cf_core::{Dimensions, EstimationItem};
use duckdb::Connection;

/// Replace a project's full estimate item set. Returns the number of
/// items inserted.
///
/// Must run inside [`crate::EstimateDb::transaction`] so the delete and
/// the insert commit or roll back together.
pub fn replace_project_items(
    conn: &Connection,
    project_id: i64,
    items: &[EstimationItem],
) -> StoreResult<usize> {
    conn.execute(
        "DELETE FROM cf.estimate_items WHERE project_id = ?",
        duckdb::params![project_id],
    )
    .query_context("delete estimate_items")?;

    let mut stmt = conn
        .prepare(
            "INSERT INTO cf.estimate_items \
             (project_id, section_name, material_code, material_name, unit, quantity, unit_price, \
              length, width, height, factor) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .query_context("prepare insert estimate_items")?;

    for item in items {
        let dims = item.dimensions.unwrap_or_default();
        stmt.execute(duckdb::params![
            project_id,
            item.section_name,
            item.material_code,
            item.material_name,
            item.unit,
            item.quantity,
            item.unit_price,
            dims.length,
            dims.width,
            dims.height,
            dims.factor
        ])
        .query_context(&format!("insert estimate_item ({})", item.material_code))?;
    }

    log::debug!(
        "Replaced estimate for project {}: {} items",
        project_id,
        items.len()
    );
    Ok(items.len())
}

/// Load a project's estimate items in insertion order.
pub fn load_project_items(conn: &Connection, project_id: i64) -> StoreResult<Vec<EstimationItem>> {
    let mut stmt = conn
        .prepare(
            "SELECT item_id, section_name, material_code, material_name, unit, quantity, unit_price, \
                    length, width, height, factor \
             FROM cf.estimate_items WHERE project_id = ? ORDER BY item_id",
        )
        .query_context("prepare load estimate_items")?;

    let items = stmt
        .query_map(duckdb::params![project_id], |row| read_item(row, project_id))
        .query_context("query estimate_items")?
        .collect::<Result<_, _>>()
        .query_context("read estimate_item rows")?;
    Ok(items)
}

/// Fetch one item, scoped to its project.
pub fn get_item(
    conn: &Connection,
    project_id: i64,
    item_id: i64,
) -> StoreResult<Option<EstimationItem>> {
    match conn.query_row(
        "SELECT item_id, section_name, material_code, material_name, unit, quantity, unit_price, \
                length, width, height, factor \
         FROM cf.estimate_items WHERE project_id = ? AND item_id = ?",
        duckdb::params![project_id, item_id],
        |row| read_item(row, project_id),
    ) {
        Ok(item) => Ok(Some(item)),
        Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(StoreError::QueryError(format!("get_item: {e}"))),
    }
}

/// Overwrite one item's dimensions and derived quantity in place.
/// Returns false if the item does not belong to the project.
pub fn update_item_dimensions(
    conn: &Connection,
    project_id: i64,
    item_id: i64,
    dims: &Dimensions,
    quantity: f64,
) -> StoreResult<bool> {
    let updated = conn
        .execute(
            "UPDATE cf.estimate_items \
             SET length = ?, width = ?, height = ?, factor = ?, quantity = ? \
             WHERE project_id = ? AND item_id = ?",
            duckdb::params![
                dims.length,
                dims.width,
                dims.height,
                dims.factor,
                quantity,
                project_id,
                item_id
            ],
        )
        .query_context("update item dimensions")?;
    Ok(updated > 0)
}

fn read_item(row: &duckdb::Row<'_>, project_id: i64) -> Result<EstimationItem, duckdb::Error> {
    let dims = Dimensions {
        length: row.get(7)?,
        width: row.get(8)?,
        height: row.get(9)?,
        factor: row.get(10)?,
    };
    Ok(EstimationItem {
        id: row.get(0)?,
        project_id,
        section_name: row.get(1)?,
        material_code: row.get(2)?,
        material_name: row.get(3)?,
        unit: row.get(4)?,
        quantity: row.get(5)?,
        unit_price: row.get(6)?,
        dimensions: if dims.is_empty() { None } else { Some(dims) },
    })
}

#[cfg(test)]
#[path = "estimates_test.rs"]
mod tests;
