//! Row classification and estimate import.
//!
//! Column layout of an ingested sheet, 0-based:
//! `[index, code, name, unit, length, width, height, factor, quantity, unit_price]`.
//! Row 0 is the header and is discarded.

use crate::cell::Cell;
use crate::error::{ImportError, ImportResult};
use cf_core::{round_cost, round_quantity, Dimensions, EstimationItem};
use cf_store::{estimates, EstimateDb};

const COL_CODE: usize = 1;
const COL_NAME: usize = 2;
const COL_UNIT: usize = 3;
const COL_LENGTH: usize = 4;
const COL_WIDTH: usize = 5;
const COL_HEIGHT: usize = 6;
const COL_FACTOR: usize = 7;
const COL_QUANTITY: usize = 8;
const COL_UNIT_PRICE: usize = 9;

fn cell(row: &[Cell], idx: usize) -> Cell {
    row.get(idx).cloned().unwrap_or(Cell::Null)
}

/// Classify data rows into section headers and line items, emitting one
/// [`EstimationItem`] per line item.
///
/// A row whose name cell is set while its unit and code cells are both
/// empty is a section header: it updates the current section and emits
/// nothing. Any other row with a name is a line item tagged with the
/// current section; rows without a name are skipped. Items missing a
/// code get a synthetic `IMP-{row}` code so every stored item has one.
/// A negative quantity cell is stored as 0.
pub fn normalize(project_id: i64, rows: &[Vec<Cell>], default_section: &str) -> Vec<EstimationItem> {
    let mut items = Vec::new();
    let mut current_section = default_section.to_string();

    // Row 0 is the header.
    for (row_index, row) in rows.iter().enumerate().skip(1) {
        let name = cell(row, COL_NAME).as_text();
        if name.is_empty() {
            continue;
        }

        let code_cell = cell(row, COL_CODE);
        let unit_cell = cell(row, COL_UNIT);

        if code_cell.is_blank() && unit_cell.is_blank() {
            current_section = name;
            continue;
        }

        let code = if code_cell.is_blank() {
            format!("IMP-{row_index}")
        } else {
            code_cell.as_text()
        };

        let mut quantity = round_quantity(cell(row, COL_QUANTITY).as_number());
        if quantity < 0.0 {
            log::warn!("row {row_index}: negative quantity {quantity}, storing 0");
            quantity = 0.0;
        }

        let dims = Dimensions {
            length: non_blank_number(&cell(row, COL_LENGTH)),
            width: non_blank_number(&cell(row, COL_WIDTH)),
            height: non_blank_number(&cell(row, COL_HEIGHT)),
            factor: non_blank_number(&cell(row, COL_FACTOR)),
        };

        items.push(EstimationItem {
            id: 0,
            project_id,
            section_name: current_section.clone(),
            material_code: code,
            material_name: name,
            unit: unit_cell.as_text(),
            quantity,
            unit_price: round_cost(cell(row, COL_UNIT_PRICE).as_number()),
            dimensions: if dims.is_empty() { None } else { Some(dims) },
        });
    }

    items
}

fn non_blank_number(cell: &Cell) -> Option<f64> {
    if cell.is_blank() {
        None
    } else {
        Some(cell.as_number())
    }
}

/// Normalize `rows` and replace `project_id`'s estimate with the result,
/// in one transaction. Returns the number of items imported.
pub fn import_rows(
    db: &EstimateDb,
    project_id: i64,
    rows: &[Vec<Cell>],
    default_section: &str,
) -> ImportResult<usize> {
    if rows.len() <= 1 {
        return Err(ImportError::EmptySheet);
    }

    let items = normalize(project_id, rows, default_section);
    log::debug!(
        "Importing {} items from {} data rows for project {}",
        items.len(),
        rows.len() - 1,
        project_id
    );

    let count = db.transaction(|conn| estimates::replace_project_items(conn, project_id, &items))?;
    Ok(count)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
