//! Norm catalog persistence: norms, resource lines, and the material
//! reference price list.

use crate::error::{StoreError, StoreResult, StoreResultExt};
use cf_core::{CatalogSnapshot, Material, NormDefinition, NormResourceLine};
use duckdb::Connection;

/// Insert or update a material's reference price entry.
pub fn upsert_material(conn: &Connection, material: &Material) -> StoreResult<()> {
    let updated = conn
        .execute(
            "UPDATE cf.materials SET name = ?, unit = ?, ref_price = ? WHERE code = ?",
            duckdb::params![
                material.name,
                material.unit,
                material.ref_price,
                material.code
            ],
        )
        .query_context("update material")?;

    if updated == 0 {
        conn.execute(
            "INSERT INTO cf.materials (code, name, unit, ref_price) VALUES (?, ?, ?, ?)",
            duckdb::params![
                material.code,
                material.name,
                material.unit,
                material.ref_price
            ],
        )
        .query_context(&format!("insert material ({})", material.code))?;
    }
    Ok(())
}

/// Insert a norm definition. Returns the generated `norm_id`.
pub fn insert_norm(conn: &Connection, norm: &NormDefinition) -> StoreResult<i64> {
    conn.execute(
        "INSERT INTO cf.norms (code, name, unit, kind) VALUES (?, ?, ?, ?)",
        duckdb::params![norm.code, norm.name, norm.unit, norm.kind],
    )
    .query_context(&format!("insert norm ({})", norm.code))?;

    let norm_id: i64 = conn
        .query_row(
            "SELECT norm_id FROM cf.norms WHERE code = ?",
            duckdb::params![norm.code],
            |row| row.get(0),
        )
        .query_context("select norm_id")?;
    Ok(norm_id)
}

/// Replace a norm's resource lines wholesale: delete-by-norm then bulk
/// insert with ordinal positions preserved.
///
/// Callers edit a norm as a unit, so its children are never patched in
/// place. Run inside a transaction.
pub fn replace_norm_resources(
    conn: &Connection,
    norm_id: i64,
    lines: &[NormResourceLine],
) -> StoreResult<()> {
    conn.execute(
        "DELETE FROM cf.norm_resources WHERE norm_id = ?",
        duckdb::params![norm_id],
    )
    .query_context("delete norm_resources")?;

    let mut stmt = conn
        .prepare(
            "INSERT INTO cf.norm_resources \
             (norm_id, material_code, material_name, unit, quantity_per_unit, ordinal_position) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .query_context("prepare insert norm_resources")?;

    for (i, line) in lines.iter().enumerate() {
        stmt.execute(duckdb::params![
            norm_id,
            line.material_code,
            line.material_name,
            line.unit,
            line.quantity_per_unit,
            (i + 1) as i32
        ])
        .query_context(&format!("insert norm_resource ({})", line.material_code))?;
    }
    Ok(())
}

/// Find a norm's id by its unique code.
pub fn find_norm_id(conn: &Connection, code: &str) -> StoreResult<Option<i64>> {
    match conn.query_row(
        "SELECT norm_id FROM cf.norms WHERE code = ?",
        duckdb::params![code],
        |row| row.get(0),
    ) {
        Ok(id) => Ok(Some(id)),
        Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(StoreError::QueryError(format!("find_norm_id: {e}"))),
    }
}

/// Load the full catalog as a read-only snapshot for one recompute.
pub fn load_catalog(conn: &Connection) -> StoreResult<CatalogSnapshot> {
    let mut snapshot = CatalogSnapshot::new();

    let mut stmt = conn
        .prepare("SELECT material_id, code, name, unit, ref_price FROM cf.materials")
        .query_context("prepare load materials")?;
    let materials = stmt
        .query_map([], |row| {
            Ok(Material {
                code: row.get(1)?,
                name: row.get(2)?,
                unit: row.get(3)?,
                ref_price: row.get(4)?,
            })
        })
        .query_context("query materials")?;
    for row in materials {
        snapshot.add_material(row.query_context("read material row")?);
    }

    let mut stmt = conn
        .prepare("SELECT norm_id, code, name, unit, kind FROM cf.norms")
        .query_context("prepare load norms")?;
    let norms: Vec<NormDefinition> = stmt
        .query_map([], |row| {
            Ok(NormDefinition {
                id: row.get(0)?,
                code: row.get(1)?,
                name: row.get(2)?,
                unit: row.get(3)?,
                kind: row.get(4)?,
            })
        })
        .query_context("query norms")?
        .collect::<Result<_, _>>()
        .query_context("read norm rows")?;

    let mut stmt = conn
        .prepare(
            "SELECT material_code, material_name, unit, quantity_per_unit \
             FROM cf.norm_resources WHERE norm_id = ? ORDER BY ordinal_position",
        )
        .query_context("prepare load norm_resources")?;
    for norm in norms {
        let lines: Vec<NormResourceLine> = stmt
            .query_map(duckdb::params![norm.id], |row| {
                Ok(NormResourceLine {
                    material_code: row.get(0)?,
                    material_name: row.get(1)?,
                    unit: row.get(2)?,
                    quantity_per_unit: row.get(3)?,
                })
            })
            .query_context("query norm_resources")?
            .collect::<Result<_, _>>()
            .query_context("read norm_resource rows")?;
        snapshot.add_norm(norm, lines);
    }

    Ok(snapshot)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
