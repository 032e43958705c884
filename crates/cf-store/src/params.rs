//! Project parameter persistence.
//!
//! Parameters are replaced wholesale per recompute: delete-all then bulk
//! insert, always inside the caller's transaction, so an estimate is
//! never evaluated against a stale mix of old and new values.

use crate::error::{StoreResult, StoreResultExt};
use cf_core::params::Parameter;
use cf_core::ParameterSet;
use duckdb::Connection;

/// Replace the full parameter set for a project.
///
/// Callers are expected to run this inside [`crate::EstimateDb::transaction`]
/// together with the estimate item replacement of the same recompute.
pub fn replace_parameters(
    conn: &Connection,
    project_id: i64,
    params: &ParameterSet,
) -> StoreResult<()> {
    conn.execute(
        "DELETE FROM cf.parameters WHERE project_id = ?",
        duckdb::params![project_id],
    )
    .query_context("delete parameters")?;

    let mut stmt = conn
        .prepare("INSERT INTO cf.parameters (project_id, name, value, grp) VALUES (?, ?, ?, ?)")
        .query_context("prepare insert parameters")?;

    for param in params.iter() {
        stmt.execute(duckdb::params![
            project_id,
            param.name,
            param.value,
            param.group
        ])
        .query_context(&format!("insert parameter ({})", param.name))?;
    }

    log::debug!(
        "Replaced {} parameters for project {}",
        params.len(),
        project_id
    );
    Ok(())
}

/// Load a project's current parameter set.
pub fn load_parameters(conn: &Connection, project_id: i64) -> StoreResult<ParameterSet> {
    let mut stmt = conn
        .prepare("SELECT name, value, grp FROM cf.parameters WHERE project_id = ? ORDER BY name")
        .query_context("prepare load parameters")?;

    let rows = stmt
        .query_map(duckdb::params![project_id], |row| {
            Ok(Parameter {
                name: row.get(0)?,
                value: row.get(1)?,
                group: row.get(2)?,
            })
        })
        .query_context("query parameters")?;

    let mut set = ParameterSet::new();
    for row in rows {
        let param = row.query_context("read parameter row")?;
        set.insert(param.name.clone(), param.value, &param.group);
    }
    Ok(set)
}

#[cfg(test)]
#[path = "params_test.rs"]
mod tests;
