//! Embedded schema migrations for the estimate database.
//!
//! Each migration is a numbered `.sql` file embedded via `include_str!`
//! and applied at most once, tracked in `cf.schema_version`. A migration
//! runs together with its version record in a single transaction, so a
//! failed migration leaves no half-applied DDL behind.

use crate::error::{StoreError, StoreResult};
use duckdb::Connection;

struct Migration {
    version: i32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial",
    sql: include_str!("v001_initial.sql"),
}];

/// Bring `conn` up to the latest schema version. Returns the number of
/// migrations applied, 0 when the database is already current.
pub fn apply_pending(conn: &Connection) -> StoreResult<usize> {
    conn.execute_batch(
        "CREATE SCHEMA IF NOT EXISTS cf;
         CREATE TABLE IF NOT EXISTS cf.schema_version (
             version    INTEGER NOT NULL,
             applied_at TIMESTAMP NOT NULL DEFAULT now()
         );",
    )
    .map_err(|e| StoreError::MigrationError(format!("schema bootstrap failed: {e}")))?;

    let applied: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM cf.schema_version",
            [],
            |row| row.get(0),
        )
        .map_err(|e| StoreError::MigrationError(format!("cannot read schema_version: {e}")))?;

    let pending: Vec<&Migration> = MIGRATIONS.iter().filter(|m| m.version > applied).collect();

    for migration in &pending {
        log::debug!(
            "Applying migration v{:03} ({})",
            migration.version,
            migration.name
        );

        let batch = format!(
            "BEGIN TRANSACTION;\n{}\nINSERT INTO cf.schema_version (version) VALUES ({});\nCOMMIT;",
            migration.sql, migration.version
        );
        if let Err(e) = conn.execute_batch(&batch) {
            let _ = conn.execute_batch("ROLLBACK");
            return Err(StoreError::MigrationError(format!(
                "migration v{:03} ({}) rolled back: {e}",
                migration.version, migration.name
            )));
        }
    }
    Ok(pending.len())
}

#[cfg(test)]
#[path = "migrate_test.rs"]
mod tests;
