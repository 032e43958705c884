//! Estimate database connection wrapper.
//!
//! [`EstimateDb`] owns a DuckDB [`Connection`] and provides helpers for
//! opening, migrating, and transacting against the estimate database.

use crate::error::{StoreError, StoreResult};
use crate::ddl;
use duckdb::Connection;
use std::path::Path;

/// Wrapper around a DuckDB connection to the estimate database.
///
/// Single-threaded: recomputes are sequential per connection, so no
/// `Mutex` is needed. Independent projects may open independent
/// connections to the same file.
pub struct EstimateDb {
    conn: Connection,
}

impl EstimateDb {
    /// Open (or create) the estimate database at `path` and run pending
    /// migrations.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| StoreError::ConnectionError(format!("{e}: {}", path.display())))?;
        ddl::apply_pending(&conn)?;
        Ok(Self { conn })
    }

    /// Create an in-memory estimate database with all migrations applied.
    ///
    /// Useful for unit tests that don't need persistence.
    pub fn open_memory() -> StoreResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::ConnectionError(e.to_string()))?;
        ddl::apply_pending(&conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Execute `body` within a `BEGIN` / `COMMIT` transaction, rolling
    /// back on error.
    ///
    /// Every delete-then-insert replacement (parameters, estimate items,
    /// norm resource lines) must go through here so a failure between the
    /// delete and the insert can never leave a project's estimate empty
    /// or duplicated.
    pub fn transaction<F, T>(&self, body: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> StoreResult<T>,
    {
        self.conn
            .execute_batch("BEGIN TRANSACTION")
            .map_err(|e| StoreError::TransactionError(format!("BEGIN failed: {e}")))?;

        let result = body(&self.conn);

        match &result {
            Ok(_) => {
                if let Err(commit_err) = self.conn.execute_batch("COMMIT") {
                    let _ = self.conn.execute_batch("ROLLBACK");
                    return Err(StoreError::TransactionError(format!(
                        "COMMIT failed: {commit_err}"
                    )));
                }
            }
            Err(_) => {
                let _ = self.conn.execute_batch("ROLLBACK");
            }
        }
        result
    }

    /// Delete all derived data for a project: its parameters and its
    /// estimate items. Master data is untouched.
    pub fn clear_project_data(&self, project_id: i64) -> StoreResult<()> {
        let stmts = [
            "DELETE FROM cf.parameters WHERE project_id = ?",
            "DELETE FROM cf.estimate_items WHERE project_id = ?",
        ];
        for stmt in &stmts {
            self.conn
                .execute(stmt, duckdb::params![project_id])
                .map_err(|e| StoreError::QueryError(format!("clear_project_data failed: {e}")))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
