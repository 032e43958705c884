//! Error types for the estimate database.

use thiserror::Error;

/// Estimate database errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open or create the estimate database (S001).
    #[error("[S001] Estimate database connection failed: {0}")]
    ConnectionError(String),

    /// Schema migration failed (S002).
    #[error("[S002] Estimate database migration failed: {0}")]
    MigrationError(String),

    /// SQL execution error (S003).
    #[error("[S003] Estimate database query failed: {0}")]
    QueryError(String),

    /// Transaction management error (S004).
    #[error("[S004] Estimate database transaction failed: {0}")]
    TransactionError(String),

    /// DuckDB driver error with preserved source chain (S005).
    #[error("[S005] DuckDB error")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

impl From<duckdb::Error> for StoreError {
    fn from(err: duckdb::Error) -> Self {
        StoreError::DuckDb(err)
    }
}

/// Attach a short operation label to DuckDB errors.
pub(crate) trait StoreResultExt<T> {
    fn query_context(self, context: &str) -> StoreResult<T>;
}

impl<T> StoreResultExt<T> for Result<T, duckdb::Error> {
    fn query_context(self, context: &str) -> StoreResult<T> {
        self.map_err(|e| StoreError::QueryError(format!("{context}: {e}")))
    }
}
