//! Error types for cf-import

use thiserror::Error;

/// Spreadsheet import errors.
#[derive(Error, Debug)]
pub enum ImportError {
    /// I001: The sheet has no data rows below the header.
    #[error("[I001] Spreadsheet has no data rows")]
    EmptySheet,

    /// Storage failure during the transactional replacement.
    #[error(transparent)]
    Store(#[from] cf_store::StoreError),
}

/// Result type alias for [`ImportError`].
pub type ImportResult<T> = Result<T, ImportError>;
