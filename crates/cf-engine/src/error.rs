//! Error types for cf-engine

use thiserror::Error;

/// Estimation engine errors.
///
/// Per-task evaluation failures are deliberately NOT here: the pipeline
/// demotes them to warnings so one bad formula cannot block a project's
/// whole estimate. Only failures that invalidate the recompute as a
/// whole surface as errors.
#[derive(Error, Debug)]
pub enum EngineError {
    /// N001: The requested template does not exist.
    #[error("[N001] Unknown template: {0}")]
    UnknownTemplate(String),

    /// N002: The requested norm code is not in the catalog.
    #[error("[N002] Unknown norm code: {0}")]
    UnknownNorm(String),

    /// N003: The item to update does not belong to the project.
    #[error("[N003] Item {item_id} not found in project {project_id}")]
    ItemNotFound { item_id: i64, project_id: i64 },

    /// Storage failure. Always fatal to the recompute, rolled back.
    #[error(transparent)]
    Store(#[from] cf_store::StoreError),
}

/// Result type alias for [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;
