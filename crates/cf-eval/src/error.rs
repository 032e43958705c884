//! Error types for cf-eval

use thiserror::Error;

/// Formula evaluation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// V001: The formula is not valid under the fixed arithmetic grammar.
    #[error("[V001] Malformed formula at position {position}: {detail}")]
    MalformedFormula { detail: String, position: usize },

    /// V002: A parameter referenced by the formula is not in the set.
    #[error("[V002] Unknown parameter: {0}")]
    UnknownParameter(String),

    /// V003: A division's denominator evaluated to zero.
    #[error("[V003] Division by zero")]
    DivisionByZero,
}

/// Result type alias for [`EvalError`].
pub type EvalResult<T> = Result<T, EvalError>;

impl EvalError {
    pub(crate) fn malformed(detail: impl Into<String>, position: usize) -> Self {
        EvalError::MalformedFormula {
            detail: detail.into(),
            position,
        }
    }
}
