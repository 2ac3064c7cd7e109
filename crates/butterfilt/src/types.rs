//! Core result and status types shared by the filter engine and the designer.

use serde::{Deserialize, Serialize};

/// Result type for coefficient-validation operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors raised when coefficient vectors handed to a filter engine are unusable.
///
/// These are data-validity failures, not programming errors: the caller can
/// inspect the error (or the engine's [`FilterStatus`]) and retry with
/// corrected vectors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("coefficient vectors must have matching lengths: a has {a_len}, b has {b_len}")]
    CoefficientLengthMismatch { a_len: usize, b_len: usize },

    #[error("coefficient vectors must not be empty")]
    EmptyCoefficients,
}

/// Validity of the coefficient pair currently held by a filter engine.
///
/// Recomputed every time coefficients are assigned. Filtering operations
/// require `Ready`; invoking them in any other state is a contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterStatus {
    /// Coefficients are present, equal-length and normalized; the filter can run.
    Ready,
    /// Coefficient vectors are empty, mismatched or were never supplied.
    BadCoefficients,
}
