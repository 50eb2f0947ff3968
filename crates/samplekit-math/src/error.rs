//! Error taxonomy for the numeric core.

use thiserror::Error;

/// Errors from descriptive-statistics operations.
///
/// Every violation is raised immediately at the point of misuse and
/// propagates to the caller; there is no retry, recovery, or partial
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StatError {
    #[error("empty input: at least one observation is required")]
    EmptyInput,

    #[error("insufficient data: got {got} observation(s), need at least {min}")]
    InsufficientData { min: usize, got: usize },

    #[error("length mismatch: left sample has {left} observation(s), right has {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("invalid quantile fraction {p}: must lie in [0, 1]")]
    InvalidQuantile { p: f64 },
}
