//! Error types for the poseidon library

use thiserror::Error;

/// Errors reported by the hash entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoseidonError {
    #[error("invalid number of inputs: {got}, must be between 1 and 6")]
    InvalidInputCount { got: usize },

    #[error("input {index} is not a canonical field element")]
    InputOutOfRange { index: usize },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PoseidonError>;
