//! Error types for the eddsa-poseidon library

use babyjubjub::BabyJubjubError;
use thiserror::Error;

/// Errors produced while decoding compressed signatures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EddsaError {
    #[error("invalid R8 point: {0}")]
    InvalidPoint(#[from] BabyJubjubError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, EddsaError>;
