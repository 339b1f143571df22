//! Error types for the babyjubjub library

use thiserror::Error;

/// Errors produced while decoding compressed curve points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BabyJubjubError {
    #[error("invalid point encoding: y coordinate out of range")]
    YCoordinateOutOfRange,

    #[error("invalid point encoding: denominator is zero")]
    DenominatorZero,

    #[error("invalid point encoding: denominator has no inverse")]
    DenominatorNoInverse,

    #[error("invalid point encoding: x^2 is not a square mod Q")]
    NotASquare,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BabyJubjubError>;
