//! # EdDSA-Poseidon
//!
//! EdDSA signatures over the Baby Jubjub curve with Poseidon as the message
//! hash, in the wire format of the Loopring rollup: signatures produced
//! here verify inside the rollup's SNARK circuits and vice versa.
//!
//! The secret scalar is the raw little-endian integer of the 32 key bytes
//! (no hashing or clamping), and the deterministic nonce is SHA-512 over an
//! asymmetric byte encoding of key and message; both quirks are required
//! for circuit compatibility and must not be "fixed".

mod eddsa;
mod error;

pub use eddsa::{PrivateKey, PublicKey, Signature, SignatureComp};
pub use error::{EddsaError, Result};

// Re-export commonly used types from dependencies
pub use babyjubjub::{base8, Point};
pub use num_bigint::BigUint;
