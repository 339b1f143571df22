//! Poseidon hash
//!
//! The algebraic sponge used by the Loopring rollup circuits: an x^5 S-box
//! permutation over the BN254 scalar field with a Cauchy MDS mixing layer,
//! hashing one to six field elements into one. The state is the inputs
//! followed by a single zero capacity slot, and the digest is the first
//! state element after the final round.

mod constants;
mod error;

pub use error::{PoseidonError, Result};

use ark_ff::{BigInteger, Field, PrimeField, Zero};
use constants::{mds_matrix, round_constants, MAX_INPUTS, N_ROUNDS_F, N_ROUNDS_P};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

pub use ark_bn254::Fr as Fq;

/// Order of the field the permutation runs over.
static Q: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
        10,
    )
    .expect("failed to parse Q")
});

/// Hash a sequence of canonical integers.
///
/// Accepts between one and six inputs, each of which must be a canonical
/// field element (strictly below Q); anything else is rejected.
pub fn hash(inputs: &[BigUint]) -> Result<BigUint> {
    if inputs.is_empty() || inputs.len() > MAX_INPUTS {
        return Err(PoseidonError::InvalidInputCount { got: inputs.len() });
    }
    for (index, input) in inputs.iter().enumerate() {
        if *input >= *Q {
            return Err(PoseidonError::InputOutOfRange { index });
        }
    }
    let elements: Vec<Fq> = inputs
        .iter()
        .map(|v| Fq::from_le_bytes_mod_order(&v.to_bytes_le()))
        .collect();
    let digest = hash_fields(&elements)?;
    Ok(BigUint::from_bytes_le(&digest.into_bigint().to_bytes_le()))
}

/// Hash field elements directly. Same permutation as [`hash`] without the
/// integer boundary; inputs are canonical by construction.
pub fn hash_fields(inputs: &[Fq]) -> Result<Fq> {
    if inputs.is_empty() || inputs.len() > MAX_INPUTS {
        return Err(PoseidonError::InvalidInputCount { got: inputs.len() });
    }
    let mut state = Vec::with_capacity(inputs.len() + 1);
    state.extend_from_slice(inputs);
    state.push(Fq::zero()); // capacity slot
    permutation(&mut state);
    Ok(state[0])
}

/// The round function: add the round constants to the state, apply the
/// S-box (to the whole state in full rounds, to the first element in
/// partial rounds), then mix through the MDS matrix.
fn permutation(state: &mut [Fq]) {
    let t = state.len();
    let n_rounds_p = N_ROUNDS_P[t - 2];
    let constants = round_constants(t);
    let mds = mds_matrix(t);
    let mut mixed = vec![Fq::zero(); t];

    for round in 0..N_ROUNDS_F + n_rounds_p {
        for (i, element) in state.iter_mut().enumerate() {
            *element += constants[round * t + i];
        }

        if round < N_ROUNDS_F / 2 || round >= N_ROUNDS_F / 2 + n_rounds_p {
            for element in state.iter_mut() {
                *element = quintic(*element);
            }
        } else {
            state[0] = quintic(state[0]);
        }

        for (i, slot) in mixed.iter_mut().enumerate() {
            *slot = Fq::zero();
            for (j, element) in state.iter().enumerate() {
                *slot += mds[i * t + j] * element;
            }
        }
        state.copy_from_slice(&mixed);
    }
}

#[inline]
fn quintic(x: Fq) -> Fq {
    x.square().square() * x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(s: &str) -> BigUint {
        BigUint::parse_bytes(s.as_bytes(), 10).unwrap()
    }

    #[test]
    fn test_hash_single_input() {
        let digest = hash(&[BigUint::from(1u64)]).unwrap();
        assert_eq!(
            digest,
            int("11316722965829087614032985243432266723826890185209218714357779037968059437034")
        );
    }

    #[test]
    fn test_hash_two_inputs() {
        let digest = hash(&[BigUint::from(1u64), BigUint::from(2u64)]).unwrap();
        assert_eq!(
            digest,
            int("18034868597434240293665220970421168445584131937984445797953356852217236273181")
        );
    }

    #[test]
    fn test_hash_six_inputs() {
        let inputs: Vec<BigUint> = [0u64, 1, 2, 0, 1, 2].iter().map(|&v| v.into()).collect();
        let digest = hash(&inputs).unwrap();
        assert_eq!(
            digest,
            int("13102070988478037395154308865607405548746274688434317574093002894058697028363")
        );
    }

    #[test]
    fn test_hash_large_input() {
        let raw = int("69588426711107115100232500042334179657931174539151555867956034570704220523596");
        // The raw value exceeds Q and is rejected; the canonical residue
        // hashes to the pinned digest.
        assert_eq!(
            hash(&[raw.clone()]),
            Err(PoseidonError::InputOutOfRange { index: 0 })
        );
        let digest = hash(&[raw % &*Q]).unwrap();
        assert_eq!(
            digest,
            int("17301542653460600976115435789627461515455895446166776549412913422670972634442")
        );
    }

    #[test]
    fn test_hash_rejects_empty_input() {
        assert_eq!(
            hash(&[]),
            Err(PoseidonError::InvalidInputCount { got: 0 })
        );
    }

    #[test]
    fn test_hash_rejects_seven_inputs() {
        let inputs = vec![BigUint::from(1u64); 7];
        assert_eq!(
            hash(&inputs),
            Err(PoseidonError::InvalidInputCount { got: 7 })
        );
    }

    #[test]
    fn test_hash_rejects_q() {
        let inputs = vec![BigUint::from(1u64), Q.clone()];
        assert_eq!(
            hash(&inputs),
            Err(PoseidonError::InputOutOfRange { index: 1 })
        );
    }

    #[test]
    fn test_width3_is_not_the_circom_parameterisation() {
        use light_poseidon::{Poseidon, PoseidonHasher};
        let mut circom = Poseidon::<Fq>::new_circom(2).unwrap();
        let circom_digest = circom.hash(&[Fq::from(1u64), Fq::from(2u64)]).unwrap();
        // The circom-family digest for (1, 2), as documented across its
        // ecosystem.
        let expected: Fq = ark_ff::MontFp!(
            "7853200120776062878684798364095072458815029376092732009249414926327459813530"
        );
        assert_eq!(circom_digest, expected);
        // The rollup runs a different instance of the hash family: same
        // input, different digest.
        assert_ne!(
            hash_fields(&[Fq::from(1u64), Fq::from(2u64)]).unwrap(),
            circom_digest
        );
    }

    #[test]
    fn test_hash_fields_agrees_with_hash() {
        let ints = vec![BigUint::from(7u64), BigUint::from(11u64)];
        let fields = vec![Fq::from(7u64), Fq::from(11u64)];
        let via_fields = hash_fields(&fields).unwrap();
        assert_eq!(
            hash(&ints).unwrap(),
            BigUint::from_bytes_le(&via_fields.into_bigint().to_bytes_le())
        );
    }
}
