//! Curve constants and canonical-integer conversions

use ark_bn254::Fr as Fq;
use ark_ff::{BigInteger, MontFp, PrimeField};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Order of the prime field the curve lives on (the BN254 scalar field
/// prime).
pub static Q: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
        10,
    )
    .expect("failed to parse Q")
});

/// (Q - 1) / 2, the threshold above which a coordinate counts as negative.
pub static Q_HALF: Lazy<BigUint> = Lazy::new(|| &*Q >> 1);

/// Order of the full curve group.
pub static ORDER: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"21888242871839275222246405745257275088614511777268538073601725287587578984328",
        10,
    )
    .expect("failed to parse the curve order")
});

/// Order of the prime-order subgroup generated by B8: ORDER / 8.
pub static SUB_ORDER: Lazy<BigUint> = Lazy::new(|| &*ORDER >> 3);

/// Cofactor of the prime-order subgroup.
pub const COFACTOR: u64 = 8;

// Twisted Edwards form: a*x^2 + y^2 = 1 + d*x^2*y^2
/// Coefficient `a`
pub const COEFF_A: Fq = MontFp!("168700");
/// Coefficient `d`
pub const COEFF_D: Fq = MontFp!("168696");

/// x-coordinate of B8, the base point of the prime-order subgroup.
pub const BASE8_X: Fq =
    MontFp!("16540640123574156134436876038791482806971768689494387082833631921987005038935");
/// y-coordinate of B8.
pub const BASE8_Y: Fq =
    MontFp!("20819045374670962167435360035096875258406992893633759881276124905556507972311");

/// Convert a BigUint to a field element, reducing mod Q.
pub fn biguint_to_fq(value: &BigUint) -> Fq {
    Fq::from_le_bytes_mod_order(&value.to_bytes_le())
}

/// Convert a field element to its canonical BigUint representation.
pub fn fq_to_biguint(value: &Fq) -> BigUint {
    BigUint::from_bytes_le(&value.into_bigint().to_bytes_le())
}

/// Canonical little-endian encoding of a field element, padded to 32 bytes.
pub fn fq_to_bytes_le(value: &Fq) -> [u8; 32] {
    let bytes = value.into_bigint().to_bytes_le();
    let mut out = [0u8; 32];
    let len = bytes.len().min(32);
    out[..len].copy_from_slice(&bytes[..len]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_order_is_order_over_cofactor() {
        assert_eq!(*SUB_ORDER, &*ORDER / BigUint::from(COFACTOR));
    }

    #[test]
    fn test_biguint_fq_roundtrip() {
        let value = BigUint::parse_bytes(b"123456789123456789123456789", 10).unwrap();
        assert_eq!(fq_to_biguint(&biguint_to_fq(&value)), value);
    }

    #[test]
    fn test_biguint_to_fq_reduces() {
        let wrapped = &*Q + BigUint::from(5u64);
        assert_eq!(fq_to_biguint(&biguint_to_fq(&wrapped)), BigUint::from(5u64));
    }
}
