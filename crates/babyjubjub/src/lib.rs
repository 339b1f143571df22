//! Baby Jubjub Elliptic Curve
//!
//! Twisted Edwards curve arithmetic over the BN254 scalar field, in the
//! coordinate and wire conventions of the Loopring rollup circuits:
//! projective unified addition, little-endian point compression with the
//! x-coordinate sign in the top bit, and a (0, 0) sentinel for the point at
//! infinity.

mod constants;
mod error;

pub use constants::{
    biguint_to_fq, fq_to_biguint, fq_to_bytes_le, BASE8_X, BASE8_Y, COEFF_A, COEFF_D, COFACTOR,
    ORDER, Q, Q_HALF, SUB_ORDER,
};
pub use error::{BabyJubjubError, Result};

use ark_ff::{Field, Zero};
use num_bigint::BigUint;

// The base field of the curve is the scalar field of BN254.
pub use ark_bn254::Fr as Fq;

/// A point of the curve in affine coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: Fq,
    pub y: Fq,
}

/// A point in projective coordinates, representing (x/z, y/z).
///
/// Used as the working representation during scalar multiplication so that
/// no per-step field inversion is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointProjective {
    pub x: Fq,
    pub y: Fq,
    pub z: Fq,
}

/// The base point of the prime-order subgroup (the curve generator
/// multiplied by the cofactor).
pub fn base8() -> Point {
    Point {
        x: BASE8_X,
        y: BASE8_Y,
    }
}

/// Whether a coordinate is negative, i.e. greater than (Q - 1) / 2.
pub fn point_coord_sign(value: &Fq) -> bool {
    fq_to_biguint(value) > *Q_HALF
}

/// Pack a sign bit and a y coordinate into 32 bytes: y in little-endian
/// with the sign in the top bit of the last byte. Does not check that the
/// values describe a point on the curve.
pub fn pack_sign_y(sign: bool, y: &Fq) -> [u8; 32] {
    let mut buf = fq_to_bytes_le(y);
    if sign {
        buf[31] |= 0x80;
    }
    buf
}

/// Split a packed buffer into the sign bit and the raw y integer. The
/// inverse of [`pack_sign_y`]; performs no range or curve checks.
pub fn unpack_sign_y(buf: [u8; 32]) -> (bool, BigUint) {
    let mut bytes = buf;
    let sign = bytes[31] & 0x80 != 0;
    bytes[31] &= 0x7f;
    (sign, BigUint::from_bytes_le(&bytes))
}

/// Square root of `n` whose sign matches `sign`; the other root is the
/// negation. Fails if `n` is a quadratic non-residue.
fn sqrt_with_sign(n: Fq, sign: bool) -> Result<Fq> {
    let root = n.sqrt().ok_or(BabyJubjubError::NotASquare)?;
    if point_coord_sign(&root) == sign {
        Ok(root)
    } else {
        Ok(-root)
    }
}

impl Point {
    /// The group identity (0, 1).
    pub fn identity() -> Self {
        Point {
            x: Fq::zero(),
            y: Fq::ONE,
        }
    }

    /// Lift into projective coordinates with z = 1.
    pub fn projective(&self) -> PointProjective {
        PointProjective {
            x: self.x,
            y: self.y,
            z: Fq::ONE,
        }
    }

    /// Check the curve equation a*x^2 + y^2 = 1 + d*x^2*y^2.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        COEFF_A * x2 + y2 == Fq::ONE + COEFF_D * x2 * y2
    }

    /// Scalar multiplication by double-and-add, walking the bits of `s`
    /// from least to most significant.
    pub fn mul_scalar(&self, s: &BigUint) -> Point {
        let mut acc = PointProjective::identity();
        let mut doubler = self.projective();
        for i in 0..s.bits() {
            if s.bit(i) {
                acc = acc.add(&doubler);
            }
            doubler = doubler.add(&doubler);
        }
        acc.affine()
    }

    /// Compress into 32 bytes: little-endian y with the sign of x in the
    /// top bit of the last byte.
    pub fn compress(&self) -> [u8; 32] {
        pack_sign_y(point_coord_sign(&self.x), &self.y)
    }

    /// Decompress a 32-byte buffer produced by [`Point::compress`].
    pub fn decompress(buf: [u8; 32]) -> Result<Point> {
        let (sign, y) = unpack_sign_y(buf);
        Point::from_sign_and_y(sign, &y)
    }

    /// Recover the full point from the sign of x and the y coordinate,
    /// using the curve equation: x^2 = (1 - y^2) / (a - d*y^2).
    pub fn from_sign_and_y(sign: bool, y: &BigUint) -> Result<Point> {
        if *y >= *Q {
            return Err(BabyJubjubError::YCoordinateOutOfRange);
        }
        let y = biguint_to_fq(y);
        let y2 = y.square();

        let numerator = Fq::ONE - y2;
        let denominator = COEFF_A - COEFF_D * y2;
        if denominator.is_zero() {
            return Err(BabyJubjubError::DenominatorZero);
        }
        let x2 = numerator
            * denominator
                .inverse()
                .ok_or(BabyJubjubError::DenominatorNoInverse)?;

        let x = sqrt_with_sign(x2, sign)?;
        Ok(Point { x, y })
    }
}

impl PointProjective {
    /// The group identity (0, 1, 1).
    pub fn identity() -> Self {
        PointProjective {
            x: Fq::zero(),
            y: Fq::ONE,
            z: Fq::ONE,
        }
    }

    /// Unified point addition (add-2008-bbjlp).
    ///
    /// The formula has no special cases: it is valid for doubling and for
    /// addition of the identity, so no operand inspection happens here.
    pub fn add(&self, other: &PointProjective) -> PointProjective {
        // https://hyperelliptic.org/EFD/g1p/auto-twisted-projective.html#addition-add-2008-bbjlp
        let a = self.z * other.z;
        let b = a.square();
        let c = self.x * other.x;
        let d = self.y * other.y;
        let e = COEFF_D * c * d;
        let f = b - e;
        let g = b + e;
        let x3 = a * f * ((self.x + self.y) * (other.x + other.y) - c - d);
        let y3 = a * g * (d - COEFF_A * c);
        let z3 = f * g;
        PointProjective {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Convert back to affine coordinates.
    ///
    /// z = 0 marks the point at infinity and is reported as the (0, 0)
    /// sentinel, which is distinct from the group identity (0, 1).
    pub fn affine(&self) -> Point {
        let Some(zinv) = self.z.inverse() else {
            return Point {
                x: Fq::zero(),
                y: Fq::zero(),
            };
        };
        Point {
            x: self.x * zinv,
            y: self.y * zinv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::MontFp;

    #[test]
    fn test_base8_is_on_curve() {
        assert!(base8().is_on_curve());
        assert!(Point::identity().is_on_curve());
    }

    #[test]
    fn test_identity_is_neutral() {
        let sum = Point::identity().projective().add(&base8().projective());
        assert_eq!(sum.affine(), base8());
    }

    #[test]
    fn test_unified_add_doubles() {
        let b8 = base8().projective();
        let doubled = b8.add(&b8).affine();
        let expected = Point {
            x: MontFp!(
                "17324563846726889236817837922625232543153115346355010501047597319863650987830"
            ),
            y: MontFp!(
                "20022170825455209233733649024450576091402881793145646502279487074566492066831"
            ),
        };
        assert_eq!(doubled, expected);
        assert_eq!(base8().mul_scalar(&BigUint::from(2u64)), expected);
        assert!(doubled.is_on_curve());
    }

    #[test]
    fn test_add_commutes() {
        let p = base8();
        let q = base8().mul_scalar(&BigUint::from(17u64));
        let pq = p.projective().add(&q.projective()).affine();
        let qp = q.projective().add(&p.projective()).affine();
        assert_eq!(pq, qp);
        assert!(pq.is_on_curve());
    }

    #[test]
    fn test_add_associates() {
        let p = base8().projective();
        let q = base8().mul_scalar(&BigUint::from(2u64)).projective();
        let r = base8().mul_scalar(&BigUint::from(3u64)).projective();
        let left = p.add(&q).add(&r).affine();
        let right = p.add(&q.add(&r)).affine();
        assert_eq!(left, right);
    }

    #[test]
    fn test_mul_matches_repeated_addition() {
        let mut acc = Point::identity().projective();
        for _ in 0..5 {
            acc = acc.add(&base8().projective());
        }
        assert_eq!(acc.affine(), base8().mul_scalar(&BigUint::from(5u64)));
    }

    #[test]
    fn test_mul_distributes_over_scalar_addition() {
        let s2 = base8().mul_scalar(&BigUint::from(2u64));
        let s3 = base8().mul_scalar(&BigUint::from(3u64));
        let s5 = base8().mul_scalar(&BigUint::from(5u64));
        assert_eq!(s2.projective().add(&s3.projective()).affine(), s5);
    }

    #[test]
    fn test_mul_zero_is_identity() {
        assert_eq!(base8().mul_scalar(&BigUint::zero()), Point::identity());
    }

    #[test]
    fn test_fixed_scalar_111111() {
        let result = base8().mul_scalar(&BigUint::from(111111u64));
        let expected = Point {
            x: MontFp!(
                "12894607086534977228249577956588027801790788025536205513006396704011588938183"
            ),
            y: MontFp!(
                "12069570186614496255337894056846297858939758608278592423551025199369699830120"
            ),
        };
        assert_eq!(result, expected);
        assert!(result.is_on_curve());
    }

    #[test]
    fn test_subgroup_order_annihilates_base8() {
        assert_eq!(base8().mul_scalar(&SUB_ORDER), Point::identity());
        assert_eq!(base8().mul_scalar(&ORDER), Point::identity());
    }

    #[test]
    fn test_compress_base8() {
        // B8.x > (Q - 1) / 2, so the sign bit of the last byte is set.
        assert_eq!(
            hex::encode(base8().compress()),
            "d75291f9f7d88d34d1c1b00cedd4a9f98355c324fddddb18783d3c8d7f2907ae"
        );
    }

    #[test]
    fn test_compress_decompress_roundtrip() {
        for k in [1u64, 2, 7, 324, 111111, 56869496543825] {
            let point = base8().mul_scalar(&BigUint::from(k));
            let recovered = Point::decompress(point.compress()).expect("valid compressed point");
            assert_eq!(recovered, point, "roundtrip failed for scalar {k}");
        }
    }

    #[test]
    fn test_compress_decompress_random_scalars() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..8 {
            let k = BigUint::from(rng.gen::<u128>());
            let point = base8().mul_scalar(&k);
            let recovered = Point::decompress(point.compress()).expect("valid compressed point");
            assert_eq!(recovered, point);
        }
    }

    #[test]
    fn test_pack_unpack_sign_y() {
        let point = base8().mul_scalar(&BigUint::from(9u64));
        let packed = pack_sign_y(true, &point.y);
        let (sign, y) = unpack_sign_y(packed);
        assert!(sign);
        assert_eq!(y, fq_to_biguint(&point.y));
    }

    #[test]
    fn test_decompress_rejects_y_out_of_range() {
        // Little-endian encoding of Q itself; the sign bit is clear.
        let mut buf = [0u8; 32];
        buf.copy_from_slice(&hex::decode(
            "010000f093f5e1439170b97948e833285d588181b64550b829a031e1724e6430",
        )
        .unwrap());
        assert_eq!(
            Point::decompress(buf),
            Err(BabyJubjubError::YCoordinateOutOfRange)
        );
    }

    #[test]
    fn test_decompress_rejects_non_residue() {
        // y = 6 gives an x^2 with no square root mod Q.
        let mut buf = [0u8; 32];
        buf[0] = 6;
        assert_eq!(Point::decompress(buf), Err(BabyJubjubError::NotASquare));
    }

    #[test]
    fn test_projective_infinity_sentinel() {
        let infinity = PointProjective {
            x: Fq::zero(),
            y: Fq::ONE,
            z: Fq::zero(),
        };
        let affine = infinity.affine();
        assert_eq!(affine.x, Fq::zero());
        assert_eq!(affine.y, Fq::zero());
    }

    #[test]
    fn test_is_on_curve_rejects_bogus_point() {
        let bogus = Point {
            x: Fq::ONE,
            y: Fq::zero(),
        };
        assert!(!bogus.is_on_curve());
    }
}
