use crate::error::Result;
use babyjubjub::{base8, biguint_to_fq, fq_to_biguint, Point, ORDER, SUB_ORDER};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;
use sha2::{Digest, Sha512};

/// An EdDSA private key: an opaque 32-byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey(pub [u8; 32]);

/// An EdDSA public key: a point of the prime-order subgroup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(pub Point);

/// An uncompressed EdDSA signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// The nonce commitment R8 = r * B8.
    pub r8: Point,
    /// The response scalar S = r + h * s mod n.
    pub s: BigUint,
}

/// A compressed EdDSA signature: compressed R8 followed by S in
/// little-endian.
pub type SignatureComp = [u8; 64];

/// Little-endian encoding padded to 32 bytes.
fn le_bytes_32(value: &BigUint) -> [u8; 32] {
    let bytes = value.to_bytes_le();
    let mut out = [0u8; 32];
    let len = bytes.len().min(32);
    out[..len].copy_from_slice(&bytes[..len]);
    out
}

impl PrivateKey {
    /// Generate a key from 32 random bytes.
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill(&mut bytes);
        PrivateKey(bytes)
    }

    /// The secret scalar: the little-endian integer of the key bytes,
    /// taken as is. The rollup circuits expect the raw scalar, so there is
    /// no hashing, clamping, or cofactor shift here.
    pub fn scalar(&self) -> BigUint {
        BigUint::from_bytes_le(&self.0)
    }

    /// The public key A = s * B8.
    pub fn public(&self) -> PublicKey {
        PublicKey(base8().mul_scalar(&self.scalar()))
    }

    /// Sign a message already encoded as a canonical field element.
    ///
    /// The deterministic nonce is SHA-512 over the big-endian byte
    /// representation of the key's little-endian integer followed by the
    /// 32-byte little-endian message; the byte-order asymmetry is part of
    /// the wire format.
    pub fn sign(&self, msg: &BigUint) -> Signature {
        let secret = self.scalar();
        let a = self.public().0;

        let n = BigUint::from_bytes_be(&self.0);
        let mut preimage = if n.is_zero() {
            Vec::new() // zero has an empty big-endian representation
        } else {
            n.to_bytes_be()
        };
        preimage.extend_from_slice(&le_bytes_32(msg));

        let digest = Sha512::digest(&preimage);
        let r = BigUint::from_bytes_le(&digest) % &*SUB_ORDER;
        let r8 = base8().mul_scalar(&r);

        let hm = poseidon::hash_fields(&[r8.x, r8.y, a.x, a.y, biguint_to_fq(msg)])
            .expect("five inputs is a supported hash width");

        let s = (r + fq_to_biguint(&hm) * secret) % &*ORDER;
        Signature { r8, s }
    }
}

impl PublicKey {
    /// The curve point of the key.
    pub fn point(&self) -> &Point {
        &self.0
    }

    /// Verify a signature: S * B8 == R8 + h * A.
    ///
    /// Total over its input domain; a failed message hash verifies as
    /// false rather than erroring.
    pub fn verify(&self, msg: &BigUint, sig: &Signature) -> bool {
        let pk = &self.0;
        let hm = match poseidon::hash_fields(&[sig.r8.x, sig.r8.y, pk.x, pk.y, biguint_to_fq(msg)])
        {
            Ok(hm) => hm,
            Err(_) => return false,
        };

        let left = base8().mul_scalar(&sig.s);
        let right = pk.mul_scalar(&fq_to_biguint(&hm));
        let right = sig.r8.projective().add(&right.projective()).affine();
        left == right
    }
}

impl Signature {
    /// Compress into 64 bytes: compressed R8 followed by S in
    /// little-endian.
    pub fn compress(&self) -> SignatureComp {
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(&self.r8.compress());
        buf[32..].copy_from_slice(&le_bytes_32(&self.s));
        buf
    }

    /// Decompress a 64-byte signature. Fails only if the R8 half is not a
    /// valid compressed point; the S half is read without a range check.
    pub fn decompress(buf: SignatureComp) -> Result<Signature> {
        let mut r8_bytes = [0u8; 32];
        r8_bytes.copy_from_slice(&buf[..32]);
        let r8 = Point::decompress(r8_bytes)?;
        let s = BigUint::from_bytes_le(&buf[32..]);
        Ok(Signature { r8, s })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use babyjubjub::Q;

    fn int(s: &str) -> BigUint {
        BigUint::parse_bytes(s.as_bytes(), 10).unwrap()
    }

    fn key_from_hex(s: &str) -> PrivateKey {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hex::decode(s).unwrap());
        PrivateKey(bytes)
    }

    #[test]
    fn test_public_key_coordinates_are_canonical() {
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = i as u8;
        }
        let pk = PrivateKey(bytes).public();
        assert!(fq_to_biguint(&pk.0.x) < *Q);
        assert!(fq_to_biguint(&pk.0.y) < *Q);
        assert!(pk.0.is_on_curve());
    }

    #[test]
    fn test_sign_verify_fixed_key() {
        let k = key_from_hex("0001020304050607080900010203040506070809000102030405060708090001");
        let msg = BigUint::from_bytes_le(&hex::decode("00010203040506070809").unwrap());

        let pk = k.public();
        assert_eq!(
            fq_to_biguint(&pk.0.x),
            int("15872208232780880391323496162615626329490592476459343692724793783715106083082")
        );
        assert_eq!(
            fq_to_biguint(&pk.0.y),
            int("3297629380257478865105287016917085619944486593062417198110858086548618481395")
        );

        let sig = k.sign(&msg);
        assert_eq!(
            fq_to_biguint(&sig.r8.x),
            int("10470600857345906672881301454650559478416126535213901415186229677124703353344")
        );
        assert_eq!(
            fq_to_biguint(&sig.r8.y),
            int("2330178328697548138350692466726532806450708652360740274697284865429821185419")
        );
        assert_eq!(
            sig.s,
            int("16556718011482721529331191048420809849166553300187673071306564881097958263618")
        );

        assert!(pk.verify(&msg, &sig));

        let buf = sig.compress();
        assert_eq!(
            hex::encode(buf),
            "8bddcb0b736619f2976300733d6e233ef48e489e3ffaa0065552d9e38dd52605\
             428b0a2d2b589085faba1da3e1a6df19c4afaf34ec90f589cac379d532c59a24"
        );
        let sig2 = Signature::decompress(buf).unwrap();
        assert_eq!(sig2, sig);
        assert!(pk.verify(&msg, &sig2));
    }

    #[test]
    fn test_verify_external_signature() {
        let key = int("56869496543825");
        let k = PrivateKey(le_bytes_32(&key));
        let pk = k.public();
        assert_eq!(
            fq_to_biguint(&pk.0.x),
            int("9255092729144892245186624611131828247442112563544941131408300200214096116351")
        );
        assert_eq!(
            fq_to_biguint(&pk.0.y),
            int("8460370541846376796657659750509399834188652251932899797602116208684247832083")
        );

        let msg =
            int("18907120458743615336946847248227397370763473802204269898187195559525130063203");
        let sig = Signature {
            r8: Point {
                x: biguint_to_fq(&int(
                    "12752937249904285198676276090843566060401682639184875784873451302664399892304",
                )),
                y: biguint_to_fq(&int(
                    "13530361082613950739674235863189737173485045373827356210876301607961589355327",
                )),
            },
            s: int("7616254846080660730932216519770737127037155777726245055053503272117180880572"),
        };
        assert!(pk.verify(&msg, &sig));
    }

    #[test]
    fn test_verify_external_signature_reduced_message() {
        let key = int("56869496543825");
        let k = PrivateKey(le_bytes_32(&key));
        let pk = k.public();

        let msg = int(
            "69588426711107115100232500042334179657931174539151555867956034570704220523596",
        ) % &*Q;
        let sig = Signature {
            r8: Point {
                x: biguint_to_fq(&int(
                    "15162295769440257382486195264681544386788758457719201693385196316384812064800",
                )),
                y: biguint_to_fq(&int(
                    "2782493627416942909007936076956568507304418921277473381438986134099538816121",
                )),
            },
            s: int("16835165705656063478925976830596286105859651486320548752684160221106715530538"),
        };
        assert!(pk.verify(&msg, &sig));
    }

    #[test]
    fn test_verify_rejects_wrong_message() {
        let k = PrivateKey::random();
        let msg = BigUint::from(12345u64);
        let sig = k.sign(&msg);
        assert!(k.public().verify(&msg, &sig));
        assert!(!k.public().verify(&BigUint::from(54321u64), &sig));
    }

    #[test]
    fn test_verify_rejects_tampered_s() {
        let k = PrivateKey::random();
        let msg = BigUint::from(99999u64);
        let mut sig = k.sign(&msg);
        sig.s += BigUint::from(1u64);
        assert!(!k.public().verify(&msg, &sig));
    }

    #[test]
    fn test_sign_verify_random_keys() {
        for _ in 0..4 {
            let k = PrivateKey::random();
            let msg = BigUint::from(rand::thread_rng().gen::<u64>());
            let sig = k.sign(&msg);
            assert!(k.public().verify(&msg, &sig));

            let sig2 = Signature::decompress(sig.compress()).unwrap();
            assert!(k.public().verify(&msg, &sig2));
        }
    }
}
