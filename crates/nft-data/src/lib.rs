//! NFT data hashing
//!
//! Packs an NFT's identity fields into a Poseidon input vector and returns
//! the digest as a hex string, matching the rollup's NFT data field.

use num_bigint::BigUint;
use num_traits::{Num, Zero};
use thiserror::Error;

/// Errors produced while parsing the NFT identity fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NftDataError {
    #[error("invalid {field} value {value:?}: not a base-{base} integer")]
    ParseError {
        field: &'static str,
        value: String,
        base: u32,
    },

    #[error(transparent)]
    Hash(#[from] poseidon::PoseidonError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, NftDataError>;

fn parse_hex(field: &'static str, value: &str) -> Result<BigUint> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(NftDataError::ParseError {
            field,
            value: value.to_string(),
            base: 16,
        });
    }
    BigUint::from_str_radix(digits, 16).map_err(|_| NftDataError::ParseError {
        field,
        value: value.to_string(),
        base: 16,
    })
}

fn parse_dec(field: &'static str, value: &str) -> Result<BigUint> {
    BigUint::from_str_radix(value, 10).map_err(|_| NftDataError::ParseError {
        field,
        value: value.to_string(),
        base: 10,
    })
}

/// Hash an NFT's identity fields into its NFT data word.
///
/// `nft_id` is a hex string of arbitrary length; identifiers longer than 32
/// hex digits are split into a high and a low 128-bit half. Addresses are
/// hex, royalty percentage and NFT type are decimal. The result is the
/// Poseidon digest of (minter, type, token, idLo, idHi, royalty) as a
/// lowercase `0x`-prefixed hex string with no leading-zero padding.
pub fn get_nft_data(
    nft_id: &str,
    token_address: &str,
    royalty_percentage: &str,
    minter_address: &str,
    nft_type: &str,
) -> Result<String> {
    let token = parse_hex("tokenAddress", token_address)?;
    let minter = parse_hex("minterAddress", minter_address)?;
    let royalty = parse_dec("royaltyPercentage", royalty_percentage)?;
    let nft_type = parse_dec("nftType", nft_type)?;

    let id_digits = nft_id.strip_prefix("0x").unwrap_or(nft_id);
    if id_digits.is_empty() || !id_digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(NftDataError::ParseError {
            field: "nftId",
            value: nft_id.to_string(),
            base: 16,
        });
    }
    let (id_hi, id_lo) = if id_digits.len() > 32 {
        let split = id_digits.len() - 32;
        (
            parse_hex("nftId", &id_digits[..split])?,
            parse_hex("nftId", &id_digits[split..])?,
        )
    } else {
        (BigUint::zero(), parse_hex("nftId", id_digits)?)
    };

    let digest = poseidon::hash(&[minter, nft_type, token, id_lo, id_hi, royalty])?;
    Ok(format!("0x{digest:x}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_nft_data() {
        let nft_data = get_nft_data(
            "0xf70ade3cf6c8d9efdf5c5c826334568ef502e6a0837c4b727cf1a02eb0d1c7ca",
            "0xaf6952cc235343e0cbbb3dcf4c171157ae9b2323",
            "1",
            "0x773674eba65277e47faa2bf4fd2e3fa6c2f01228",
            "0",
        )
        .unwrap();
        assert_eq!(
            nft_data,
            "0x1ae8f73b227ebc5d6372247ffeed30dd4723e44b9f26e31dc70bcb8dec960011"
        );
    }

    #[test]
    fn test_get_nft_data_short_token_address() {
        let nft_data = get_nft_data(
            "0x00444a8a4d011553dfe4aed1f4faba56036924a7f07f56f609013e708c0f8c64",
            "0x1234",
            "7",
            "0x7ea605cc180c59f5f642d6ea7a04743cb3d98db4",
            "0",
        )
        .unwrap();
        assert_eq!(
            nft_data,
            "0x2736b4c2e3a80b5ca68700c2d5225602de036ff4ba61ee1912b271a4a92b0737"
        );
    }

    #[test]
    fn test_hex_prefix_is_optional() {
        let with_prefix = get_nft_data(
            "0x00444a8a4d011553dfe4aed1f4faba56036924a7f07f56f609013e708c0f8c64",
            "0x1234",
            "7",
            "0x7ea605cc180c59f5f642d6ea7a04743cb3d98db4",
            "0",
        )
        .unwrap();
        let without_prefix = get_nft_data(
            "00444a8a4d011553dfe4aed1f4faba56036924a7f07f56f609013e708c0f8c64",
            "1234",
            "7",
            "7ea605cc180c59f5f642d6ea7a04743cb3d98db4",
            "0",
        )
        .unwrap();
        assert_eq!(with_prefix, without_prefix);
    }

    #[test]
    fn test_short_id_has_zero_high_half() {
        // 32 hex digits or fewer: the id is entirely in the low half.
        let short = get_nft_data(
            "0xf502e6a0837c4b727cf1a02eb0d1c7ca",
            "0x1234",
            "0",
            "0x7ea605cc180c59f5f642d6ea7a04743cb3d98db4",
            "0",
        );
        assert!(short.is_ok());
    }

    #[test]
    fn test_rejects_invalid_hex() {
        let result = get_nft_data(
            "0xzz",
            "0x1234",
            "0",
            "0x7ea605cc180c59f5f642d6ea7a04743cb3d98db4",
            "0",
        );
        assert!(matches!(
            result,
            Err(NftDataError::ParseError { field: "nftId", .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_decimal() {
        let result = get_nft_data(
            "0x01",
            "0x1234",
            "one",
            "0x7ea605cc180c59f5f642d6ea7a04743cb3d98db4",
            "0",
        );
        assert!(matches!(
            result,
            Err(NftDataError::ParseError {
                field: "royaltyPercentage",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_empty_field() {
        let result = get_nft_data(
            "0x01",
            "",
            "0",
            "0x7ea605cc180c59f5f642d6ea7a04743cb3d98db4",
            "0",
        );
        assert!(matches!(result, Err(NftDataError::ParseError { .. })));
    }
}
