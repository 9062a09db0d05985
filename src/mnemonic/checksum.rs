//! Checksum Engine
//!
//! SHA-256-derived checksum over an entropy block. Only the first hash byte
//! is ever consumed: the supported mnemonic lengths never need more than
//! 8 checksum bits.

use sha2::{Digest, Sha256};

use crate::error::MnemoResult;
use crate::mnemonic::bits::zero_fill;

/// Checksum of an entropy block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    /// Full SHA-256 hash of the entropy bytes, lowercase hex
    pub hash: String,
    /// Leading `length` bits of the first hash byte
    pub bits: String,
}

/// Compute the checksum of hex-encoded entropy.
///
/// The hash input is the raw entropy bytes (the hex string decoded), matching
/// the wire behavior the UI displays. `length` is the checksum bit count for
/// the mnemonic length in play, 4-8 for all supported lengths.
pub fn checksum_of(entropy_hex: &str, length: usize) -> MnemoResult<Checksum> {
    debug_assert!(length <= 8, "checksum never exceeds one hash byte");

    let entropy_bytes = hex::decode(entropy_hex)?;
    let digest = Sha256::digest(&entropy_bytes);

    let first_byte_bits = zero_fill(&format!("{:b}", digest[0]), 8);
    Ok(Checksum {
        hash: hex::encode(digest),
        bits: first_byte_bits[..length].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_256_bit_entropy() {
        let checksum = checksum_of(
            "86560a7297af30d54e721665fa785b4870045407d86871b2be23c46535dd42d8",
            8,
        )
        .unwrap();
        assert_eq!(
            checksum.hash,
            "7040d5e63e851b68dd061099a1b63c6dff332ae9048f0ac3770aefa637436b72"
        );
        assert_eq!(checksum.bits, "01110000");
    }

    #[test]
    fn test_known_128_bit_entropy() {
        let checksum = checksum_of("23fd0b33e32963fc09fef3f29bdd1fd2", 4).unwrap();
        assert_eq!(
            checksum.hash,
            "61d4348323ece8316dcde9870d5c9185a8ce9cc5e365c44b0deee1bc31e0aa9e"
        );
        assert_eq!(checksum.bits, "0110");
    }

    #[test]
    fn test_all_zero_entropy() {
        // the entropy behind "abandon abandon ... about"
        let checksum = checksum_of("00000000000000000000000000000000", 4).unwrap();
        assert_eq!(
            checksum.hash,
            "374708fff7719dd5979ec875d56cd2286f6d3cf7ec317a3b25632aab28ec37bb"
        );
        assert_eq!(checksum.bits, "0011");
    }

    #[test]
    fn test_malformed_hex_rejected() {
        assert!(checksum_of("zz", 4).is_err());
    }
}
