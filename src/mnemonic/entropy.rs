//! Entropy Source
//!
//! Produces random bit strings from the operating system CSPRNG. A
//! non-cryptographic generator here would be a correctness defect, not a
//! matter of taste: the mnemonic guards real keys downstream.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{MnemoError, MnemoResult};
use crate::mnemonic::bits::zero_fill;

/// Draw `bit_length` random bits as a '0'/'1' string.
///
/// `bit_length` must be a positive multiple of 32; the bits are produced as
/// independent 32-bit draws concatenated in generation order.
pub fn random_bits(bit_length: usize) -> MnemoResult<String> {
    if bit_length == 0 || bit_length % 32 != 0 {
        return Err(MnemoError::invalid_length(format!(
            "Entropy bit length must be a positive multiple of 32, got {}",
            bit_length
        )));
    }

    let mut rng = OsRng;
    let mut bits = String::with_capacity(bit_length);
    for _ in 0..bit_length / 32 {
        let value = rng.next_u32();
        bits.push_str(&zero_fill(&format!("{:b}", value), 32));
    }
    Ok(bits)
}
