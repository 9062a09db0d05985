//! Seed Derivation
//!
//! Turns a finished phrase (plus optional passphrase) into the 512-bit seed
//! that downstream wallet derivation consumes, and provides the two
//! entropy-to-phrase generation paths.
//!
//! SECURITY: password and seed buffers are zeroized on drop.

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

use crate::error::MnemoResult;
use crate::mnemonic::bits::hex_to_binary;
use crate::mnemonic::codec::encode;
use crate::mnemonic::entropy::random_bits;
use crate::mnemonic::wordlist::WordList;
use crate::types::MnemonicLength;

/// PBKDF2 iteration count for phrase-to-seed conversion
const PBKDF2_ROUNDS: u32 = 2048;

/// Seed size in bytes (512 bits)
const SEED_BYTES: usize = 64;

/// Derive the 64-byte seed from a phrase and optional passphrase.
///
/// Password is the words joined with single spaces; salt is `"mnemonic"`
/// followed by the passphrase (absent and empty passphrases are equivalent).
/// Pure and deterministic. The phrase is not validated here; callers that
/// need a well-formed phrase validate before deriving.
pub fn derive_seed(words: &[String], passphrase: Option<&str>) -> String {
    let password = Zeroizing::new(words.join(" "));
    let salt = Zeroizing::new(format!("mnemonic{}", passphrase.unwrap_or("")));

    let mut seed = Zeroizing::new([0u8; SEED_BYTES]);
    pbkdf2::<Hmac<Sha512>>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut seed[..],
    )
    .expect("HMAC accepts keys of any length");
    hex::encode(&seed[..])
}

/// Generate a fresh random mnemonic of the requested length.
pub fn generate_random_mnemonic(
    length: MnemonicLength,
    word_list: &WordList,
) -> MnemoResult<Vec<String>> {
    let entropy = Zeroizing::new(random_bits(length.entropy_bits())?);
    encode(&entropy, word_list)
}

/// Derive a mnemonic deterministically from arbitrary text.
///
/// The SHA-256 hash of the text's UTF-8 bytes is the entropy material,
/// truncated to the entropy size when the requested length needs fewer than
/// 256 bits. Identical text and length always produce the same phrase.
pub fn mnemonic_from_entropy(
    source_text: &str,
    length: MnemonicLength,
    word_list: &WordList,
) -> MnemoResult<Vec<String>> {
    let digest = Sha256::digest(source_text.as_bytes());
    let mut bits = Zeroizing::new(hex_to_binary(&hex::encode(digest))?);
    bits.truncate(length.entropy_bits());
    encode(&bits, word_list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonic::codec::compute_details;

    #[test]
    fn test_empty_phrase_vector() {
        assert_eq!(
            derive_seed(&[], None),
            "4ed8d4b17698ddeaa1f1559f152f87b5d472f725ca86d341bd0276f1b61197e2\
             1dd5a391f9f5ed7340ff4d4513aab9cce44f9497a5e7ed85fd818876b6eb402e"
        );
    }

    #[test]
    fn test_abandon_about_vector() {
        let mut words = vec!["abandon".to_string(); 11];
        words.push("about".to_string());
        assert_eq!(
            derive_seed(&words, None),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
             9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_absent_and_empty_passphrase_agree() {
        let words = vec!["abandon".to_string(); 12];
        assert_eq!(derive_seed(&words, None), derive_seed(&words, Some("")));
        assert_ne!(derive_seed(&words, None), derive_seed(&words, Some("abc")));
    }

    #[test]
    fn test_from_entropy_is_deterministic() {
        let list = WordList::english();
        let a = mnemonic_from_entropy("test", MnemonicLength::Words12, list).unwrap();
        let b = mnemonic_from_entropy("test", MnemonicLength::Words12, list).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a,
            vec![
                "palace", "current", "call", "awesome", "shoulder", "rate", "half", "wish",
                "parrot", "clean", "recall", "claim"
            ]
        );
    }

    #[test]
    fn test_generated_phrases_are_well_formed() {
        let list = WordList::english();
        for length in crate::types::LENGTH_OPTIONS {
            let words = generate_random_mnemonic(length, list).unwrap();
            assert_eq!(words.len(), length.word_count());

            let details = compute_details(&words, list).unwrap();
            assert!(details.is_completed);
            let candidates = details.valid_last_words.unwrap();
            assert!(candidates.contains(words.last().unwrap()));
        }
    }
}
