//! Mnemonic Module
//!
//! Entropy <-> mnemonic codec, last-word candidate resolution, and seed
//! derivation. The word list is always passed in by the caller; these
//! functions hold no state of their own.

mod bits;
mod checksum;
mod codec;
mod entropy;
mod seed;
mod wordlist;

pub use bits::{binary_to_hex, hex_to_binary, zero_fill};
pub use checksum::{checksum_of, Checksum};
pub use codec::{compute_details, encode, validate_complete_phrase};
pub use entropy::random_bits;
pub use seed::{derive_seed, generate_random_mnemonic, mnemonic_from_entropy};
pub use wordlist::{WordList, WordListError, WORD_COUNT};
