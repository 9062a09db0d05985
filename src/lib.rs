//! Mnemo Core Library
//!
//! Rust backend for the Mnemo interactive BIP39 mnemonic builder.
//!
//! # Architecture
//!
//! This crate provides:
//! - **mnemonic**: entropy <-> phrase codec, last-word candidate resolution,
//!   and PBKDF2 seed derivation
//! - **types**: the data structures crossing module and FFI boundaries
//! - **ffi**: C-ABI exports for embedding in a native UI shell
//!
//! The UI layer itself (word pickers, layout, debounce timers) lives outside
//! this crate. It supplies a word list and word selections, and consumes the
//! computed fields.
//!
//! # Security
//!
//! This crate uses `zeroize` to securely clear sensitive data from memory.
//! Entropy, passwords, and seed buffers are zeroed when dropped, and the
//! logger redacts phrase material.
//!
//! # Example
//!
//! ```rust
//! use mnemo_core::mnemonic::{self, WordList};
//! use mnemo_core::types::MnemonicLength;
//!
//! # fn main() -> mnemo_core::MnemoResult<()> {
//! let list = WordList::english();
//! let words = mnemonic::generate_random_mnemonic(MnemonicLength::Words24, list)?;
//! let details = mnemonic::compute_details(&words, list)?;
//! assert!(details.is_completed);
//!
//! let seed = mnemonic::derive_seed(&words, None);
//! assert_eq!(seed.len(), 128);
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod error;
pub mod types;
pub mod ffi;
pub mod mnemonic;
pub mod utils;

// Re-export key types for convenience
pub use error::{ErrorCode, MnemoError, MnemoResult};
pub use types::*;

// Re-export the core surface the UI collaborator calls
pub use mnemonic::{
    compute_details,
    derive_seed,
    generate_random_mnemonic,
    mnemonic_from_entropy,
    WordList,
};
