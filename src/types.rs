//! Shared types for Mnemo Core
//!
//! All data structures that cross module boundaries are defined here
//! for consistent serialization and FFI compatibility.

use serde::{Deserialize, Serialize};

use crate::error::MnemoError;

// =============================================================================
// Mnemonic Length
// =============================================================================

/// Supported mnemonic lengths with their fixed entropy sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum MnemonicLength {
    Words12,
    Words15,
    Words18,
    Words21,
    Words24,
}

/// All supported lengths, longest first (the order the UI offers them)
pub const LENGTH_OPTIONS: [MnemonicLength; 5] = [
    MnemonicLength::Words24,
    MnemonicLength::Words21,
    MnemonicLength::Words18,
    MnemonicLength::Words15,
    MnemonicLength::Words12,
];

impl MnemonicLength {
    /// Number of words in the mnemonic
    pub fn word_count(&self) -> usize {
        match self {
            MnemonicLength::Words12 => 12,
            MnemonicLength::Words15 => 15,
            MnemonicLength::Words18 => 18,
            MnemonicLength::Words21 => 21,
            MnemonicLength::Words24 => 24,
        }
    }

    /// Entropy size in bits, always a multiple of 32
    pub fn entropy_bits(&self) -> usize {
        match self {
            MnemonicLength::Words12 => 128,
            MnemonicLength::Words15 => 160,
            MnemonicLength::Words18 => 192,
            MnemonicLength::Words21 => 224,
            MnemonicLength::Words24 => 256,
        }
    }

    /// Checksum size in bits: total index bits minus entropy bits
    pub fn checksum_bits(&self) -> usize {
        self.word_count() * 11 - self.entropy_bits()
    }

    /// Entropy bits not covered by the first `word_count - 1` word indexes.
    /// These are the free bits of the final word; the rest is checksum.
    pub fn extra_bits(&self) -> usize {
        self.entropy_bits() - 11 * (self.word_count() - 1)
    }

    /// Number of checksum-valid candidates for the final word slot
    pub fn candidate_count(&self) -> usize {
        1 << self.extra_bits()
    }

    pub fn from_word_count(count: usize) -> Result<Self, MnemoError> {
        match count {
            12 => Ok(MnemonicLength::Words12),
            15 => Ok(MnemonicLength::Words15),
            18 => Ok(MnemonicLength::Words18),
            21 => Ok(MnemonicLength::Words21),
            24 => Ok(MnemonicLength::Words24),
            other => Err(MnemoError::invalid_length(format!(
                "Unsupported mnemonic length: {}",
                other
            ))
            .with_details("Supported lengths: 12, 15, 18, 21, 24")),
        }
    }

    pub fn from_entropy_bits(bits: usize) -> Result<Self, MnemoError> {
        match bits {
            128 => Ok(MnemonicLength::Words12),
            160 => Ok(MnemonicLength::Words15),
            192 => Ok(MnemonicLength::Words18),
            224 => Ok(MnemonicLength::Words21),
            256 => Ok(MnemonicLength::Words24),
            other => Err(MnemoError::invalid_length(format!(
                "Unsupported entropy size: {} bits",
                other
            ))
            .with_details("Supported sizes: 128, 160, 192, 224, 256")),
        }
    }
}

impl TryFrom<usize> for MnemonicLength {
    type Error = MnemoError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        MnemonicLength::from_word_count(count)
    }
}

impl From<MnemonicLength> for usize {
    fn from(length: MnemonicLength) -> usize {
        length.word_count()
    }
}

// =============================================================================
// Mnemonic Details
// =============================================================================

/// Entropy of a completed mnemonic in both encodings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntropyInfo {
    /// Bit string, `entropy_bits` characters of '0'/'1'
    pub binary: String,
    /// The same bits as lowercase hex
    pub hex: String,
}

/// Checksum of a completed mnemonic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumInfo {
    /// Full SHA-256 hash of the entropy bytes, surfaced for display/audit
    pub hash: String,
    /// The checksum bits the phrase actually carries in its final word
    pub first_bits: String,
    /// Checksum length in bits (4-8 depending on mnemonic length)
    pub length: usize,
}

/// Everything the UI needs to render the state of a (partial) mnemonic.
///
/// `entropy` and `checksum` are only present once every slot holds a known
/// word. `valid_last_words` is present as soon as all but one slot is filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MnemonicDetails {
    pub is_completed: bool,
    pub entropy: Option<EntropyInfo>,
    pub checksum: Option<ChecksumInfo>,
    pub valid_last_words: Option<Vec<String>>,
}

impl MnemonicDetails {
    /// The partial result returned while too few words are selected
    pub fn incomplete() -> Self {
        Self {
            is_completed: false,
            entropy: None,
            checksum: None,
            valid_last_words: None,
        }
    }
}

// =============================================================================
// API Response Wrapper (for FFI)
// =============================================================================

/// Standard response wrapper for all FFI calls
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<MnemoError>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: MnemoError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"code":"internal","message":"Serialization failed"}}"#
                .to_string()
        })
    }
}
