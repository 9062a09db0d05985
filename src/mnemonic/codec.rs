//! Mnemonic Codec
//!
//! Maps word selections back to raw entropy + checksum, and entropy forward
//! to words. Also enumerates the checksum-valid candidates for the final
//! word slot, which is what makes interactive phrase construction possible:
//! the last word of a phrase is never a free choice.

use crate::error::{MnemoError, MnemoResult};
use crate::mnemonic::bits::{binary_to_hex, zero_fill};
use crate::mnemonic::checksum::checksum_of;
use crate::mnemonic::wordlist::WordList;
use crate::types::{ChecksumInfo, EntropyInfo, MnemonicDetails, MnemonicLength};

/// Decompose word selections into entropy, checksum, and last-word candidates.
///
/// `words` is one entry per slot; an empty string or a word absent from the
/// list counts as unselected. With fewer than `n - 1` selections only
/// `is_completed` is reported. Entropy and checksum appear once every slot is
/// filled; `valid_last_words` appears as soon as `n - 1` slots are filled and
/// always has exactly `2^extra_bits` entries, ordered by candidate value.
pub fn compute_details(words: &[String], word_list: &WordList) -> MnemoResult<MnemonicDetails> {
    let word_count = words.len();
    let selected: Vec<u16> = words
        .iter()
        .filter_map(|word| word_list.index_of(word))
        .collect();
    let is_completed = selected.len() == word_count;

    if selected.len() + 1 < word_count {
        return Ok(MnemonicDetails::incomplete());
    }

    let length = MnemonicLength::from_word_count(word_count)?;
    let entropy_bits = length.entropy_bits();
    let extra_bits = length.extra_bits();
    let checksum_len = length.checksum_bits();

    let mut binary_string = String::with_capacity(selected.len() * 11);
    for index in &selected {
        binary_string.push_str(&zero_fill(&format!("{:b}", index), 11));
    }
    // the first n-1 selections pin everything except the final word's free bits
    let prefix = &binary_string[..entropy_bits - extra_bits];

    let (entropy, checksum) = if is_completed {
        let entropy_binary = &binary_string[..entropy_bits];
        let entropy_hex = binary_to_hex(entropy_binary)?;
        let computed = checksum_of(&entropy_hex, checksum_len)?;
        (
            Some(EntropyInfo {
                binary: entropy_binary.to_string(),
                hex: entropy_hex,
            }),
            Some(ChecksumInfo {
                hash: computed.hash,
                // the bits the phrase actually carries; comparing them with
                // the hash's leading bits is how a caller detects a phrase
                // assembled with an invalid last word
                first_bits: binary_string[entropy_bits..entropy_bits + checksum_len].to_string(),
                length: checksum_len,
            }),
        )
    } else {
        (None, None)
    };

    let mut candidates = Vec::with_capacity(length.candidate_count());
    for value in 0..length.candidate_count() {
        let candidate_bits = zero_fill(&format!("{:b}", value), extra_bits);
        let candidate_hex = binary_to_hex(&format!("{}{}", prefix, candidate_bits))?;
        let candidate_checksum = checksum_of(&candidate_hex, checksum_len)?;
        let word_index =
            u16::from_str_radix(&format!("{}{}", candidate_bits, candidate_checksum.bits), 2)?;
        candidates.push(word_list.word_at(word_index).to_string());
    }

    Ok(MnemonicDetails {
        is_completed,
        entropy,
        checksum,
        valid_last_words: Some(candidates),
    })
}

/// Encode an entropy bit string into a complete mnemonic.
///
/// The checksum is appended and the result split into 11-bit word indexes.
pub fn encode(entropy: &str, word_list: &WordList) -> MnemoResult<Vec<String>> {
    let length = MnemonicLength::from_entropy_bits(entropy.len())?;

    let entropy_hex = binary_to_hex(entropy)?;
    let checksum = checksum_of(&entropy_hex, length.checksum_bits())?;
    let full_bits = format!("{}{}", entropy, checksum.bits);

    let mut words = Vec::with_capacity(length.word_count());
    for slot in 0..length.word_count() {
        let index = u16::from_str_radix(&full_bits[slot * 11..(slot + 1) * 11], 2)?;
        words.push(word_list.word_at(index).to_string());
    }
    Ok(words)
}

/// Require a complete, known-word phrase of a supported length.
///
/// Interactive flows tolerate unknown words (they are just unselected slots);
/// a caller about to derive a seed from a presumed-complete phrase must not.
pub fn validate_complete_phrase(words: &[String], word_list: &WordList) -> MnemoResult<()> {
    MnemonicLength::from_word_count(words.len())?;
    for (slot, word) in words.iter().enumerate() {
        if word_list.index_of(word).is_none() {
            return Err(MnemoError::word_not_found(format!(
                "Word not in list: {:?}",
                word
            ))
            .with_details(format!("slot {}", slot + 1)));
        }
    }
    Ok(())
}
