//! Word List
//!
//! Bidirectional mapping between a word and its canonical 11-bit index
//! (0-2047) in an ordered, validated dictionary. The list is injected into
//! every codec call; the bundled English list is only a convenience default
//! for callers that do not supply their own.

use std::collections::HashMap;

use lazy_static::lazy_static;
use thiserror::Error;

/// Required dictionary size: one word per 11-bit value
pub const WORD_COUNT: usize = 2048;

const ENGLISH_WORDS: &str = include_str!("english.txt");

lazy_static! {
    static ref ENGLISH: WordList = WordList::new(
        ENGLISH_WORDS.lines().map(str::to_string).collect()
    )
    .expect("bundled English word list is valid");
}

/// Errors raised while constructing a word list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("word list has {0} words, expected {expected}", expected = WORD_COUNT)]
    WrongSize(usize),
    #[error("word list contains duplicate word: {0}")]
    DuplicateWord(String),
}

/// An ordered dictionary of exactly 2048 unique words.
///
/// Immutable once constructed; lookups in both directions are O(1).
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl WordList {
    /// Validate and index an ordered word sequence.
    pub fn new(words: Vec<String>) -> Result<Self, WordListError> {
        if words.len() != WORD_COUNT {
            return Err(WordListError::WrongSize(words.len()));
        }

        let mut index = HashMap::with_capacity(WORD_COUNT);
        for (position, word) in words.iter().enumerate() {
            if index.insert(word.clone(), position as u16).is_some() {
                return Err(WordListError::DuplicateWord(word.clone()));
            }
        }

        Ok(Self { words, index })
    }

    /// The bundled canonical English list.
    pub fn english() -> &'static WordList {
        &ENGLISH
    }

    /// Position of `word` in the list, or `None` when absent.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// Word at a 0-2047 index. Out-of-range indices are a programmer error:
    /// this is only ever called with indices produced by this crate's codec.
    pub fn word_at(&self, index: u16) -> &str {
        &self.words[index as usize]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list_shape() {
        let list = WordList::english();
        assert_eq!(list.words().len(), WORD_COUNT);
        assert_eq!(list.word_at(0), "abandon");
        assert_eq!(list.word_at(3), "about");
        assert_eq!(list.word_at(2047), "zoo");
    }

    #[test]
    fn test_index_round_trip() {
        let list = WordList::english();
        assert_eq!(list.index_of("abandon"), Some(0));
        assert_eq!(list.index_of("zoo"), Some(2047));
        assert_eq!(list.index_of("main"), Some(1074));
        assert_eq!(list.index_of("notaword"), None);
        assert_eq!(list.index_of(""), None);
    }

    #[test]
    fn test_wrong_size_rejected() {
        let err = WordList::new(vec!["abandon".to_string(); 3]).unwrap_err();
        assert_eq!(err, WordListError::WrongSize(3));
        assert!(WordList::new(Vec::new()).is_err());
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut words: Vec<String> = (0..WORD_COUNT).map(|i| format!("word{}", i)).collect();
        words[100] = "word99".to_string();
        let err = WordList::new(words).unwrap_err();
        assert_eq!(err, WordListError::DuplicateWord("word99".to_string()));
    }
}
