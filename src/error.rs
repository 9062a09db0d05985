//! Unified error types for Mnemo Core
//!
//! All errors flow through this module for consistent handling
//! and FFI-safe error reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for all Mnemo operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MnemoError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl MnemoError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn invalid_length(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidLength, msg)
    }

    pub fn invalid_word_list(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidWordList, msg)
    }

    pub fn word_not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::WordNotFound, msg)
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseError, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }
}

impl fmt::Display for MnemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for MnemoError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Input errors
    InvalidInput,
    InvalidLength,
    InvalidWordList,
    WordNotFound,

    // Parse errors
    ParseError,
    JsonError,
    HexError,

    // Internal
    Internal,
}

/// Result type alias for Mnemo operations
pub type MnemoResult<T> = Result<T, MnemoError>;

// Conversions from common error types

impl From<serde_json::Error> for MnemoError {
    fn from(e: serde_json::Error) -> Self {
        MnemoError::new(ErrorCode::JsonError, e.to_string())
    }
}

impl From<hex::FromHexError> for MnemoError {
    fn from(e: hex::FromHexError) -> Self {
        MnemoError::new(ErrorCode::HexError, e.to_string())
    }
}

impl From<std::num::ParseIntError> for MnemoError {
    fn from(e: std::num::ParseIntError) -> Self {
        MnemoError::new(ErrorCode::ParseError, e.to_string())
    }
}

impl From<crate::mnemonic::WordListError> for MnemoError {
    fn from(e: crate::mnemonic::WordListError) -> Self {
        MnemoError::new(ErrorCode::InvalidWordList, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = MnemoError::invalid_length("Unsupported mnemonic length: 13")
            .with_details("Supported lengths: 12, 15, 18, 21, 24");

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("invalid_length"));
        assert!(json.contains("Unsupported mnemonic length"));
    }

    #[test]
    fn test_display_includes_details() {
        let err = MnemoError::word_not_found("Unknown word: zzzz").with_details("slot 7");
        let rendered = err.to_string();
        assert!(rendered.contains("WordNotFound"));
        assert!(rendered.contains("slot 7"));
    }
}
