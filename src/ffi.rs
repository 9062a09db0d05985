//! FFI Layer for Mnemo Core
//!
//! All C-ABI exports are defined here. This is the ONLY file that should
//! contain `extern "C"` functions. All functions follow a consistent pattern:
//! - Input: JSON string (null-terminated C string)
//! - Output: JSON string (must be freed with `mnemo_free_string`)
//!
//! Error handling: All functions return JSON with `success` field.
//! On error, `success: false` and `error` object is populated.

use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::error::{MnemoError, MnemoResult};
use crate::log_debug;
use crate::mnemonic::{self, WordList};
use crate::types::{ApiResponse, MnemonicDetails, MnemonicLength};

// =============================================================================
// Memory Management
// =============================================================================

/// Free a string returned by any mnemo_* function
///
/// # Safety
/// The pointer must have been returned by a mnemo_* function
#[unsafe(no_mangle)]
pub extern "C" fn mnemo_free_string(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    unsafe {
        let _ = CString::from_raw(s);
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert C string to an owned Rust string, returning error JSON if invalid
fn parse_input(input: *const c_char) -> Result<String, *mut c_char> {
    if input.is_null() {
        return Err(error_response(MnemoError::invalid_input(
            "Null input pointer",
        )));
    }

    let c_str = unsafe { CStr::from_ptr(input) };
    match c_str.to_str() {
        Ok(s) => Ok(s.to_string()),
        Err(_) => Err(error_response(MnemoError::invalid_input(
            "Invalid UTF-8 string",
        ))),
    }
}

/// Use the caller-supplied word list when present, the bundled one otherwise
fn resolve_word_list(raw: Option<Vec<String>>) -> MnemoResult<Cow<'static, WordList>> {
    match raw {
        Some(words) => Ok(Cow::Owned(WordList::new(words)?)),
        None => Ok(Cow::Borrowed(WordList::english())),
    }
}

/// Create a success response JSON string
fn success_response<T: serde::Serialize>(data: T) -> *mut c_char {
    let response = ApiResponse::ok(data);
    string_to_ptr(response.to_json())
}

/// Create an error response JSON string
fn error_response(error: MnemoError) -> *mut c_char {
    let response: ApiResponse<()> = ApiResponse::err(error);
    string_to_ptr(response.to_json())
}

/// Convert Rust string to C string pointer
fn string_to_ptr(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => {
            // Last resort: return a minimal error
            CString::new(
                r#"{"success":false,"error":{"code":"internal","message":"String conversion failed"}}"#,
            )
            .expect("static string is valid")
            .into_raw()
        }
    }
}

// =============================================================================
// Mnemonic Operations
// =============================================================================

/// Compute entropy, checksum, and last-word candidates for word selections
///
/// # Input
/// ```json
/// { "words": ["main", "", "original", ...], "word_list": ["abandon", ...] }
/// ```
/// `word_list` is optional; empty strings mark unselected slots.
///
/// # Output
/// ```json
/// {
///   "success": true,
///   "data": {
///     "is_completed": false,
///     "entropy": null,
///     "checksum": null,
///     "valid_last_words": ["asthma", ...]
///   }
/// }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn mnemo_compute_details(input: *const c_char) -> *mut c_char {
    let json_str = match parse_input(input) {
        Ok(s) => s,
        Err(ptr) => return ptr,
    };

    #[derive(serde::Deserialize)]
    struct DetailsRequest {
        words: Vec<String>,
        word_list: Option<Vec<String>>,
    }

    let request: DetailsRequest = match serde_json::from_str(&json_str) {
        Ok(r) => r,
        Err(e) => return error_response(e.into()),
    };

    log_debug!("ffi", "Computing details", length = request.words.len());

    let result: MnemoResult<MnemonicDetails> = resolve_word_list(request.word_list)
        .and_then(|list| mnemonic::compute_details(&request.words, &list));

    match result {
        Ok(details) => success_response(details),
        Err(e) => error_response(e),
    }
}

/// Derive the 64-byte seed from a complete phrase and optional passphrase
///
/// # Input
/// ```json
/// { "words": ["main", ...], "passphrase": "abc", "word_list": [...] }
/// ```
/// `passphrase` and `word_list` are optional. The phrase must be complete:
/// every slot filled with a word from the list.
///
/// # Output
/// ```json
/// { "success": true, "data": { "seed": "7c49dacf..." } }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn mnemo_derive_seed(input: *const c_char) -> *mut c_char {
    let json_str = match parse_input(input) {
        Ok(s) => s,
        Err(ptr) => return ptr,
    };

    #[derive(serde::Deserialize)]
    struct SeedRequest {
        words: Vec<String>,
        passphrase: Option<String>,
        word_list: Option<Vec<String>>,
    }

    #[derive(serde::Serialize)]
    struct SeedResponse {
        seed: String,
    }

    let request: SeedRequest = match serde_json::from_str(&json_str) {
        Ok(r) => r,
        Err(e) => return error_response(e.into()),
    };

    let result: MnemoResult<String> =
        resolve_word_list(request.word_list).and_then(|list| {
            mnemonic::validate_complete_phrase(&request.words, &list)?;
            Ok(mnemonic::derive_seed(
                &request.words,
                request.passphrase.as_deref(),
            ))
        });

    match result {
        Ok(seed) => success_response(SeedResponse { seed }),
        Err(e) => error_response(e),
    }
}

/// Generate a fresh random mnemonic
///
/// # Input
/// ```json
/// { "length": 24, "word_list": [...] }
/// ```
/// `word_list` is optional.
///
/// # Output
/// ```json
/// { "success": true, "data": { "words": ["main", ...] } }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn mnemo_generate_mnemonic(input: *const c_char) -> *mut c_char {
    let json_str = match parse_input(input) {
        Ok(s) => s,
        Err(ptr) => return ptr,
    };

    #[derive(serde::Deserialize)]
    struct GenerateRequest {
        length: MnemonicLength,
        word_list: Option<Vec<String>>,
    }

    #[derive(serde::Serialize)]
    struct PhraseResponse {
        words: Vec<String>,
    }

    let request: GenerateRequest = match serde_json::from_str(&json_str) {
        Ok(r) => r,
        Err(e) => return error_response(e.into()),
    };

    log_debug!("ffi", "Generating mnemonic", length = request.length.word_count());

    let result = resolve_word_list(request.word_list)
        .and_then(|list| mnemonic::generate_random_mnemonic(request.length, &list));

    match result {
        Ok(words) => success_response(PhraseResponse { words }),
        Err(e) => error_response(e),
    }
}

/// Derive a mnemonic deterministically from arbitrary text
///
/// # Input
/// ```json
/// { "text": "correct horse battery staple", "length": 24, "word_list": [...] }
/// ```
/// `word_list` is optional.
///
/// # Output
/// ```json
/// { "success": true, "data": { "words": ["main", ...] } }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn mnemo_from_entropy(input: *const c_char) -> *mut c_char {
    let json_str = match parse_input(input) {
        Ok(s) => s,
        Err(ptr) => return ptr,
    };

    #[derive(serde::Deserialize)]
    struct FromEntropyRequest {
        text: String,
        length: MnemonicLength,
        word_list: Option<Vec<String>>,
    }

    #[derive(serde::Serialize)]
    struct PhraseResponse {
        words: Vec<String>,
    }

    let request: FromEntropyRequest = match serde_json::from_str(&json_str) {
        Ok(r) => r,
        Err(e) => return error_response(e.into()),
    };

    let result = resolve_word_list(request.word_list).and_then(|list| {
        mnemonic::mnemonic_from_entropy(&request.text, request.length, &list)
    });

    match result {
        Ok(words) => success_response(PhraseResponse { words }),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(f: extern "C" fn(*const c_char) -> *mut c_char, input: &str) -> serde_json::Value {
        let c_input = CString::new(input).unwrap();
        let ptr = f(c_input.as_ptr());
        let output = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        mnemo_free_string(ptr);
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_null_input_is_an_error_envelope() {
        let ptr = mnemo_compute_details(std::ptr::null());
        let output = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        mnemo_free_string(ptr);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "invalid_input");
    }

    #[test]
    fn test_compute_details_envelope() {
        let response = call(
            mnemo_compute_details,
            r#"{"words":["","","","","","","","","","","",""]}"#,
        );
        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["is_completed"], false);
    }

    #[test]
    fn test_generate_then_derive_seed() {
        let response = call(mnemo_generate_mnemonic, r#"{"length":12}"#);
        assert_eq!(response["success"], true);
        let words = response["data"]["words"].as_array().unwrap().clone();
        assert_eq!(words.len(), 12);

        let seed_request = serde_json::json!({ "words": words }).to_string();
        let response = call(mnemo_derive_seed, &seed_request);
        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["seed"].as_str().unwrap().len(), 128);
    }

    #[test]
    fn test_unsupported_length_envelope() {
        let response = call(mnemo_generate_mnemonic, r#"{"length":13}"#);
        assert_eq!(response["success"], false);
        // serde rejects 13 before the codec ever sees it
        assert_eq!(response["error"]["code"], "json_error");
    }

    #[test]
    fn test_undersized_word_list_rejected() {
        let response = call(
            mnemo_generate_mnemonic,
            r#"{"length":12,"word_list":["abandon","ability"]}"#,
        );
        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "invalid_word_list");
    }

    #[test]
    fn test_incomplete_phrase_cannot_derive_seed() {
        let response = call(
            mnemo_derive_seed,
            r#"{"words":["abandon","abandon","abandon"]}"#,
        );
        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "invalid_length");
    }

    #[test]
    fn test_from_entropy_is_deterministic() {
        let a = call(mnemo_from_entropy, r#"{"text":"test","length":24}"#);
        let b = call(mnemo_from_entropy, r#"{"text":"test","length":24}"#);
        assert_eq!(a["data"]["words"], b["data"]["words"]);
    }
}
