//! Short code generation and validation utilities.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 8;

/// Alphanumeric alphabet without look-alike glyphs (`0 O 1 I l`).
pub const CODE_ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Minimum length of a user-provided code.
pub const CUSTOM_CODE_MIN_LEN: usize = 3;

/// Maximum length of a user-provided code.
pub const CUSTOM_CODE_MAX_LEN: usize = 32;

/// Codes that would collide with fixed routes.
const RESERVED_CODES: &[&str] = &["api", "health", "static"];

/// Generates a random short code of [`CODE_LENGTH`] characters.
///
/// Draws from the thread-local CSPRNG; 57^8 codes give roughly 2^46
/// possibilities, so collisions are negligible at realistic table sizes.
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 3-32 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved path segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    let len = code.chars().count();
    if !(CUSTOM_CODE_MIN_LEN..=CUSTOM_CODE_MAX_LEN).contains(&len) {
        return Err(AppError::bad_request(
            format!(
                "Custom code must be {}-{} characters",
                CUSTOM_CODE_MIN_LEN, CUSTOM_CODE_MAX_LEN
            ),
            json!({ "provided_length": len }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens and underscores",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code.to_ascii_lowercase().as_str()) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
