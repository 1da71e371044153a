//! Short code generation.
//!
//! Codes are random bytes from the OS entropy source encoded as URL-safe
//! base64 without padding.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const CODE_LENGTH_BYTES: usize = 6;

/// Length of a generated code in characters.
pub const CODE_LENGTH: usize = 8;

/// Longest path segment accepted as a short code lookup.
const MAX_CODE_LENGTH: usize = 64;

/// Generates a random short code.
///
/// Produces an 8-character token from the URL-safe base64 alphabet
/// (`A-Z`, `a-z`, `0-9`, `-`, `_`).
///
/// # Panics
///
/// Panics if the system random number generator fails.
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Returns true if `code` could have been issued by this service.
///
/// Used to answer obviously bogus lookups without touching the store.
pub fn is_well_formed_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_CODE_LENGTH
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
