//! Random token generation for shortcut codes and logins.

use base64::Engine as _;

/// Length in characters of every generated token.
pub const TOKEN_LENGTH: usize = 8;

/// Random bytes per token; 6 bytes encode to exactly 8 base64 characters.
const TOKEN_BYTES: usize = 6;

/// Generates a random 8-character token.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, so the alphabet is `A-Z a-z 0-9 - _`. With 64^8 possible
/// values collisions are rare but real; the store's uniqueness constraint is
/// what arbitrates them.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
