//! Character class criteria - uppercase, lowercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};

/// True iff the password contains at least one character in `A-Z`.
pub fn uppercase_met(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_uppercase())
}

/// True iff the password contains at least one character in `a-z`.
pub fn lowercase_met(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_lowercase())
}

/// True iff the password contains at least one character in `0-9`.
pub fn digits_met(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_digit())
}

/// True iff the password contains at least one character outside `A-Z`,
/// `a-z`, `0-9`, and whitespace.
///
/// Any non-ASCII letter or symbol counts as special.
pub fn special_character_met(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
}
