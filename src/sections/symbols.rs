//! Symbols section - checks for ASCII punctuation.

use secrecy::{ExposeSecret, SecretString};

/// The 32 ASCII punctuation characters.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Met when at least one character is ASCII punctuation.
///
/// Spaces and non-ASCII symbols do not count.
pub fn symbols_section(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_punctuation())
}
