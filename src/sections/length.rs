//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

pub(crate) const MIN_LENGTH: usize = 12;

/// Met when the password has at least `MIN_LENGTH` characters.
///
/// Counts `char`s, not bytes, so multi-byte characters count once.
pub fn length_section(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_section_too_short() {
        assert!(!length_section(&secret("Short1!abcd")));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert!(length_section(&secret("123456789012")));
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 11 chars, 22 bytes
        assert!(!length_section(&secret("ééééééééééé")));
        assert!(length_section(&secret("éééééééééééé")));
    }

    #[test]
    fn test_length_section_empty() {
        assert!(!length_section(&secret("")));
    }
}
