//! Character variety sections - uppercase, lowercase and digits.

use secrecy::{ExposeSecret, SecretString};

/// Met when at least one character is an uppercase letter.
pub fn uppercase_section(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_uppercase())
}

/// Met when at least one character is a lowercase letter.
pub fn lowercase_section(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_lowercase())
}

/// Met when at least one character is numeric.
///
/// Unicode-aware like the letter checks: `١` and `٣` count as well as `0-9`.
pub fn digits_section(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_numeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_missing_uppercase() {
        let pwd = secret("lowercase123!");
        assert!(!uppercase_section(&pwd));
        assert!(lowercase_section(&pwd));
        assert!(digits_section(&pwd));
    }

    #[test]
    fn test_variety_missing_lowercase() {
        let pwd = secret("UPPERCASE123!");
        assert!(uppercase_section(&pwd));
        assert!(!lowercase_section(&pwd));
    }

    #[test]
    fn test_variety_missing_digits() {
        assert!(!digits_section(&secret("NoNumbers!")));
    }

    #[test]
    fn test_variety_unicode_classes() {
        let pwd = secret("Ä١");
        assert!(uppercase_section(&pwd));
        assert!(!lowercase_section(&pwd));
        assert!(digits_section(&pwd));
        assert!(digits_section(&secret("٠١٢٣٤٥٦٧٨٩")));
        assert!(digits_section(&secret("१२३")));
    }

    #[test]
    fn test_variety_symbols_are_not_letters() {
        let pwd = secret("!@#$%^&*");
        assert!(!uppercase_section(&pwd));
        assert!(!lowercase_section(&pwd));
        assert!(!digits_section(&pwd));
    }
}
