//! Random password generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;
use thiserror::Error;

/// Length used when the caller has no preference.
pub const DEFAULT_LENGTH: i64 = 16;

/// Letters, digits and the 32 ASCII punctuation characters: 94 symbols.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Invalid password length: {0} (must not be negative)")]
    InvalidLength(i64),
}

/// Generates a password from [`ALPHABET`] using the operating system's CSPRNG.
///
/// Each character is drawn independently and uniformly; no composition rule
/// is enforced. A length of 0 yields an empty password.
///
/// # Errors
///
/// Returns `InvalidLength` if `length` is negative.
pub fn generate_password(length: i64) -> Result<SecretString, GenerateError> {
    let len = usize::try_from(length).map_err(|_| GenerateError::InvalidLength(length))?;

    #[cfg(feature = "tracing")]
    tracing::debug!("Generating password of length {}", len);

    Ok(generate_password_with_rng(&mut OsRng, len))
}

/// Generates a password of `len` characters with the given secure RNG.
///
/// `gen_range` rejects out-of-range samples, so every symbol is equally likely.
pub fn generate_password_with_rng<R>(rng: &mut R, len: usize) -> SecretString
where
    R: Rng + CryptoRng,
{
    let password: String = (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    SecretString::new(password.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use secrecy::ExposeSecret;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_is_94_unique_printable_ascii() {
        let unique: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(ALPHABET.len(), 94);
        assert_eq!(unique.len(), 94);
        assert!(ALPHABET.iter().all(|b| b.is_ascii_graphic()));
    }

    #[test]
    fn test_generate_default_length() {
        let pwd = generate_password(DEFAULT_LENGTH).unwrap();
        let pwd = pwd.expose_secret();
        assert_eq!(pwd.chars().count(), 16);
        assert!(pwd.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_generate_zero_length() {
        let pwd = generate_password(0).unwrap();
        assert_eq!(pwd.expose_secret(), "");
    }

    #[test]
    fn test_generate_negative_length() {
        assert_eq!(
            generate_password(-1).map(|_| ()),
            Err(GenerateError::InvalidLength(-1))
        );
    }

    #[test]
    fn test_generate_successive_calls_differ() {
        let first = generate_password(DEFAULT_LENGTH).unwrap();
        let second = generate_password(DEFAULT_LENGTH).unwrap();
        assert_ne!(first.expose_secret(), second.expose_secret());
    }

    #[test]
    fn test_generate_with_rng_covers_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        let pwd = generate_password_with_rng(&mut rng, 20_000);
        let seen: HashSet<u8> = pwd.expose_secret().bytes().collect();
        assert_eq!(seen.len(), ALPHABET.len());
    }
}
