//! Random string generation
//!
//! Draws from `rand::thread_rng()`. The output is fine for identifiers and
//! test fixtures, but this module makes no promise that it is suitable for
//! secrets or session tokens.

use crate::{Result, TextkitError};
use rand::Rng;

/// Length used by [`random_string`] callers that have no preference
pub const DEFAULT_RANDOM_LENGTH: usize = 10;

/// Upper and lower case ASCII letters followed by digits
pub const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Random alphanumeric string of `length` chars
pub fn random_string(length: usize) -> String {
    let charset: Vec<char> = DEFAULT_CHARSET.chars().collect();
    sample(&mut rand::thread_rng(), length, &charset)
}

/// Random string of `length` chars drawn uniformly from `charset`
///
/// # Errors
///
/// Returns `TextkitError::Validation` if `charset` is empty.
pub fn random_string_with(length: usize, charset: &str) -> Result<String> {
    random_string_with_rng(&mut rand::thread_rng(), length, charset)
}

/// Like [`random_string_with`], with a caller-supplied generator
///
/// Pass a seeded generator for reproducible output.
pub fn random_string_with_rng<R: Rng>(
    rng: &mut R,
    length: usize,
    charset: &str,
) -> Result<String> {
    let charset: Vec<char> = charset.chars().collect();
    if charset.is_empty() {
        return Err(TextkitError::validation(
            "random string charset must not be empty",
        ));
    }
    Ok(sample(rng, length, &charset))
}

fn sample<R: Rng>(rng: &mut R, length: usize, charset: &[char]) -> String {
    (0..length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_charset() {
        let s = random_string(32);
        assert_eq!(s.chars().count(), 32);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(random_string(0), "");
        assert_eq!(random_string_with(0, "abc").unwrap(), "");
    }

    #[test]
    fn test_custom_charset() {
        let s = random_string_with(50, "xy").unwrap();
        assert_eq!(s.len(), 50);
        assert!(s.chars().all(|c| c == 'x' || c == 'y'));
    }

    #[test]
    fn test_multibyte_charset() {
        let s = random_string_with(8, "äöü").unwrap();
        assert_eq!(s.chars().count(), 8);
        assert!(s.chars().all(|c| "äöü".contains(c)));
    }

    #[test]
    fn test_empty_charset_rejected() {
        let err = random_string_with(5, "").unwrap_err();
        assert!(matches!(err, TextkitError::Validation(_)));
    }

    #[test]
    fn test_seeded_rng_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            random_string_with_rng(&mut a, 16, DEFAULT_CHARSET).unwrap(),
            random_string_with_rng(&mut b, 16, DEFAULT_CHARSET).unwrap()
        );
    }

    #[test]
    fn test_single_char_charset() {
        assert_eq!(random_string_with(4, "z").unwrap(), "zzzz");
    }
}
