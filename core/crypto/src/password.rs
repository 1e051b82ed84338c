//! Password strength estimation and generation.
//!
//! The score is a heuristic for warning the user about weak passwords. It is
//! advisory only and never blocks an encrypt or decrypt call.

use crate::rng;
use lockbox_common::{Error, Result};

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";

/// Minimum length accepted by [`generate`]. Shorter outputs cannot carry one
/// character per class and would not score high.
pub const MIN_GENERATED_LENGTH: usize = 8;

/// Score a password from 0 to 100.
///
/// Length thresholds (>= 8, >= 12, >= 16) and each character class present
/// (lowercase, uppercase, digit, symbol) contribute fixed point values,
/// capped at 100.
pub fn score(password: &str) -> u8 {
    let mut points: u32 = 0;

    let len = password.chars().count();
    if len >= 8 {
        points += 20;
    }
    if len >= 12 {
        points += 10;
    }
    if len >= 16 {
        points += 10;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        points += 15;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        points += 15;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        points += 15;
    }
    if password
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
    {
        points += 15;
    }

    points.min(100) as u8
}

/// Generate a random password of `length` characters.
///
/// Drawn from the secure random source over lowercase, uppercase, digit and
/// symbol classes, with at least one character from each class so the result
/// scores >= 80 under [`score`].
///
/// # Errors
/// - Returns `InvalidInput` if `length` is below [`MIN_GENERATED_LENGTH`]
/// - Returns `EntropyUnavailable` if the OS random source fails
pub fn generate(length: usize) -> Result<String> {
    if length < MIN_GENERATED_LENGTH {
        return Err(Error::InvalidInput(format!(
            "Generated password length must be at least {}",
            MIN_GENERATED_LENGTH
        )));
    }

    let full: Vec<u8> = [LOWER, UPPER, DIGITS, SYMBOLS].concat();

    // One guaranteed character per class, the rest from the full set.
    let mut chars = Vec::with_capacity(length);
    for class in [LOWER, UPPER, DIGITS, SYMBOLS] {
        chars.push(class[random_index(class.len())?]);
    }
    while chars.len() < length {
        chars.push(full[random_index(full.len())?]);
    }

    // Fisher-Yates shuffle so the class-guaranteed characters are not
    // predictably positioned at the front.
    for i in (1..chars.len()).rev() {
        chars.swap(i, random_index(i + 1)?);
    }

    String::from_utf8(chars).map_err(|e| Error::Crypto(format!("Invalid password bytes: {}", e)))
}

/// Uniform random index in `0..bound` via rejection sampling (no modulo bias).
fn random_index(bound: usize) -> Result<usize> {
    debug_assert!(bound > 0 && bound <= u32::MAX as usize);
    let bound = bound as u32;
    let limit = u32::MAX - (u32::MAX % bound);
    loop {
        let raw = u32::from_le_bytes(rng::random_array::<4>()?);
        if raw < limit {
            return Ok((raw % bound) as usize);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_weak_password() {
        assert!(score("aaaa") < 40);
        assert_eq!(score(""), 0);
    }

    #[test]
    fn test_score_strong_password() {
        assert!(score("Tr0ub4dor&3-horse-staple") >= 80);
        assert_eq!(score("aB3!aB3!aB3!aB3!"), 100);
    }

    #[test]
    fn test_score_length_thresholds() {
        // Same single class, increasing length.
        assert!(score("aaaaaaaa") > score("aaaa"));
        assert!(score("aaaaaaaaaaaa") > score("aaaaaaaa"));
    }

    #[test]
    fn test_generate_scores_high() {
        let password = generate(16).unwrap();
        assert_eq!(password.chars().count(), 16);
        assert!(score(&password) >= 80);
    }

    #[test]
    fn test_generate_contains_all_classes() {
        let password = generate(12).unwrap();
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(password.chars().any(|c| !c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_unique() {
        assert_ne!(generate(16).unwrap(), generate(16).unwrap());
    }

    #[test]
    fn test_generate_too_short_fails() {
        assert!(matches!(generate(4), Err(Error::InvalidInput(_))));
    }
}
