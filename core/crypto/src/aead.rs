//! Authenticated encryption using AES-256-GCM.
//!
//! AES-GCM provides both confidentiality and authenticity. The 12-byte IV is
//! generated fresh from the secure random source for every encryption; a
//! reused (key, IV) pair breaks the AEAD guarantees entirely.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};

use crate::keys::VaultKey;
use crate::rng;
use lockbox_common::{Error, Result};

/// IV (nonce) size for AES-GCM (12 bytes, the standard recommendation).
pub const IV_LENGTH: usize = 12;

/// Authentication tag size (16 bytes).
pub const TAG_LENGTH: usize = 16;

/// Generate a fresh random IV.
///
/// # Errors
/// - Returns `EntropyUnavailable` if the OS random source fails
pub fn generate_iv() -> Result<[u8; IV_LENGTH]> {
    rng::random_array()
}

/// Encrypt plaintext under a derived key and a fresh IV.
///
/// Returns the ciphertext and the 16-byte authentication tag separately; the
/// underlying primitive emits `ciphertext || tag` and the trailing tag is
/// split off so the record can store the two fields independently.
///
/// Empty plaintext is valid and yields a zero-length ciphertext that is still
/// tag-protected.
///
/// # Errors
/// - Returns `Crypto` if the primitive rejects the input
pub fn encrypt(
    key: &VaultKey,
    iv: &[u8; IV_LENGTH],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_LENGTH])> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    let mut combined = cipher
        .encrypt(Nonce::from_slice(iv), plaintext)
        .map_err(|e| Error::Crypto(format!("Encryption failed: {}", e)))?;

    let tag_start = combined.len() - TAG_LENGTH;
    let mut tag = [0u8; TAG_LENGTH];
    tag.copy_from_slice(&combined[tag_start..]);
    combined.truncate(tag_start);

    Ok((combined, tag))
}

/// Decrypt ciphertext and verify its authentication tag.
///
/// Recombines `ciphertext || tag` into the buffer shape the primitive
/// expects. Tag verification failure means a wrong password or tampered
/// data; the error does not distinguish the two.
///
/// # Errors
/// - Returns `Decryption` if tag verification fails
pub fn decrypt(
    key: &VaultKey,
    iv: &[u8; IV_LENGTH],
    ciphertext: &[u8],
    tag: &[u8; TAG_LENGTH],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    let mut combined = Vec::with_capacity(ciphertext.len() + TAG_LENGTH);
    combined.extend_from_slice(ciphertext);
    combined.extend_from_slice(tag);

    cipher
        .decrypt(Nonce::from_slice(iv), combined.as_slice())
        .map_err(|_| Error::Decryption)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{Salt, KEY_LENGTH, SALT_LENGTH};

    fn test_key(byte: u8) -> VaultKey {
        VaultKey::new([byte; KEY_LENGTH], Salt::from_bytes([0u8; SALT_LENGTH]))
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let key = test_key(42);
        let iv = generate_iv().unwrap();

        let (ciphertext, tag) = encrypt(&key, &iv, b"Hello, World!").unwrap();
        let decrypted = decrypt(&key, &iv, &ciphertext, &tag).unwrap();

        assert_eq!(decrypted, b"Hello, World!");
    }

    #[test]
    fn test_ciphertext_size_matches_plaintext() {
        let key = test_key(42);
        let iv = generate_iv().unwrap();

        let (ciphertext, _tag) = encrypt(&key, &iv, b"Test message").unwrap();

        // AEAD has no expansion beyond the (separately returned) tag.
        assert_eq!(ciphertext.len(), b"Test message".len());
    }

    #[test]
    fn test_empty_plaintext() {
        let key = test_key(42);
        let iv = generate_iv().unwrap();

        let (ciphertext, tag) = encrypt(&key, &iv, b"").unwrap();
        assert!(ciphertext.is_empty());

        let decrypted = decrypt(&key, &iv, &ciphertext, &tag).unwrap();
        assert!(decrypted.is_empty());
    }

    #[test]
    fn test_wrong_key_fails() {
        let iv = generate_iv().unwrap();
        let (ciphertext, tag) = encrypt(&test_key(1), &iv, b"Secret data").unwrap();

        let result = decrypt(&test_key(2), &iv, &ciphertext, &tag);
        assert!(matches!(result, Err(Error::Decryption)));
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let key = test_key(42);
        let iv = generate_iv().unwrap();
        let (mut ciphertext, tag) = encrypt(&key, &iv, b"Important data").unwrap();

        ciphertext[3] ^= 0x01;

        let result = decrypt(&key, &iv, &ciphertext, &tag);
        assert!(matches!(result, Err(Error::Decryption)));
    }

    #[test]
    fn test_tampered_tag_fails() {
        let key = test_key(42);
        let iv = generate_iv().unwrap();
        let (ciphertext, mut tag) = encrypt(&key, &iv, b"Important data").unwrap();

        tag[0] ^= 0x01;

        let result = decrypt(&key, &iv, &ciphertext, &tag);
        assert!(matches!(result, Err(Error::Decryption)));
    }

    #[test]
    fn test_fresh_iv_each_call() {
        let iv1 = generate_iv().unwrap();
        let iv2 = generate_iv().unwrap();
        assert_ne!(iv1, iv2);
    }

    #[test]
    fn test_large_plaintext() {
        let key = test_key(42);
        let iv = generate_iv().unwrap();
        let plaintext = vec![0xABu8; 1_000_000]; // 1 MB

        let (ciphertext, tag) = encrypt(&key, &iv, &plaintext).unwrap();
        let decrypted = decrypt(&key, &iv, &ciphertext, &tag).unwrap();

        assert_eq!(decrypted, plaintext);
    }
}
