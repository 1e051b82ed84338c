//! Plaintext integrity checksums.
//!
//! A SHA-256 checksum of the plaintext is embedded at encrypt time and
//! re-derived after decryption. It is not the primary security boundary
//! (the AEAD tag is); it catches corruption in metadata handling outside the
//! AEAD boundary.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Compute the SHA-256 checksum of `data` as a lowercase hex string.
pub fn checksum(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Verify `data` against an expected hex checksum in constant time.
pub fn verify(data: &[u8], expected: &str) -> bool {
    let actual = checksum(data);
    if actual.len() != expected.len() {
        return false;
    }
    actual.as_bytes().ct_eq(expected.as_bytes()).into()
}
