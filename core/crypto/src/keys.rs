//! Key types with secure memory handling.
//!
//! Key material is automatically zeroized on drop to prevent sensitive data
//! from persisting in memory.

use chrono::{DateTime, Utc};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::rng;
use lockbox_common::Result;

/// Length of encryption keys in bytes (256-bit).
pub const KEY_LENGTH: usize = 32;

/// Length of key-derivation salts in bytes.
pub const SALT_LENGTH: usize = 16;

/// Salt for password-based key derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Salt([u8; SALT_LENGTH]);

impl Salt {
    /// Generate a random salt from the secure random source.
    ///
    /// # Errors
    /// - Returns `EntropyUnavailable` if the OS random source fails
    pub fn generate() -> Result<Self> {
        Ok(Self(rng::random_array()?))
    }

    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; SALT_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Get the salt bytes.
    pub fn as_bytes(&self) -> &[u8; SALT_LENGTH] {
        &self.0
    }
}

/// Symmetric key derived from a user password.
///
/// Bound to the exact salt it was derived with; using it with any other salt
/// is a programming error. The raw key bytes are never serialized or exposed
/// outside the crypto layer's consumers.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct VaultKey {
    key: [u8; KEY_LENGTH],
    #[zeroize(skip)]
    salt: Salt,
    #[zeroize(skip)]
    derived_at: DateTime<Utc>,
}

impl VaultKey {
    /// Create a key from derived bytes and the salt that produced them.
    pub fn new(key: [u8; KEY_LENGTH], salt: Salt) -> Self {
        Self {
            key,
            salt,
            derived_at: Utc::now(),
        }
    }

    /// Get the key bytes.
    ///
    /// # Security
    /// The returned slice should be used immediately and not stored.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }

    /// The salt this key was derived with.
    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    /// When the key was derived, for caller-side staleness policies.
    pub fn derived_at(&self) -> DateTime<Utc> {
        self.derived_at
    }
}

impl fmt::Debug for VaultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VaultKey([REDACTED], derived_at: {})", self.derived_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_generate_unique() {
        let salt1 = Salt::generate().unwrap();
        let salt2 = Salt::generate().unwrap();
        assert_ne!(salt1.as_bytes(), salt2.as_bytes());
    }

    #[test]
    fn test_vault_key_keeps_salt() {
        let salt = Salt::from_bytes([7u8; SALT_LENGTH]);
        let key = VaultKey::new([1u8; KEY_LENGTH], salt);
        assert_eq!(key.salt().as_bytes(), salt.as_bytes());
    }

    #[test]
    fn test_vault_key_debug_redacted() {
        let key = VaultKey::new([0xAAu8; KEY_LENGTH], Salt::from_bytes([0u8; SALT_LENGTH]));
        let debug = format!("{:?}", key);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("170, 170")); // 0xAA bytes
    }
}
