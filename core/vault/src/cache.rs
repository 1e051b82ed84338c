//! Per-engine key cache.
//!
//! Derivation is deliberately expensive (100k PBKDF2 iterations), so repeated
//! operations against the same vault within one session should not re-pay
//! that cost. Entries are keyed on a hash of (password, salt) and live until
//! [`KeyCache::clear`] drops them; dropped keys zeroize their material.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

use lockbox_common::{Error, Result};
use lockbox_crypto::{derive_key, Salt, VaultKey};

/// In-memory cache of derived keys, scoped to one engine instance.
///
/// Not persisted, not shared across processes. Concurrent `get_or_derive`
/// calls for the same pair may both derive, which is wasteful but safe; the
/// map converges on a single entry either way.
pub struct KeyCache {
    entries: RwLock<HashMap<String, VaultKey>>,
}

impl KeyCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Deterministic cache identifier for a (password, salt) pair.
    ///
    /// The password itself is never stored; only this digest is used as the
    /// map key.
    fn cache_id(password: &str, salt: &Salt) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        hasher.update(salt.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Return the cached key for this (password, salt) pair, deriving and
    /// inserting it on a miss.
    ///
    /// # Errors
    /// - Returns `KeyDerivation` for an empty password
    pub fn get_or_derive(&self, password: &str, salt: &Salt) -> Result<VaultKey> {
        let id = Self::cache_id(password, salt);

        {
            let entries = self
                .entries
                .read()
                .map_err(|_| Error::Crypto("Key cache lock poisoned".to_string()))?;
            if let Some(key) = entries.get(&id) {
                return Ok(key.clone());
            }
        }

        // Derive outside the lock; the first writer wins on a race.
        let key = derive_key(password, Some(*salt))?;

        let mut entries = self
            .entries
            .write()
            .map_err(|_| Error::Crypto("Key cache lock poisoned".to_string()))?;
        let key = entries.entry(id).or_insert(key).clone();
        debug!(cached = entries.len(), "Key cached");

        Ok(key)
    }

    /// Drop all cached keys, zeroizing their material.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
        debug!("Key cache cleared");
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for KeyCache {
    fn default() -> Self {
        Self::new()
    }
}
