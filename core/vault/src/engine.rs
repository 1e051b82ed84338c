//! The vault encryption engine.
//!
//! One engine instance owns one key cache; tests and embedders can run
//! multiple independent engines with isolated caches.

use tracing::{debug, info, warn};

use crate::cache::KeyCache;
use crate::codec;
use crate::record::EncryptedRecord;
use lockbox_common::{Error, Result};
use lockbox_crypto::{aead, checksum, password, Salt};

/// Password-derived authenticated file-encryption engine.
///
/// Every encryption uses a fresh salt and a fresh IV; the derived key is
/// memoized in the engine's cache so decrypting several records stored under
/// the same (password, salt) pair pays the derivation cost once.
pub struct VaultEngine {
    cache: KeyCache,
}

impl VaultEngine {
    /// Create an engine with its own empty key cache.
    pub fn new() -> Self {
        Self::with_cache(KeyCache::new())
    }

    /// Create an engine around an injected cache.
    pub fn with_cache(cache: KeyCache) -> Self {
        Self { cache }
    }

    /// Encrypt a file's bytes under a password.
    ///
    /// Generates a fresh 16-byte salt and 12-byte IV, derives the key (via
    /// the cache), computes the plaintext checksum, and assembles an
    /// immutable record. Empty input is valid.
    ///
    /// # Errors
    /// - `KeyDerivation` for an empty password
    /// - `EntropyUnavailable` if the OS random source fails
    pub fn encrypt_file(
        &self,
        data: &[u8],
        name: &str,
        mime_type: &str,
        password: &str,
    ) -> Result<EncryptedRecord> {
        let salt = Salt::generate()?;
        let key = self.cache.get_or_derive(password, &salt)?;

        let iv = aead::generate_iv()?;
        let (ciphertext, tag) = aead::encrypt(&key, &iv, data)?;
        let checksum = checksum::checksum(data);

        let record = EncryptedRecord::assemble(
            name,
            mime_type,
            data.len() as u64,
            ciphertext,
            iv,
            salt,
            tag,
            checksum,
        );

        info!(id = %record.id, name, size = data.len(), "File encrypted");
        Ok(record)
    }

    /// Decrypt a record back into plaintext.
    ///
    /// The AEAD tag check is the primary tamper-detection mechanism; the
    /// plaintext checksum comparison afterwards guards against corruption in
    /// metadata handling outside the AEAD boundary. Neither failure is ever
    /// retried with altered input.
    ///
    /// # Errors
    /// - `Decryption` on tag failure (wrong password or tampered data)
    /// - `Integrity` on checksum mismatch after a tag-verified decryption
    pub fn decrypt_file(&self, record: &EncryptedRecord, password: &str) -> Result<Vec<u8>> {
        debug!(id = %record.id, "Decrypting record");

        let key = self.cache.get_or_derive(password, &record.salt)?;
        let plaintext = aead::decrypt(&key, &record.iv, &record.ciphertext, &record.tag)?;

        if !checksum::verify(&plaintext, &record.checksum) {
            // The tag verified, so this indicates a bug or metadata
            // corruption rather than an attack; log it distinctly.
            warn!(id = %record.id, "Checksum mismatch after tag-verified decryption");
            return Err(Error::Integrity);
        }

        debug!(id = %record.id, size = plaintext.len(), "Record decrypted");
        Ok(plaintext)
    }

    /// Serialize a record into its storage-safe textual form.
    pub fn export_record(&self, record: &EncryptedRecord) -> Result<String> {
        codec::export(record)
    }

    /// Reconstruct a record from its textual form.
    pub fn import_record(&self, text: &str) -> Result<EncryptedRecord> {
        codec::import(text)
    }

    /// Heuristic password strength score, 0-100. Advisory only.
    pub fn estimate_password_strength(&self, password: &str) -> u8 {
        password::score(password)
    }

    /// Generate a random password guaranteed to score high.
    pub fn generate_password(&self, length: usize) -> Result<String> {
        password::generate(length)
    }

    /// Drop all cached keys, zeroizing their material.
    pub fn clear_key_cache(&self) {
        self.cache.clear();
    }

    /// Access the engine's key cache.
    pub fn key_cache(&self) -> &KeyCache {
        &self.cache
    }
}

impl Default for VaultEngine {
    fn default() -> Self {
        Self::new()
    }
}
