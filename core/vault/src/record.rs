//! The durable encrypted record.

use chrono::Utc;

use lockbox_common::RecordId;
use lockbox_crypto::{Salt, IV_LENGTH, TAG_LENGTH};

/// A single encrypted file, as produced by the engine at encrypt time.
///
/// Records are immutable once created: "updating" a file means producing a
/// new record with a fresh IV, never re-encrypting in place. The IV is unique
/// per (key, salt) pair, and the checksum is always computed over plaintext,
/// never ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedRecord {
    /// Unique record identifier.
    pub id: RecordId,
    /// Original file name (not confidentiality-protected).
    pub name: String,
    /// MIME type of the plaintext (not confidentiality-protected).
    pub mime_type: String,
    /// Plaintext size in bytes.
    pub plain_size: u64,
    /// Encrypted bytes, same length as the plaintext.
    pub ciphertext: Vec<u8>,
    /// Per-operation nonce; reusing it under the same key breaks AEAD.
    pub iv: [u8; IV_LENGTH],
    /// Salt the key for this record was derived with, so the record is
    /// self-describing given only the correct password.
    pub salt: Salt,
    /// AEAD authentication tag.
    pub tag: [u8; TAG_LENGTH],
    /// SHA-256 hex checksum of the plaintext.
    pub checksum: String,
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
}

impl EncryptedRecord {
    /// Assemble a freshly encrypted record with a generated id and the
    /// current time.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn assemble(
        name: &str,
        mime_type: &str,
        plain_size: u64,
        ciphertext: Vec<u8>,
        iv: [u8; IV_LENGTH],
        salt: Salt,
        tag: [u8; TAG_LENGTH],
        checksum: String,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            plain_size,
            ciphertext,
            iv,
            salt,
            tag,
            checksum,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}
