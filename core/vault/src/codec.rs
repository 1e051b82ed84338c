//! Serialization codec for encrypted records.
//!
//! Converts an in-memory [`EncryptedRecord`] to the storage-safe textual form
//! handed to the persistence collaborator, and back. The wire format is JSON
//! with binary fields as arrays of byte values; external stores treat the
//! whole string as opaque and return it unmodified.
//!
//! Round-trip law: `import(&export(r)?)? == r` for every field of every valid
//! record.

use serde::{Deserialize, Serialize};

use crate::record::EncryptedRecord;
use lockbox_common::{Error, RecordId, Result};
use lockbox_crypto::{Salt, IV_LENGTH, SALT_LENGTH, TAG_LENGTH};

/// Wire shape of a serialized record. Field names and types are the external
/// contract; they must not change without a format version bump.
#[derive(Serialize, Deserialize)]
struct WireRecord {
    id: String,
    name: String,
    #[serde(rename = "encryptedData")]
    encrypted_data: Vec<u8>,
    iv: [u8; IV_LENGTH],
    salt: [u8; SALT_LENGTH],
    tag: [u8; TAG_LENGTH],
    size: u64,
    #[serde(rename = "type")]
    mime_type: String,
    timestamp: i64,
    checksum: String,
}

/// Serialize a record into its storage-safe textual form.
///
/// # Errors
/// - Returns `Serialization` if JSON encoding fails
pub fn export(record: &EncryptedRecord) -> Result<String> {
    let wire = WireRecord {
        id: record.id.as_str().to_string(),
        name: record.name.clone(),
        encrypted_data: record.ciphertext.clone(),
        iv: record.iv,
        salt: *record.salt.as_bytes(),
        tag: record.tag,
        size: record.plain_size,
        mime_type: record.mime_type.clone(),
        timestamp: record.timestamp,
        checksum: record.checksum.clone(),
    };

    serde_json::to_string(&wire).map_err(|e| Error::Serialization(e.to_string()))
}

/// Reconstruct a record from its textual form.
///
/// Binary fields are rebuilt byte-identically. Malformed or truncated input
/// fails with `Serialization` before any cryptographic operation is
/// attempted, so the caller can always tell a bad blob from a bad password.
///
/// # Errors
/// - Returns `Serialization` on malformed input
pub fn import(text: &str) -> Result<EncryptedRecord> {
    let wire: WireRecord =
        serde_json::from_str(text).map_err(|e| Error::Serialization(e.to_string()))?;

    let id = RecordId::new(wire.id)
        .map_err(|_| Error::Serialization("Record id cannot be empty".to_string()))?;

    Ok(EncryptedRecord {
        id,
        name: wire.name,
        mime_type: wire.mime_type,
        plain_size: wire.size,
        ciphertext: wire.encrypted_data,
        iv: wire.iv,
        salt: Salt::from_bytes(wire.salt),
        tag: wire.tag,
        checksum: wire.checksum,
        timestamp: wire.timestamp,
    })
}
