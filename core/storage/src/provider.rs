//! Blob store trait definition.

use async_trait::async_trait;

use lockbox_common::Result;

/// External persistence collaborator for serialized encrypted records.
///
/// Blobs are opaque strings: the store must return them byte-for-byte
/// unmodified, and the encryption core never inspects how the backend
/// indexes or protects its own medium.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Get the store name (e.g., "memory").
    fn name(&self) -> &str;

    /// Store a blob under `key`, replacing any existing value.
    ///
    /// # Errors
    /// - Backend I/O or connectivity failure
    async fn put(&self, key: &str, blob: String) -> Result<()>;

    /// Fetch the blob stored under `key`, if present.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Remove the blob stored under `key`.
    ///
    /// Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
