//! Async persistence glue between the engine and a blob store.

use std::sync::Arc;
use tracing::{debug, info};

use crate::codec;
use crate::engine::VaultEngine;
use crate::record::EncryptedRecord;
use lockbox_common::{Error, Result};
use lockbox_storage::BlobStore;

/// Stores exported records in an external blob store, keyed by record id.
///
/// The store only ever sees the serialized textual form; all cryptography
/// stays inside the engine.
pub struct VaultStore {
    engine: Arc<VaultEngine>,
    provider: Arc<dyn BlobStore>,
}

impl VaultStore {
    /// Create a store around an engine and a persistence provider.
    pub fn new(engine: Arc<VaultEngine>, provider: Arc<dyn BlobStore>) -> Self {
        Self { engine, provider }
    }

    /// The engine backing this store.
    pub fn engine(&self) -> &VaultEngine {
        &self.engine
    }

    /// Serialize and persist a record under its id.
    ///
    /// # Errors
    /// - `Serialization` if export fails
    /// - `Storage` on backend failure
    pub async fn save(&self, record: &EncryptedRecord) -> Result<()> {
        let blob = codec::export(record)?;
        self.provider.put(record.id.as_str(), blob).await?;

        info!(id = %record.id, store = self.provider.name(), "Record saved");
        Ok(())
    }

    /// Fetch and deserialize the record stored under `id`.
    ///
    /// # Errors
    /// - `NotFound` if no blob is stored under `id`
    /// - `Serialization` if the stored blob is malformed
    pub async fn load(&self, id: &str) -> Result<EncryptedRecord> {
        debug!(id, "Loading record");

        let blob = self
            .provider
            .get(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("No record stored under '{}'", id)))?;

        codec::import(&blob)
    }

    /// Load the record stored under `id` and decrypt it.
    ///
    /// # Errors
    /// - Everything `load` returns, plus `Decryption`/`Integrity` from the
    ///   engine
    pub async fn open(&self, id: &str, password: &str) -> Result<Vec<u8>> {
        let record = self.load(id).await?;
        self.engine.decrypt_file(&record, password)
    }

    /// Delete the record stored under `id`.
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.provider.delete(id).await?;
        info!(id, "Record removed");
        Ok(())
    }
}
