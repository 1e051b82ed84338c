//! In-memory blob store for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::provider::BlobStore;
use lockbox_common::{Error, Result};

/// In-memory blob store.
///
/// Useful for testing and development. All data is stored in memory and lost
/// on drop.
#[derive(Clone)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn put(&self, key: &str, blob: String) -> Result<()> {
        if key.is_empty() {
            return Err(Error::InvalidInput("Key cannot be empty".to_string()));
        }
        self.entries
            .write()
            .map_err(|_| Error::Storage("Store lock poisoned".to_string()))?
            .insert(key.to_string(), blob);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .read()
            .map_err(|_| Error::Storage("Store lock poisoned".to_string()))?
            .get(key)
            .cloned())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries
            .write()
            .map_err(|_| Error::Storage("Store lock poisoned".to_string()))?
            .remove(key);
        Ok(())
    }
}
