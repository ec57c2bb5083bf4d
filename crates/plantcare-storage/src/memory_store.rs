//! In-memory record store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use plantcare_core::error::StorageError;
use plantcare_core::repositories::RecordStore;

/// Keeps records for the lifetime of the process only.
#[derive(Default)]
pub struct MemoryRecordStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
