//! Store selection from configuration

use async_trait::async_trait;
use tracing::info;

use plantcare_core::error::StorageError;
use plantcare_core::repositories::RecordStore;
use plantcare_shared::config::StorageSettings;

use crate::{FileRecordStore, MemoryRecordStore};

/// The record store picked by `storage.in_memory`.
pub enum LocalStore {
    File(FileRecordStore),
    Memory(MemoryRecordStore),
}

impl LocalStore {
    pub fn from_settings(settings: &StorageSettings) -> Self {
        if settings.in_memory {
            info!("Using in-memory record store");
            Self::Memory(MemoryRecordStore::new())
        } else {
            info!("Using file record store at {}", settings.dir);
            Self::File(FileRecordStore::new(&settings.dir))
        }
    }
}

#[async_trait]
impl RecordStore for LocalStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::File(store) => store.get(key).await,
            Self::Memory(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::File(store) => store.set(key, value).await,
            Self::Memory(store) => store.set(key, value).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_flag_selects_memory_store() {
        let settings = StorageSettings { dir: "unused".to_string(), in_memory: true };
        assert!(matches!(LocalStore::from_settings(&settings), LocalStore::Memory(_)));

        let settings = StorageSettings { dir: "data".to_string(), in_memory: false };
        assert!(matches!(LocalStore::from_settings(&settings), LocalStore::File(_)));
    }
}
