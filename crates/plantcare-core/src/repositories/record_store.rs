//! Local record store trait (port)

use async_trait::async_trait;

use crate::error::StorageError;

/// Device-local key-value storage holding serialized records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the value under `key`, `None` when nothing was ever written.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing whatever was there.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
