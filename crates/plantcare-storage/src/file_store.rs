// ============================================================================
// Plantcare Storage - File Record Store
// File: crates/plantcare-storage/src/file_store.rs
// ============================================================================
//! One file per key (`<dir>/<key>.json`) on the local filesystem.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, error};

use plantcare_core::error::StorageError;
use plantcare_core::repositories::RecordStore;

pub struct FileRecordStore {
    dir: PathBuf,
}

impl FileRecordStore {
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => {
                debug!("Read key '{}' from {}", key, path.display());
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                Err(StorageError::Io(e))
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).await?;

        // Write aside, then rename over the old file
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).await?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            error!("Failed to replace {}: {}", path.display(), e);
            let _ = fs::remove_file(&tmp).await;
            return Err(StorageError::Io(e));
        }

        debug!("Wrote key '{}' to {}", key, path.display());
        Ok(())
    }
}
