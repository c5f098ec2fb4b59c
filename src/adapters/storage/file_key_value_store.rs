//! File-based Key-Value Store Adapter
//!
//! Stores each key as its own file inside one directory per origin.
//! Writes go to a temporary file first and are renamed into place, so a
//! reader never sees a half-written blob.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::ports::{KeyValueStore, StoreError};

const BLOB_EXTENSION: &str = "blob";

/// File-based storage for persisted blobs.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `base_path`. The directory is created on
    /// first write.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data/caps");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Keys become file names, so only a conservative character set is allowed.
    fn is_valid_key(key: &str) -> bool {
        !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    fn blob_path(&self, key: &str) -> Option<PathBuf> {
        Self::is_valid_key(key)
            .then(|| self.base_path.join(format!("{}.{}", key, BLOB_EXTENSION)))
    }

    fn write_failed(key: &str, reason: impl ToString) -> StoreError {
        StoreError::WriteFailed {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn read(&self, key: &str) -> Option<String> {
        let path = self.blob_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, path = %path.display(), "Failed to read stored blob: {}", e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self
            .blob_path(key)
            .ok_or_else(|| Self::write_failed(key, "key contains unsupported characters"))?;

        fs::create_dir_all(&self.base_path).map_err(|e| Self::write_failed(key, e))?;

        let tmp_path = self
            .base_path
            .join(format!(".{}.{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(|e| Self::write_failed(key, e))?;
        fs::rename(&tmp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            Self::write_failed(key, e)
        })?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let Some(path) = self.blob_path(key) else {
            return Ok(());
        };
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::RemoveFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        let entries = match fs::read_dir(&self.base_path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(StoreError::ClearFailed(e.to_string())),
        };

        for entry in entries {
            let path = entry
                .map_err(|e| StoreError::ClearFailed(e.to_string()))?
                .path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(BLOB_EXTENSION) {
                fs::remove_file(&path).map_err(|e| StoreError::ClearFailed(e.to_string()))?;
            }
        }
        Ok(())
    }
}
