//! Key-value store port - Durable, origin-scoped string storage.
//!
//! Mirrors the browser's local storage: string keys, string values,
//! survives reloads, gone after a deliberate clear.

use thiserror::Error;

/// Errors that can occur while mutating the store.
///
/// Reads never fail: an unreadable key is reported as absent.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write key '{key}': {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("Failed to remove key '{key}': {reason}")]
    RemoveFailed { key: String, reason: String },

    #[error("Failed to clear store: {0}")]
    ClearFailed(String),
}

/// Port for reading and writing persisted blobs.
///
/// Operations are synchronous; callers run them to completion inside a
/// single command.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `None` when the key is absent or cannot be read.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns `StoreError::WriteFailed` if the value could not be stored
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Remove every key, as a user clearing site data would.
    fn clear(&self) -> Result<(), StoreError>;
}
