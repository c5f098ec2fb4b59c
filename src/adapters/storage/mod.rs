//! Storage Adapters
//!
//! Implementations of the KeyValueStore port for persisting blobs.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - One file per key under a data directory
//! - **InMemoryKeyValueStore** - Process-lifetime map (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use caps_clinic::adapters::storage::store_from_config;
//!
//! let store = store_from_config(&config.storage);
//! ```

mod file_key_value_store;
mod in_memory_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::KeyValueStore;

/// Build the store selected by configuration.
pub fn store_from_config(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::debug!("Using in-memory key-value store");
            Arc::new(InMemoryKeyValueStore::new())
        }
        StorageBackend::File => {
            tracing::debug!(data_dir = %config.data_dir.display(), "Using file key-value store");
            Arc::new(FileKeyValueStore::new(&config.data_dir))
        }
    }
}
