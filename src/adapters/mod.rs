//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the core to the outside world:
//! - `storage` - Key-value stores (in-memory, file)
//! - `clock` - System and fixed clocks
//! - `view` - Recording view
//! - `features` - Restricted-features hook

pub mod clock;
pub mod features;
pub mod storage;
pub mod view;

pub use clock::{FixedClock, SystemClock};
pub use features::LoggingRestrictedFeatures;
pub use storage::{store_from_config, FileKeyValueStore, InMemoryKeyValueStore};
pub use view::{RecordingView, ViewCall};
