//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the core and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - Durable storage for the persisted blobs
//! - `Clock` - Current time for ids, timestamps, and the age gate
//! - `View` - The page that renders projections and messages
//! - `RestrictedFeatures` - Hook fired when the age gate is passed

mod clock;
mod display_message;
mod key_value_store;
mod restricted_features;
mod view;

pub use clock::Clock;
pub use display_message::{AppointmentReceipt, DisplayMessage, NoticeTone};
pub use key_value_store::{KeyValueStore, StoreError};
pub use restricted_features::RestrictedFeatures;
pub use view::{
    AppointmentListView, AppointmentRow, DoctorOptions, Page, Projection, RegionTag,
    RegionVisibility, View,
};
