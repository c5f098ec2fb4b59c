//! Session domain module.
//!
//! Holds the visitor's simulated login and age-gate flags, plus the
//! snapshot shape they are persisted in.

mod aggregate;
mod snapshot;

pub use aggregate::{LoginState, Session, UserData};
pub use snapshot::{SessionSnapshot, SnapshotAnomaly};
