//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors)
//! - `session` - Simulated login and age-gate flags
//! - `age` - Age computation for the age gate
//! - `appointment` - Appointment records, status, rosters, and the book
//! - `state` - The aggregate state owned by the application

pub mod age;
pub mod appointment;
pub mod foundation;
pub mod session;
pub mod state;

pub use state::AppState;
