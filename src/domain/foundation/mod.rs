//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the CAPS clinic domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{require, ErrorCode, ValidationError};
pub use ids::AppointmentId;
pub use timestamp::Timestamp;
