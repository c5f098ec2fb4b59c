//! Appointment domain module.
//!
//! Appointment records, their derived status, the specialty rosters,
//! and the ordered book that owns them.

mod aggregate;
mod book;
mod errors;
mod specialty;
mod status;

pub use aggregate::{Appointment, AppointmentRequest};
pub use book::AppointmentBook;
pub use errors::{AppointmentError, AppointmentNotFound};
pub use specialty::{list_doctors, Specialty};
pub use status::AppointmentStatus;
