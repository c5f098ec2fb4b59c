//! Appointment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{AppointmentId, ErrorCode, ValidationError};

/// No appointment with the requested id exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Appointment not found: {id}")]
pub struct AppointmentNotFound {
    pub id: AppointmentId,
}

/// Any failure of an appointment lifecycle operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppointmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] AppointmentNotFound),
}

impl AppointmentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppointmentError::Validation(err) => err.code(),
            AppointmentError::NotFound(_) => ErrorCode::AppointmentNotFound,
        }
    }
}
