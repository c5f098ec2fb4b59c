//! User-facing messages the View shows after a command.

use crate::domain::age::MINIMUM_AGE;
use crate::domain::foundation::{AppointmentId, ValidationError};

/// Visual weight of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Info,
    Error,
}

/// Summary shown after an appointment request is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentReceipt {
    pub doctor: String,
    /// Long display date, e.g. `Monday, November 2, 2026`.
    pub date: String,
    pub time: String,
    pub reason: String,
    pub status: String,
}

/// Messages the core asks the View to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayMessage {
    AgeGranted,
    AgeDenied,
    IncompleteForm,
    InvalidField { field: String, reason: String },
    LoggedIn { email: String },
    LoggedOut,
    PasswordRecoverySent { email: String },
    AppointmentRequested(AppointmentReceipt),
    AppointmentCancelled,
    AppointmentNotFound { id: AppointmentId },
    QuickRequestReceived {
        full_name: String,
        id_number: String,
        specialty: String,
    },
}

impl DisplayMessage {
    /// Message for a rejected form.
    pub fn from_validation(err: &ValidationError) -> Self {
        match err {
            ValidationError::MissingField { .. } => DisplayMessage::IncompleteForm,
            ValidationError::InvalidFormat { field, reason } => DisplayMessage::InvalidField {
                field: field.clone(),
                reason: reason.clone(),
            },
        }
    }

    pub fn tone(&self) -> NoticeTone {
        match self {
            DisplayMessage::AgeGranted
            | DisplayMessage::AppointmentRequested(_)
            | DisplayMessage::AppointmentCancelled => NoticeTone::Success,
            DisplayMessage::AgeDenied
            | DisplayMessage::IncompleteForm
            | DisplayMessage::InvalidField { .. }
            | DisplayMessage::AppointmentNotFound { .. } => NoticeTone::Error,
            DisplayMessage::LoggedIn { .. }
            | DisplayMessage::LoggedOut
            | DisplayMessage::PasswordRecoverySent { .. }
            | DisplayMessage::QuickRequestReceived { .. } => NoticeTone::Info,
        }
    }

    pub fn text(&self) -> String {
        match self {
            DisplayMessage::AgeGranted => {
                "Welcome! Thank you for verifying your age. You can now access all of our services."
                    .to_string()
            }
            DisplayMessage::AgeDenied => format!(
                "Access denied: you must be at least {} years old to use our services.",
                MINIMUM_AGE
            ),
            DisplayMessage::IncompleteForm => "Please complete all fields.".to_string(),
            DisplayMessage::InvalidField { field, reason } => {
                format!("The value for '{}' is not valid: {}", field, reason)
            }
            DisplayMessage::LoggedIn { email } => format!("Simulated login for: {}", email),
            DisplayMessage::LoggedOut => "Signed out successfully.".to_string(),
            DisplayMessage::PasswordRecoverySent { email } => {
                format!("A recovery link has been sent to: {}", email)
            }
            DisplayMessage::AppointmentRequested(receipt) => format!(
                "Appointment requested successfully\n\
                 Professional: {}\nDate: {}\nTime: {}\nReason: {}\nStatus: {}\n\
                 You will receive a confirmation email within the next 24 hours.",
                receipt.doctor, receipt.date, receipt.time, receipt.reason, receipt.status
            ),
            DisplayMessage::AppointmentCancelled => "Appointment cancelled successfully.".to_string(),
            DisplayMessage::AppointmentNotFound { id } => {
                format!("Appointment {} no longer exists.", id)
            }
            DisplayMessage::QuickRequestReceived {
                full_name,
                id_number,
                specialty,
            } => format!(
                "Appointment request registered for: {}\nID: {}\nSpecialty: {}",
                full_name, id_number, specialty
            ),
        }
    }
}
