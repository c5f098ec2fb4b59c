//! Commands raised by the page.
//!
//! Every user interaction the core reacts to is one variant here. The
//! runtime hands them to [`handle`](super::handlers::handle) one at a time.

use serde::Deserialize;

use crate::domain::appointment::{AppointmentRequest, Specialty};
use crate::domain::foundation::{require, AppointmentId, ValidationError};

/// A user interaction to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoginSubmitted { email: String, password: String },
    LogoutRequested,
    /// `email` is empty when the visitor dismissed the prompt.
    PasswordRecoveryRequested { email: String },
    AgeFormSubmitted { birthdate: String },
    /// `query` is the raw query string of the appointment page, without `?`.
    AppointmentPageEntered { query: String },
    SpecialtyChanged { specialty: String },
    AppointmentSubmitted(AppointmentRequest),
    /// Sent only after the visitor confirmed the cancellation.
    CancelRequested { id: AppointmentId },
    QuickRequestSubmitted(QuickRequestForm),
    /// `url` is empty when the visitor dismissed the prompt.
    LogoChanged { url: String },
}

impl Command {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::LoginSubmitted { .. } => "login_submitted",
            Command::LogoutRequested => "logout_requested",
            Command::PasswordRecoveryRequested { .. } => "password_recovery_requested",
            Command::AgeFormSubmitted { .. } => "age_form_submitted",
            Command::AppointmentPageEntered { .. } => "appointment_page_entered",
            Command::SpecialtyChanged { .. } => "specialty_changed",
            Command::AppointmentSubmitted(_) => "appointment_submitted",
            Command::CancelRequested { .. } => "cancel_requested",
            Command::QuickRequestSubmitted(_) => "quick_request_submitted",
            Command::LogoChanged { .. } => "logo_changed",
        }
    }
}

/// Fields of the home page's quick appointment form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickRequestForm {
    pub full_name: String,
    pub id_number: String,
    pub specialty: String,
}

impl QuickRequestForm {
    /// # Errors
    ///
    /// - `MissingField` for the first empty field
    /// - `InvalidFormat` if the specialty is not a known slug
    pub fn validate(&self) -> Result<Specialty, ValidationError> {
        require("fullName", &self.full_name)?;
        require("idNumber", &self.id_number)?;
        self.specialty.parse()
    }
}
