//! Appointment status, derived once at creation.

use serde::{Deserialize, Serialize};
use std::fmt;

const PENDING: &str = "Pending";
const URGENT_UNDER_REVIEW: &str = "Urgent - Under review";

/// Status of an appointment request.
///
/// Derived from the urgency flag when the appointment is created and
/// never recomputed. Statuses read back from storage that this version
/// does not derive are kept verbatim as `Recorded`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppointmentStatus {
    Pending,
    UrgentUnderReview,
    Recorded(String),
}

impl AppointmentStatus {
    /// Status for a newly created appointment.
    pub fn derive(urgent: bool) -> Self {
        if urgent {
            AppointmentStatus::UrgentUnderReview
        } else {
            AppointmentStatus::Pending
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AppointmentStatus::Pending => PENDING,
            AppointmentStatus::UrgentUnderReview => URGENT_UNDER_REVIEW,
            AppointmentStatus::Recorded(raw) => raw,
        }
    }

    /// Wording used when confirming a freshly requested appointment.
    pub fn confirmation_label(&self) -> &str {
        match self {
            AppointmentStatus::Pending => "Pending confirmation",
            other => other.as_str(),
        }
    }
}

impl From<String> for AppointmentStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            PENDING => AppointmentStatus::Pending,
            URGENT_UNDER_REVIEW => AppointmentStatus::UrgentUnderReview,
            _ => AppointmentStatus::Recorded(raw),
        }
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
