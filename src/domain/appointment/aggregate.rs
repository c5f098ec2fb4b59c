//! Appointment record.
//!
//! An appointment is a single scheduling request. It is created from a
//! validated request, owned by the appointment book, and destroyed when
//! cancelled. Nothing about it changes after creation.

use serde::{Deserialize, Serialize};

use super::{AppointmentStatus, Specialty};
use crate::domain::foundation::{require, AppointmentId, Timestamp, ValidationError};

/// Fields submitted by the appointment request form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AppointmentRequest {
    pub specialty: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub reason: String,
    #[serde(default)]
    pub urgent: bool,
}

impl AppointmentRequest {
    /// Checks that every required field is filled and the specialty is known.
    ///
    /// # Errors
    ///
    /// - `MissingField` for the first empty field, in form order
    /// - `InvalidFormat` if the specialty is not one of the known slugs
    pub fn validate(&self) -> Result<Specialty, ValidationError> {
        require("specialty", &self.specialty)?;
        require("doctor", &self.doctor)?;
        require("date", &self.date)?;
        require("time", &self.time)?;
        require("reason", &self.reason)?;
        self.specialty.parse()
    }
}

/// A requested appointment, stored exactly as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    id: AppointmentId,
    specialty: Specialty,
    doctor: String,
    date: String,
    time: String,
    reason: String,
    urgent: bool,
    status: AppointmentStatus,
    created_at: Timestamp,
}

impl Appointment {
    /// Creates an appointment from a request.
    ///
    /// The status is derived from the urgency flag here and never again.
    ///
    /// # Errors
    ///
    /// Returns the request's validation error, see [`AppointmentRequest::validate`].
    pub fn create(
        id: AppointmentId,
        request: AppointmentRequest,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let specialty = request.validate()?;

        Ok(Self {
            id,
            specialty,
            doctor: request.doctor.trim().to_string(),
            date: request.date.trim().to_string(),
            time: request.time.trim().to_string(),
            reason: request.reason.trim().to_string(),
            urgent: request.urgent,
            status: AppointmentStatus::derive(request.urgent),
            created_at,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> AppointmentId {
        self.id
    }

    pub fn specialty(&self) -> Specialty {
        self.specialty
    }

    pub fn doctor(&self) -> &str {
        &self.doctor
    }

    /// Calendar date as submitted (`YYYY-MM-DD`).
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn is_urgent(&self) -> bool {
        self.urgent
    }

    pub fn status(&self) -> &AppointmentStatus {
        &self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
