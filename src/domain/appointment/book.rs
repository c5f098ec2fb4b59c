//! Ordered collection of appointments.

use serde::{Deserialize, Serialize};

use super::{Appointment, AppointmentNotFound, AppointmentRequest};
use crate::domain::foundation::{AppointmentId, Timestamp, ValidationError};

/// The visitor's appointments, in creation order.
///
/// # Invariants
///
/// - Insertion order is creation order
/// - Ids allocated by [`AppointmentBook::create`] are unique within the book
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already ordered sequence, e.g. one read from storage.
    pub fn from_appointments(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    pub fn as_slice(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn get(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id() == id)
    }

    /// Validates a request and appends the resulting appointment.
    ///
    /// The id is derived from `now`, bumped past every id already in the
    /// book. On error the book is left untouched.
    ///
    /// # Errors
    ///
    /// - `MissingField` / `InvalidFormat` from request validation
    pub fn create(
        &mut self,
        request: AppointmentRequest,
        now: Timestamp,
    ) -> Result<&Appointment, ValidationError> {
        let id = AppointmentId::next(&now, self.appointments.iter().map(Appointment::id));
        let appointment = Appointment::create(id, request, now)?;
        self.appointments.push(appointment);
        Ok(&self.appointments[self.appointments.len() - 1])
    }

    /// Removes the first appointment with the given id.
    ///
    /// # Errors
    ///
    /// - `AppointmentNotFound` if no appointment has that id
    pub fn cancel(&mut self, id: AppointmentId) -> Result<Appointment, AppointmentNotFound> {
        let index = self
            .appointments
            .iter()
            .position(|a| a.id() == id)
            .ok_or(AppointmentNotFound { id })?;
        Ok(self.appointments.remove(index))
    }
}
