//! Application state: session flags plus the appointment book.

use super::appointment::AppointmentBook;
use super::session::Session;

/// Everything the site remembers about the current visitor.
///
/// One instance is owned by the running application and handed to each
/// command handler; there is no global copy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub session: Session,
    pub appointments: AppointmentBook,
}

impl AppState {
    /// Anonymous, unverified visitor with no appointments.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(session: Session, appointments: AppointmentBook) -> Self {
        Self {
            session,
            appointments,
        }
    }
}
