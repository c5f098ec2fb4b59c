//! Cross-page handoff into the appointment request page.
//!
//! Doctor cards on the home page link to the request page with
//! `?especialidad=<slug>&medico=<name>`. Entering the page with those
//! parameters fills the doctor select and pre-selects the doctor.

use serde::Deserialize;

use crate::domain::appointment::Specialty;
use crate::ports::DoctorOptions;

/// Query parameters understood by the appointment request page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppointmentPageQuery {
    pub especialidad: Option<String>,
    pub medico: Option<String>,
}

impl AppointmentPageQuery {
    /// Decodes a raw query string. A leading `?` is tolerated.
    ///
    /// Malformed input is logged and treated as an empty query.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        serde_urlencoded::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!(query = raw, error = %e, "Ignoring malformed appointment page query");
            Self::default()
        })
    }

    /// Doctor select contents for this query, or `None` when no specialty
    /// was handed over.
    pub fn doctor_options(&self) -> Option<DoctorOptions> {
        let specialty = self.especialidad.as_deref().filter(|s| !s.trim().is_empty())?;
        let mut options = doctor_options_for(specialty);
        options.selected = self
            .medico
            .as_deref()
            .map(str::trim)
            .filter(|medico| options.options.iter().any(|o| o == medico))
            .map(str::to_string);
        Some(options)
    }
}

/// Doctor select contents for a specialty slug, with nothing selected.
///
/// An unknown slug yields an empty option list.
pub fn doctor_options_for(specialty: &str) -> DoctorOptions {
    match specialty.parse::<Specialty>() {
        Ok(specialty) => DoctorOptions {
            specialty: Some(specialty),
            options: specialty.doctors().iter().map(|d| d.to_string()).collect(),
            selected: None,
        },
        Err(_) => DoctorOptions {
            specialty: None,
            options: Vec::new(),
            selected: None,
        },
    }
}
