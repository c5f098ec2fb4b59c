//! Medical specialties and their doctor rosters.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{require, ValidationError};

/// Service category an appointment is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialty {
    General,
    Nutrition,
    Psychology,
    Pediatrics,
}

impl Specialty {
    /// All specialties in display order.
    pub fn all() -> &'static [Specialty] {
        &[
            Specialty::General,
            Specialty::Nutrition,
            Specialty::Psychology,
            Specialty::Pediatrics,
        ]
    }

    /// Slug used in forms, query strings, and stored blobs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::General => "general",
            Specialty::Nutrition => "nutrition",
            Specialty::Psychology => "psychology",
            Specialty::Pediatrics => "pediatrics",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Specialty::General => "General Medicine",
            Specialty::Nutrition => "Nutrition",
            Specialty::Psychology => "Psychology",
            Specialty::Pediatrics => "Pediatrics",
        }
    }

    /// Doctors taking appointments for this specialty, in display order.
    pub fn doctors(&self) -> &'static [&'static str] {
        ROSTER.get(self).map(Vec::as_slice).unwrap_or(&[])
    }

    fn load_roster(specialty: Specialty) -> Vec<&'static str> {
        match specialty {
            Specialty::General => vec!["Dr. Juan Pérez", "Dra. María García", "Dr. Carlos López"],
            Specialty::Nutrition => vec!["Lic. Ana Martínez", "Lic. Roberto Sánchez"],
            Specialty::Psychology => vec!["Lic. Laura Fernández", "Lic. Miguel Rodríguez"],
            Specialty::Pediatrics => vec!["Dra. Sofía Díaz", "Dr. Javier Romero"],
        }
    }
}

static ROSTER: Lazy<HashMap<Specialty, Vec<&'static str>>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for specialty in Specialty::all() {
        map.insert(*specialty, Specialty::load_roster(*specialty));
    }
    map
});

/// Doctors for a specialty slug. Unknown or empty slugs yield no doctors.
pub fn list_doctors(specialty: &str) -> Vec<String> {
    specialty
        .parse::<Specialty>()
        .map(|s| s.doctors().iter().map(|d| d.to_string()).collect())
        .unwrap_or_default()
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        require("specialty", s)?;
        let slug = s.trim();
        Specialty::all()
            .iter()
            .copied()
            .find(|specialty| specialty.as_str() == slug)
            .ok_or_else(|| {
                ValidationError::invalid_format("specialty", format!("unknown specialty '{}'", slug))
            })
    }
}
