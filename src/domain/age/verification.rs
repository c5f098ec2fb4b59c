//! Age computation and the adult/minor verdict.

use chrono::{Datelike, NaiveDate};

use crate::domain::foundation::{require, ValidationError};

/// Minimum age, in whole years, for age-restricted services.
pub const MINIMUM_AGE: i32 = 18;

/// Date format produced by `<input type="date">`.
const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// Age in whole years on `today` for someone born on `birthdate`.
///
/// The year difference is reduced by one while `today`'s (month, day) is
/// still before the birthday's (month, day). A Feb-29 birthday therefore
/// counts from Mar-1 in non-leap years. Birthdates after `today` yield a
/// negative age.
pub fn compute_age(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    age
}

/// Parses a birthdate as submitted by the age form.
///
/// # Errors
///
/// - `MissingField` if the value is empty
/// - `InvalidFormat` if it is not a `YYYY-MM-DD` calendar date
pub fn parse_birthdate(raw: &str) -> Result<NaiveDate, ValidationError> {
    require("birthdate", raw)?;
    NaiveDate::parse_from_str(raw.trim(), BIRTHDATE_FORMAT).map_err(|e| {
        ValidationError::invalid_format("birthdate", format!("expected YYYY-MM-DD ({})", e))
    })
}

/// Outcome of the age gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeVerdict {
    Granted { age: i32 },
    Denied { age: i32 },
}

impl AgeVerdict {
    /// Evaluates a birthdate against `today`.
    pub fn evaluate(birthdate: NaiveDate, today: NaiveDate) -> Self {
        let age = compute_age(birthdate, today);
        if age >= MINIMUM_AGE {
            AgeVerdict::Granted { age }
        } else {
            AgeVerdict::Denied { age }
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, AgeVerdict::Granted { .. })
    }

    pub fn age(&self) -> i32 {
        match self {
            AgeVerdict::Granted { age } | AgeVerdict::Denied { age } => *age,
        }
    }
}
