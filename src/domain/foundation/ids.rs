//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::{Timestamp, ValidationError};

/// Identifier of an appointment within the appointment sequence.
///
/// Serialized as a bare integer so stored blobs keep the
/// millisecond-timestamp shape they always had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(i64);

impl AppointmentId {
    /// Creates an AppointmentId from a raw integer.
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Allocates the next identifier for a sequence.
    ///
    /// The result is the creation time in Unix milliseconds, bumped past
    /// the largest identifier already in use. Identifiers are therefore
    /// strictly increasing within a sequence even when several are
    /// allocated inside the same millisecond or the clock steps back.
    ///
    /// If the largest identifier is `i64::MAX` there is nothing above it,
    /// so the first unused value at or after `now` (wrapping around) is
    /// taken instead. The result is then unique but no longer the largest.
    pub fn next(now: &Timestamp, existing: impl IntoIterator<Item = AppointmentId>) -> Self {
        let taken: BTreeSet<i64> = existing.into_iter().map(|id| id.0).collect();
        let now = now.as_unix_millis();

        match taken.iter().next_back() {
            None => Self(now),
            Some(&max) => match max.checked_add(1) {
                Some(after_max) => Self(now.max(after_max)),
                None => Self(Self::first_unused(now, &taken)),
            },
        }
    }

    fn first_unused(from: i64, taken: &BTreeSet<i64>) -> i64 {
        (from..=i64::MAX)
            .chain(i64::MIN..from)
            .find(|candidate| !taken.contains(candidate))
            .unwrap_or(from)
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AppointmentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("id", e.to_string()))
    }
}
