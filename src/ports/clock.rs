//! Clock port - Source of "now" for ids, timestamps, and age checks.

use chrono::NaiveDate;

use crate::domain::foundation::Timestamp;

/// Port for reading the current time.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Timestamp;

    /// The visitor's current calendar date.
    ///
    /// Defaults to the UTC date of [`Clock::now`].
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
