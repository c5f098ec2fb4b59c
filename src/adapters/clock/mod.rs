//! Clock Adapters
//!
//! - **SystemClock** - Wall clock; "today" is the local calendar date
//! - **FixedClock** - Settable clock for tests and demos

use chrono::{Local, NaiveDate};
use std::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<Timestamp>,
    today: RwLock<Option<NaiveDate>>,
}

impl FixedClock {
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: RwLock::new(now),
            today: RwLock::new(None),
        }
    }

    /// Clock whose calendar date differs from the UTC date of `now`,
    /// e.g. a visitor in another time zone.
    pub fn with_today(now: Timestamp, today: NaiveDate) -> Self {
        Self {
            now: RwLock::new(now),
            today: RwLock::new(Some(today)),
        }
    }

    pub fn set(&self, now: Timestamp) {
        if let Ok(mut guard) = self.now.write() {
            *guard = now;
        }
    }

    pub fn set_today(&self, today: NaiveDate) {
        if let Ok(mut guard) = self.today.write() {
            *guard = Some(today);
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.now
            .read()
            .map(|guard| *guard)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    fn today(&self) -> NaiveDate {
        let pinned = self.today.read().ok().and_then(|guard| *guard);
        pinned.unwrap_or_else(|| self.now().date())
    }
}
