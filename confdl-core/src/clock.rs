use chrono::{Duration, NaiveDateTime, Utc};

use crate::tz::REFERENCE_OFFSET_MINUTES;

/// Source of "now", as naive wall-clock time in the reference timezone.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc() + Duration::minutes(REFERENCE_OFFSET_MINUTES.into())
    }
}

/// A frozen clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
