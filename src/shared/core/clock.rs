// Clock port: the only way the core learns the current time.
//
// Purpose
// - Keep timestamps and age checks deterministic under test.
//
// Boundaries
// - No input or output beyond reading the system clock in SystemClock.

use chrono::{DateTime, NaiveDate, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
