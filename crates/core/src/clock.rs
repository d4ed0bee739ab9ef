//! Clock seam supplying "today" as a date-only value.
//!
//! Every classification pass must be judged against a single `today`, so the
//! engine never reads the wall clock itself; callers inject a `Clock` at the
//! snapshot boundary.

use chrono::{Local, NaiveDate};

/// Supplier of the current calendar date in the shop's operating timezone.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation (local timezone, date-only).
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Deterministic clock for tests and replay.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
