//! Calendar-date value object for expiry dates.
//!
//! The backing store hands dates over as ISO 8601 strings (`YYYY-MM-DD`,
//! no time component). Parsing is the only fallible step; once constructed,
//! an `ExpiryDate` is date-only by type, so there is no time-of-day or
//! timezone drift to truncate away before comparison.

use chrono::NaiveDate;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A calendar date on which an inventory item expires.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpiryDate(NaiveDate);

impl ExpiryDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse an ISO 8601 date (`YYYY-MM-DD`).
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| DomainError::invalid_date(format!("{s:?}: {e}")))
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// Exact calendar-day difference to `today`.
    ///
    /// Negative for past dates, zero for today, positive for future dates.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.0 - today).num_days()
    }
}

impl From<NaiveDate> for ExpiryDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for ExpiryDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl core::fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        let parsed = ExpiryDate::parse("2026-03-01").unwrap();
        assert_eq!(parsed.as_date(), date(2026, 3, 1));
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let parsed = ExpiryDate::parse(" 2026-03-01 ").unwrap();
        assert_eq!(parsed.as_date(), date(2026, 3, 1));
    }

    #[test]
    fn parse_rejects_non_dates() {
        for raw in ["", "tomorrow", "2026-13-01", "03/01/2026"] {
            let err = ExpiryDate::parse(raw).unwrap_err();
            match err {
                DomainError::InvalidDate(_) => {}
                other => panic!("expected InvalidDate for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn days_until_is_signed_calendar_difference() {
        let today = date(2026, 3, 10);
        assert_eq!(ExpiryDate::new(date(2026, 3, 8)).days_until(today), -2);
        assert_eq!(ExpiryDate::new(date(2026, 3, 10)).days_until(today), 0);
        assert_eq!(ExpiryDate::new(date(2026, 3, 15)).days_until(today), 5);
        // Across a month boundary.
        assert_eq!(ExpiryDate::new(date(2026, 4, 2)).days_until(today), 23);
    }

    #[test]
    fn display_round_trips() {
        let d = ExpiryDate::new(date(2026, 3, 1));
        assert_eq!(ExpiryDate::parse(&d.to_string()).unwrap(), d);
    }
}
