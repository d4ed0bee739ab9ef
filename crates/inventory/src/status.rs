//! Expiry classification: one expiry date, one urgency status.
//!
//! Statuses partition the days-to-expiry line; the mapping is evaluated in
//! order and the first match wins, so the boundaries 0, 5 and 10 are exact.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shelflife_core::ExpiryDate;

/// Items expiring within this many days (exclusive of today) are critical.
pub const CRITICAL_WINDOW_DAYS: i64 = 5;

/// Items expiring within this many days (beyond the critical window) warrant
/// a warning.
pub const WARNING_WINDOW_DAYS: i64 = 10;

/// Urgency status of a single inventory item, derived from its expiry date.
///
/// Never persisted; recomputed from the snapshot's `today` on every pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    /// Expiry date is in the past.
    Expired,
    /// Expires today.
    Today,
    /// Expires within the critical window (1..=5 days).
    Critical,
    /// Expires within the warning window (6..=10 days).
    Warning,
    /// More than 10 days out.
    Ok,
}

impl ExpiryStatus {
    /// Classify an expiry date against `today`.
    ///
    /// Total over any pair of valid calendar dates; both sides are date-only
    /// by type, so there is no timezone or time-of-day drift to normalize.
    pub fn classify(expiry: ExpiryDate, today: NaiveDate) -> Self {
        let days = expiry.days_until(today);
        if days < 0 {
            ExpiryStatus::Expired
        } else if days == 0 {
            ExpiryStatus::Today
        } else if days <= CRITICAL_WINDOW_DAYS {
            ExpiryStatus::Critical
        } else if days <= WARNING_WINDOW_DAYS {
            ExpiryStatus::Warning
        } else {
            ExpiryStatus::Ok
        }
    }

    /// Whether this status demands immediate attention.
    ///
    /// Expired, today and critical all elevate a category to critical and
    /// force it open in the display.
    pub fn is_urgent(self) -> bool {
        matches!(
            self,
            ExpiryStatus::Expired | ExpiryStatus::Today | ExpiryStatus::Critical
        )
    }
}

impl core::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::Today => "today",
            ExpiryStatus::Critical => "critical",
            ExpiryStatus::Warning => "warning",
            ExpiryStatus::Ok => "ok",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()
    }

    fn classify_offset(days: i64) -> ExpiryStatus {
        ExpiryStatus::classify(ExpiryDate::new(today() + Duration::days(days)), today())
    }

    #[test]
    fn past_dates_are_expired() {
        assert_eq!(classify_offset(-1), ExpiryStatus::Expired);
        assert_eq!(classify_offset(-365), ExpiryStatus::Expired);
    }

    #[test]
    fn zero_days_is_today_not_expired() {
        assert_eq!(classify_offset(0), ExpiryStatus::Today);
    }

    #[test]
    fn critical_window_boundaries() {
        assert_eq!(classify_offset(1), ExpiryStatus::Critical);
        assert_eq!(classify_offset(5), ExpiryStatus::Critical);
        assert_eq!(classify_offset(6), ExpiryStatus::Warning);
    }

    #[test]
    fn warning_window_boundaries() {
        assert_eq!(classify_offset(10), ExpiryStatus::Warning);
        assert_eq!(classify_offset(11), ExpiryStatus::Ok);
    }

    #[test]
    fn urgency_covers_expired_today_critical_only() {
        assert!(ExpiryStatus::Expired.is_urgent());
        assert!(ExpiryStatus::Today.is_urgent());
        assert!(ExpiryStatus::Critical.is_urgent());
        assert!(!ExpiryStatus::Warning.is_urgent());
        assert!(!ExpiryStatus::Ok.is_urgent());
    }

    #[test]
    fn display_matches_wire_labels() {
        assert_eq!(ExpiryStatus::Expired.to_string(), "expired");
        assert_eq!(ExpiryStatus::Ok.to_string(), "ok");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: classification matches the spec boundaries for every
            /// day offset, and exactly one status is returned.
            #[test]
            fn statuses_partition_the_day_line(offset in -4000i64..4000) {
                let status = classify_offset(offset);
                let expected = match offset {
                    d if d < 0 => ExpiryStatus::Expired,
                    0 => ExpiryStatus::Today,
                    d if d <= CRITICAL_WINDOW_DAYS => ExpiryStatus::Critical,
                    d if d <= WARNING_WINDOW_DAYS => ExpiryStatus::Warning,
                    _ => ExpiryStatus::Ok,
                };
                prop_assert_eq!(status, expected);
            }

            /// Property: expired iff strictly before today, today iff equal.
            #[test]
            fn expired_iff_strictly_past(offset in -4000i64..4000) {
                let status = classify_offset(offset);
                prop_assert_eq!(status == ExpiryStatus::Expired, offset < 0);
                prop_assert_eq!(status == ExpiryStatus::Today, offset == 0);
            }
        }
    }
}
