//! Wall-clock abstraction
//!
//! Services that depend on "today" take a [`Clock`] so tests can pin the date.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Current wall-clock time (UTC)
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day; day boundaries are UTC midnight.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Real system clock implementation for production use
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn today_uses_utc_day() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }
}
