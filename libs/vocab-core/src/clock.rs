//! Source of "today" for scheduling.

use chrono::{Duration, Local, NaiveDate, Timelike};

/// Supplies the current study date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock with a configurable start of the study day.
///
/// Before `daily_reset_hour` the study date is still yesterday.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    pub daily_reset_hour: u32,
}

impl SystemClock {
    pub fn new(daily_reset_hour: u32) -> Self {
        Self { daily_reset_hour }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        let now = Local::now();
        if now.hour() < self.daily_reset_hour {
            (now - Duration::days(1)).date_naive()
        } else {
            now.date_naive()
        }
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
    fn test_midnight_reset() {
        let today = Local::now().date_naive();
        let result = SystemClock::new(0).today();
        // Allow for the date rolling over between the two calls.
        assert!(result == today || result == today + Duration::days(1));
    }

    #[test]
    fn test_late_reset_never_ahead_of_local_date() {
        let today = Local::now().date_naive();
        assert!(SystemClock::new(23).today() <= today + Duration::days(1));
        assert!(SystemClock::new(23).today() >= today - Duration::days(1));
    }

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
