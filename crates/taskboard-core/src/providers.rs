//! Providers for the current time and fresh task ids.
//!
//! The store never reads the system clock or generates ids itself; callers
//! pass these providers in so tests can pin both.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use crate::model::TaskId;

/// Source of the current local date and time.
pub trait Clock {
    /// Returns the current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Creates a clock frozen at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self(now)
    }

    /// Creates a clock frozen at midnight on `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self(NaiveDateTime::new(date, NaiveTime::default()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Source of fresh, unique task ids.
pub trait IdGenerator {
    /// Returns an id that has not been returned before.
    fn next_id(&mut self) -> TaskId;
}

/// Generates random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> TaskId {
        TaskId::new(Uuid::new_v4().to_string())
    }
}

/// Generates "1", "2", "3", ... for predictable ids in tests and demos.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    /// Creates a generator whose first id is "1".
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        self.last += 1;
        TaskId::new(self.last.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixed_clock_reports_date() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        let clock = FixedClock::on(date);

        assert_eq!(clock.today(), date);
        assert_eq!(clock.now().date(), date);
    }

    #[test]
    fn test_fixed_clock_late_evening_is_same_day() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        let now = date.and_hms_opt(23, 59, 59).unwrap();

        assert_eq!(FixedClock::new(now).today(), date);
    }

    #[test]
    fn test_sequential_ids_count_up() {
        let mut ids = SequentialIds::new();

        assert_eq!(ids.next_id().as_str(), "1");
        assert_eq!(ids.next_id().as_str(), "2");
        assert_eq!(ids.next_id().as_str(), "3");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidGenerator;
        let generated: HashSet<TaskId> = (0..100).map(|_| ids.next_id()).collect();

        assert_eq!(generated.len(), 100);
    }

    #[test]
    fn test_system_clock_today_matches_local() {
        let today = SystemClock.today();
        let local = Local::now().date_naive();

        // Allow for the test running across midnight.
        assert!(today == local || today.succ_opt() == Some(local));
    }
}
