//! Work interval and work-time record models.
//!
//! A [`WorkInterval`] is the raw start/end pair the engine aggregates. A
//! [`WorkTime`] is the stored record that ties an interval to an employee by id.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An immutable span of work between two timestamps.
///
/// `end` is not required to be after `start`; the aggregator treats an
/// inverted interval as contributing no hours.
///
/// # Examples
///
/// ```
/// use worktime_engine::models::WorkInterval;
/// use chrono::NaiveDateTime;
///
/// let interval = WorkInterval::new(
///     NaiveDateTime::parse_from_str("2025-04-26 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2025-04-26 17:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// );
/// assert_eq!(interval.duration().num_minutes(), 510);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkInterval {
    /// When the work started.
    pub start: NaiveDateTime,
    /// When the work ended.
    pub end: NaiveDateTime,
}

impl WorkInterval {
    /// Creates a new interval.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Returns the raw elapsed time, negative when the interval is inverted.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Returns true if `end` is not after `start`.
    pub fn is_inverted(&self) -> bool {
        self.end <= self.start
    }
}

/// A stored work-time entry.
///
/// The entry references its employee by id only; the store keeps the
/// employee-to-entries index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTime {
    /// Sequential identifier assigned by the store.
    pub id: u64,
    /// The employee who worked this interval.
    pub employee_id: Uuid,
    /// The worked interval.
    pub interval: WorkInterval,
}

/// A work-time entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkTime {
    /// The employee who worked this interval.
    pub employee_id: Uuid,
    /// The worked interval.
    pub interval: WorkInterval,
}
