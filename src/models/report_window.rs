//! Report window model.
//!
//! This module contains the [`ReportWindow`] type describing the inclusive time
//! range a report covers, plus the calendar helpers used to build it.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::WorkInterval;

/// Whether a window covers one day or one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// A single calendar day.
    Day,
    /// A full calendar month.
    Month,
}

impl std::fmt::Display for WindowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowKind::Day => write!(f, "day"),
            WindowKind::Month => write!(f, "month"),
        }
    }
}

/// A closed time range `[start, end]` that a report covers.
///
/// Both ends are inclusive and `end` is the last whole second of the range
/// (`23:59:59`), so a day window is one second shorter than 24 hours.
///
/// # Example
///
/// ```
/// use worktime_engine::models::ReportWindow;
/// use chrono::NaiveDate;
///
/// let window = ReportWindow::month(2024, 2).unwrap();
/// assert_eq!(window.start.to_string(), "2024-02-01 00:00:00");
/// assert_eq!(window.end.to_string(), "2024-02-29 23:59:59");
///
/// let day = ReportWindow::day(NaiveDate::from_ymd_opt(2025, 4, 26).unwrap());
/// assert_eq!(day.end.to_string(), "2025-04-26 23:59:59");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    /// First instant covered by the window.
    pub start: NaiveDateTime,
    /// Last instant covered by the window.
    pub end: NaiveDateTime,
    /// Whether this is a daily or a monthly window.
    pub kind: WindowKind,
}

impl ReportWindow {
    /// Builds the window for a single day: `[date 00:00:00, date 23:59:59]`.
    pub fn day(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN);
        Self {
            start,
            end: start + Duration::days(1) - Duration::seconds(1),
            kind: WindowKind::Day,
        }
    }

    /// Builds the window for a calendar month.
    ///
    /// Returns `None` if `(year, month)` does not name a calendar month.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let days = days_in_month(year, month)?;
        let start = first.and_time(NaiveTime::MIN);
        Some(Self {
            start,
            end: start + Duration::days(i64::from(days)) - Duration::seconds(1),
            kind: WindowKind::Month,
        })
    }

    /// Returns true if `interval` intersects this window.
    ///
    /// Intervals that only touch the window at one instant count as overlapping.
    pub fn overlaps(&self, interval: &WorkInterval) -> bool {
        interval.start <= self.end && interval.end >= self.start
    }

    /// Returns the calendar date the window starts on.
    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }
}

/// Returns the number of days in a month of the proleptic Gregorian calendar.
///
/// Returns `None` if `month` is outside `1..=12` or the year is out of range.
///
/// # Example
///
/// ```
/// use worktime_engine::models::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), Some(29));
/// assert_eq!(days_in_month(2025, 2), Some(28));
/// assert_eq!(days_in_month(2025, 13), None);
/// ```
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from((next - first).num_days()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_day_window_bounds() {
        let window = ReportWindow::day(NaiveDate::from_ymd_opt(2025, 4, 26).unwrap());

        assert_eq!(window.start, make_datetime("2025-04-26", "00:00:00"));
        assert_eq!(window.end, make_datetime("2025-04-26", "23:59:59"));
        assert_eq!(window.kind, WindowKind::Day);
    }

    #[test]
    fn test_month_window_bounds_april() {
        let window = ReportWindow::month(2025, 4).unwrap();

        assert_eq!(window.start, make_datetime("2025-04-01", "00:00:00"));
        assert_eq!(window.end, make_datetime("2025-04-30", "23:59:59"));
        assert_eq!(window.kind, WindowKind::Month);
    }

    #[test]
    fn test_month_window_december_rolls_year() {
        let window = ReportWindow::month(2025, 12).unwrap();

        assert_eq!(window.end, make_datetime("2025-12-31", "23:59:59"));
    }

    #[test]
    fn test_month_window_leap_february() {
        assert_eq!(
            ReportWindow::month(2024, 2).unwrap().end,
            make_datetime("2024-02-29", "23:59:59")
        );
        assert_eq!(
            ReportWindow::month(2100, 2).unwrap().end,
            make_datetime("2100-02-28", "23:59:59")
        );
        assert_eq!(
            ReportWindow::month(2000, 2).unwrap().end,
            make_datetime("2000-02-29", "23:59:59")
        );
    }

    #[test]
    fn test_month_window_invalid_month() {
        assert!(ReportWindow::month(2025, 0).is_none());
        assert!(ReportWindow::month(2025, 13).is_none());
    }

    #[test]
    fn test_days_in_month_all_months_2025() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (index, days) in expected.iter().enumerate() {
            assert_eq!(days_in_month(2025, index as u32 + 1), Some(*days));
        }
    }

    #[test]
    fn test_overlaps_interval_inside() {
        let window = ReportWindow::day(NaiveDate::from_ymd_opt(2025, 4, 26).unwrap());
        let interval = WorkInterval::new(
            make_datetime("2025-04-26", "09:00:00"),
            make_datetime("2025-04-26", "17:00:00"),
        );

        assert!(window.overlaps(&interval));
    }

    #[test]
    fn test_overlaps_interval_spanning_window() {
        let window = ReportWindow::day(NaiveDate::from_ymd_opt(2025, 4, 26).unwrap());
        let interval = WorkInterval::new(
            make_datetime("2025-04-25", "20:00:00"),
            make_datetime("2025-04-27", "04:00:00"),
        );

        assert!(window.overlaps(&interval));
    }

    #[test]
    fn test_overlaps_interval_starting_before() {
        let window = ReportWindow::month(2025, 5).unwrap();
        let interval = WorkInterval::new(
            make_datetime("2025-04-30", "20:00:00"),
            make_datetime("2025-05-01", "04:00:00"),
        );

        assert!(window.overlaps(&interval));
    }

    #[test]
    fn test_does_not_overlap_interval_outside() {
        let window = ReportWindow::day(NaiveDate::from_ymd_opt(2025, 4, 26).unwrap());
        let interval = WorkInterval::new(
            make_datetime("2025-04-27", "09:00:00"),
            make_datetime("2025-04-27", "17:00:00"),
        );

        assert!(!window.overlaps(&interval));
    }

    #[test]
    fn test_first_day() {
        let window = ReportWindow::month(2025, 4).unwrap();
        assert_eq!(window.first_day(), NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    }

    #[test]
    fn test_window_kind_serialization() {
        assert_eq!(serde_json::to_string(&WindowKind::Day).unwrap(), "\"day\"");
        assert_eq!(serde_json::to_string(&WindowKind::Month).unwrap(), "\"month\"");
    }
}
