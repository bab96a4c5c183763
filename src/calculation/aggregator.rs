//! Interval clipping and hour aggregation.
//!
//! This module turns a set of work intervals and a report window into a single
//! rounded hour total. Each interval is clipped to the window and rounded on
//! its own before the results are summed.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ReportWindow, WorkInterval};

use super::rounding::round_to_half_hour;

/// The part of an interval that lies inside a report window.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::clip_to_window;
/// use worktime_engine::models::{ReportWindow, WorkInterval};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let interval = WorkInterval::new(
///     NaiveDateTime::parse_from_str("2025-04-30 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2025-05-01 04:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// );
/// let window = ReportWindow::month(2025, 5).unwrap();
///
/// let clipped = clip_to_window(&interval, &window);
/// assert_eq!(clipped.start.to_string(), "2025-05-01 00:00:00");
/// assert_eq!(clipped.hours, Decimal::from(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClippedSpan {
    /// `max(interval.start, window.start)`.
    pub start: NaiveDateTime,
    /// `min(interval.end, window.end)`.
    pub end: NaiveDateTime,
    /// Rounded hours inside the window; zero when the clip is empty or inverted.
    pub hours: Decimal,
}

impl ClippedSpan {
    /// Elapsed time inside the window, never negative.
    pub fn elapsed(&self) -> Duration {
        if self.end > self.start {
            self.end - self.start
        } else {
            Duration::zero()
        }
    }
}

/// Clips an interval to a window and rounds the remaining span.
///
/// Intervals that miss the window entirely, or are inverted, produce a span
/// whose `hours` is zero.
pub fn clip_to_window(interval: &WorkInterval, window: &ReportWindow) -> ClippedSpan {
    let start = interval.start.max(window.start);
    let end = interval.end.min(window.end);

    let hours = if end > start {
        round_to_half_hour(end - start)
    } else {
        Decimal::ZERO
    };

    ClippedSpan { start, end, hours }
}

/// Sums the rounded hours of every interval inside the window.
///
/// The caller is expected to pass intervals that overlap the window; any that
/// do not simply contribute nothing.
///
/// # Examples
///
/// ```
/// use worktime_engine::calculation::aggregate_hours;
/// use worktime_engine::models::{ReportWindow, WorkInterval};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let intervals = vec![
///     WorkInterval::new(at("2025-04-26 09:00:00"), at("2025-04-26 12:00:00")),
///     WorkInterval::new(at("2025-04-26 13:00:00"), at("2025-04-26 17:30:00")),
/// ];
/// let window = ReportWindow::day(NaiveDate::from_ymd_opt(2025, 4, 26).unwrap());
///
/// assert_eq!(aggregate_hours(&intervals, &window), Decimal::new(75, 1));
/// ```
pub fn aggregate_hours(intervals: &[WorkInterval], window: &ReportWindow) -> Decimal {
    intervals
        .iter()
        .map(|interval| clip_to_window(interval, window).hours)
        .sum()
}
