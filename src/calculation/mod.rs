//! Calculation logic for the work-time engine.
//!
//! This module contains the pure report pipeline: half-hour rounding of
//! worked durations, clipping intervals to a report window and summing them,
//! the monthly overtime split, and turning hours into pay.

mod aggregator;
mod overtime;
mod pay;
mod report;
mod rounding;

pub use aggregator::{ClippedSpan, aggregate_hours, clip_to_window};
pub use overtime::split_monthly_overtime;
pub use pay::{calculate_pay, overtime_rate};
pub use report::{compute_daily_report, compute_monthly_report, compute_window_report};
pub use rounding::{HALF_HOUR, ROUND_DOWN_BELOW_MINUTES, ROUND_UP_FROM_MINUTES, round_to_half_hour};
