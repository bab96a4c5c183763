//! Daily and monthly report entry points.
//!
//! These combine window construction, aggregation, the monthly overtime split
//! and pay computation. They are pure: the caller fetches the intervals and
//! passes them in.

use chrono::NaiveDate;

use crate::config::PayConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{HourTally, PayBreakdown, ReportWindow, WindowKind, WorkInterval};

use super::aggregator::aggregate_hours;
use super::overtime::split_monthly_overtime;
use super::pay::calculate_pay;

/// Computes the pay breakdown for one day.
///
/// All hours inside `[date 00:00:00, date 23:59:59]` are normal hours; daily
/// reports never produce overtime.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::compute_daily_report;
/// use worktime_engine::config::PayConfig;
/// use worktime_engine::models::WorkInterval;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let config = PayConfig {
///     currency: "PLN".to_string(),
///     default_hourly_rate: Decimal::from(50),
///     monthly_hour_limit: 160,
///     overtime_rate_percent: Decimal::from(150),
/// };
/// let intervals = [WorkInterval::new(at("2025-04-26 09:00:00"), at("2025-04-26 17:30:00"))];
///
/// let report = compute_daily_report(&intervals, NaiveDate::from_ymd_opt(2025, 4, 26).unwrap(), &config);
/// assert_eq!(report.normal_hours, Decimal::new(85, 1));
/// assert_eq!(report.total_pay, Decimal::from(425));
/// ```
pub fn compute_daily_report(
    intervals: &[WorkInterval],
    date: NaiveDate,
    config: &PayConfig,
) -> PayBreakdown {
    let window = ReportWindow::day(date);
    let total_hours = aggregate_hours(intervals, &window);
    calculate_pay(HourTally::normal_only(total_hours), config)
}

/// Computes the pay breakdown for a calendar month.
///
/// Hours beyond `config.monthly_hour_limit` are paid as overtime.
///
/// # Errors
///
/// Returns [`EngineError::InvalidReportDate`] if `(year, month)` does not name a
/// calendar month.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::compute_monthly_report;
/// use worktime_engine::config::PayConfig;
/// use worktime_engine::models::WorkInterval;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let config = PayConfig {
///     currency: "PLN".to_string(),
///     default_hourly_rate: Decimal::from(50),
///     monthly_hour_limit: 160,
///     overtime_rate_percent: Decimal::from(150),
/// };
/// let intervals = [WorkInterval::new(at("2025-04-30 20:00:00"), at("2025-05-01 04:00:00"))];
///
/// let april = compute_monthly_report(&intervals, 2025, 4, &config)?;
/// let may = compute_monthly_report(&intervals, 2025, 5, &config)?;
/// assert_eq!(april.normal_hours, Decimal::from(4));
/// assert_eq!(may.normal_hours, Decimal::from(4));
/// # Ok::<(), worktime_engine::error::EngineError>(())
/// ```
pub fn compute_monthly_report(
    intervals: &[WorkInterval],
    year: i32,
    month: u32,
    config: &PayConfig,
) -> EngineResult<PayBreakdown> {
    let window = ReportWindow::month(year, month).ok_or_else(|| EngineError::InvalidReportDate {
        message: format!("{}-{:02} is not a calendar month", year, month),
    })?;
    Ok(compute_window_report(intervals, &window, config))
}

/// Computes the pay breakdown for an already-built window.
///
/// Monthly windows apply the overtime split; daily windows do not.
pub fn compute_window_report(
    intervals: &[WorkInterval],
    window: &ReportWindow,
    config: &PayConfig,
) -> PayBreakdown {
    let total_hours = aggregate_hours(intervals, window);
    let tally = match window.kind {
        WindowKind::Day => HourTally::normal_only(total_hours),
        WindowKind::Month => {
            split_monthly_overtime(total_hours, config.monthly_hour_limit_hours())
        }
    };
    calculate_pay(tally, config)
}
