//! Pay computation.
//!
//! Turns an [`HourTally`] into a [`PayBreakdown`] using the configured hourly
//! rate and overtime percentage.

use rust_decimal::Decimal;

use crate::config::PayConfig;
use crate::models::{HourTally, PayBreakdown};

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Derives the overtime hourly rate: `hourly_rate * overtime_rate_percent / 100`.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::overtime_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(overtime_rate(Decimal::from(50), Decimal::from(150)), Decimal::from(75));
/// ```
pub fn overtime_rate(hourly_rate: Decimal, overtime_rate_percent: Decimal) -> Decimal {
    hourly_rate * overtime_rate_percent / ONE_HUNDRED
}

/// Computes the pay breakdown for a tally of hours.
///
/// Negative hour values are a caller bug; they are clamped to zero so the
/// breakdown always stays non-negative.
///
/// # Examples
///
/// ```
/// use worktime_engine::calculation::calculate_pay;
/// use worktime_engine::config::PayConfig;
/// use worktime_engine::models::HourTally;
/// use rust_decimal::Decimal;
///
/// let config = PayConfig {
///     currency: "PLN".to_string(),
///     default_hourly_rate: Decimal::from(50),
///     monthly_hour_limit: 160,
///     overtime_rate_percent: Decimal::from(150),
/// };
/// let tally = HourTally {
///     normal_hours: Decimal::from(160),
///     overtime_hours: Decimal::from(8),
/// };
///
/// let breakdown = calculate_pay(tally, &config);
/// assert_eq!(breakdown.overtime_rate, Decimal::from(75));
/// assert_eq!(breakdown.total_pay, Decimal::from(8600));
/// ```
pub fn calculate_pay(tally: HourTally, config: &PayConfig) -> PayBreakdown {
    let normal_hours = tally.normal_hours.max(Decimal::ZERO);
    let overtime_hours = tally.overtime_hours.max(Decimal::ZERO);

    let rate = config.default_hourly_rate;
    let overtime_rate = overtime_rate(rate, config.overtime_rate_percent);
    let total_pay = normal_hours * rate + overtime_hours * overtime_rate;

    PayBreakdown {
        normal_hours,
        rate,
        overtime_hours,
        overtime_rate,
        total_pay,
        currency: config.currency.clone(),
    }
}
