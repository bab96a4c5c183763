//! Monthly overtime split.
//!
//! Hours up to the monthly limit are normal hours; anything beyond is overtime.
//! Daily reports do not use this split.

use rust_decimal::Decimal;

use crate::models::HourTally;

/// Splits a month's total hours into normal and overtime portions.
///
/// Negative totals are clamped to zero.
///
/// # Examples
///
/// ```
/// use worktime_engine::calculation::split_monthly_overtime;
/// use rust_decimal::Decimal;
///
/// let tally = split_monthly_overtime(Decimal::from(168), Decimal::from(160));
/// assert_eq!(tally.normal_hours, Decimal::from(160));
/// assert_eq!(tally.overtime_hours, Decimal::from(8));
///
/// let tally = split_monthly_overtime(Decimal::from(16), Decimal::from(160));
/// assert_eq!(tally.normal_hours, Decimal::from(16));
/// assert_eq!(tally.overtime_hours, Decimal::ZERO);
/// ```
pub fn split_monthly_overtime(total_hours: Decimal, monthly_hour_limit: Decimal) -> HourTally {
    let total_hours = total_hours.max(Decimal::ZERO);
    let limit = monthly_hour_limit.max(Decimal::ZERO);

    HourTally {
        normal_hours: total_hours.min(limit),
        overtime_hours: (total_hours - limit).max(Decimal::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_over_limit() {
        let tally = split_monthly_overtime(dec("168"), dec("160"));
        assert_eq!(tally.normal_hours, dec("160"));
        assert_eq!(tally.overtime_hours, dec("8"));
    }

    #[test]
    fn test_exactly_at_limit() {
        let tally = split_monthly_overtime(dec("160"), dec("160"));
        assert_eq!(tally.normal_hours, dec("160"));
        assert_eq!(tally.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_under_limit() {
        let tally = split_monthly_overtime(dec("36"), dec("160"));
        assert_eq!(tally.normal_hours, dec("36"));
        assert_eq!(tally.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_half_hour_over_limit() {
        let tally = split_monthly_overtime(dec("160.5"), dec("160"));
        assert_eq!(tally.normal_hours, dec("160"));
        assert_eq!(tally.overtime_hours, dec("0.5"));
    }

    #[test]
    fn test_zero_limit_makes_everything_overtime() {
        let tally = split_monthly_overtime(dec("12"), Decimal::ZERO);
        assert_eq!(tally.normal_hours, Decimal::ZERO);
        assert_eq!(tally.overtime_hours, dec("12"));
    }

    #[test]
    fn test_negative_total_is_clamped() {
        let tally = split_monthly_overtime(dec("-4"), dec("160"));
        assert_eq!(tally.normal_hours, Decimal::ZERO);
        assert_eq!(tally.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_split_preserves_total() {
        let tally = split_monthly_overtime(dec("171.5"), dec("160"));
        assert_eq!(tally.total_hours(), dec("171.5"));
    }
}
