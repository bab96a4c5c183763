//! Half-hour rounding of worked durations.
//!
//! A duration is reduced to whole elapsed hours plus the whole minutes past the
//! last full hour; seconds are discarded before the minute remainder is
//! classified.

use chrono::Duration;
use rust_decimal::Decimal;

/// Half an hour as a decimal hour count.
pub const HALF_HOUR: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Remainders below this many minutes are dropped.
pub const ROUND_DOWN_BELOW_MINUTES: i64 = 15;

/// Remainders at or above this many minutes round up to the next full hour.
pub const ROUND_UP_FROM_MINUTES: i64 = 45;

/// Rounds a duration to whole or half hours.
///
/// | remainder minutes | result               |
/// |-------------------|----------------------|
/// | 0–14              | whole hours          |
/// | 15–44             | whole hours + 0.5    |
/// | 45–59             | whole hours + 1.0    |
///
/// Zero and negative durations round to zero.
///
/// # Examples
///
/// ```
/// use worktime_engine::calculation::round_to_half_hour;
/// use chrono::Duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_to_half_hour(Duration::hours(8)), Decimal::from(8));
/// assert_eq!(round_to_half_hour(Duration::minutes(8 * 60 + 30)), Decimal::new(85, 1));
/// assert_eq!(round_to_half_hour(Duration::minutes(8 * 60 + 45)), Decimal::from(9));
/// ```
pub fn round_to_half_hour(elapsed: Duration) -> Decimal {
    if elapsed <= Duration::zero() {
        return Decimal::ZERO;
    }

    let whole_hours = elapsed.num_hours();
    let remainder_minutes = (elapsed - Duration::hours(whole_hours)).num_minutes();
    let hours = Decimal::from(whole_hours);

    if remainder_minutes < ROUND_DOWN_BELOW_MINUTES {
        hours
    } else if remainder_minutes < ROUND_UP_FROM_MINUTES {
        hours + HALF_HOUR
    } else {
        hours + Decimal::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn hm(hours: i64, minutes: i64) -> Duration {
        Duration::hours(hours) + Duration::minutes(minutes)
    }

    #[test]
    fn test_exact_hours() {
        assert_eq!(round_to_half_hour(hm(8, 0)), dec("8"));
    }

    #[test]
    fn test_fourteen_minutes_fifty_nine_seconds_rounds_down() {
        let elapsed = hm(8, 14) + Duration::seconds(59);
        assert_eq!(round_to_half_hour(elapsed), dec("8"));
    }

    #[test]
    fn test_fifteen_minutes_adds_half_hour() {
        assert_eq!(round_to_half_hour(hm(8, 15)), dec("8.5"));
    }

    #[test]
    fn test_thirty_minutes_adds_half_hour() {
        assert_eq!(round_to_half_hour(hm(8, 30)), dec("8.5"));
    }

    #[test]
    fn test_forty_four_minutes_adds_half_hour() {
        let elapsed = hm(8, 44) + Duration::seconds(59);
        assert_eq!(round_to_half_hour(elapsed), dec("8.5"));
    }

    #[test]
    fn test_forty_five_minutes_rounds_up() {
        assert_eq!(round_to_half_hour(hm(8, 45)), dec("9"));
    }

    #[test]
    fn test_fifty_nine_minutes_rounds_up() {
        assert_eq!(round_to_half_hour(hm(3, 59) + Duration::seconds(59)), dec("4"));
    }

    #[test]
    fn test_sub_quarter_hour_is_zero() {
        assert_eq!(round_to_half_hour(Duration::minutes(14)), Decimal::ZERO);
    }

    #[test]
    fn test_multi_day_duration() {
        assert_eq!(round_to_half_hour(hm(36, 0)), dec("36"));
        assert_eq!(round_to_half_hour(hm(49, 20)), dec("49.5"));
    }

    #[test]
    fn test_zero_and_negative_durations() {
        assert_eq!(round_to_half_hour(Duration::zero()), Decimal::ZERO);
        assert_eq!(round_to_half_hour(Duration::hours(-3)), Decimal::ZERO);
    }

    #[test]
    fn test_half_hour_constant() {
        assert_eq!(HALF_HOUR, dec("0.5"));
    }
}
