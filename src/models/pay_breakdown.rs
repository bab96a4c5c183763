//! Hour tally and pay breakdown models.
//!
//! Both are derived per report and never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours for a report window split into normal and overtime portions.
///
/// # Example
///
/// ```
/// use worktime_engine::models::HourTally;
/// use rust_decimal::Decimal;
///
/// let tally = HourTally::normal_only(Decimal::new(85, 1));
/// assert_eq!(tally.overtime_hours, Decimal::ZERO);
/// assert_eq!(tally.total_hours(), Decimal::new(85, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourTally {
    /// Hours paid at the normal rate.
    pub normal_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
}

impl HourTally {
    /// A tally with no overtime.
    pub fn normal_only(hours: Decimal) -> Self {
        Self {
            normal_hours: hours,
            overtime_hours: Decimal::ZERO,
        }
    }

    /// Sum of normal and overtime hours.
    pub fn total_hours(&self) -> Decimal {
        self.normal_hours + self.overtime_hours
    }
}

/// The pay outcome of a report.
///
/// Rates are currency amounts per hour. The currency unit is kept alongside
/// the numeric values instead of being baked into them.
///
/// # Example
///
/// ```
/// use worktime_engine::models::PayBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PayBreakdown {
///     normal_hours: Decimal::from(160),
///     rate: Decimal::from(50),
///     overtime_hours: Decimal::from(8),
///     overtime_rate: Decimal::from(75),
///     total_pay: Decimal::from(8600),
///     currency: "PLN".to_string(),
/// };
/// assert_eq!(breakdown.display_amount(breakdown.total_pay), "8600 PLN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Hours paid at the normal rate.
    pub normal_hours: Decimal,
    /// Normal hourly rate.
    pub rate: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Overtime hourly rate.
    pub overtime_rate: Decimal,
    /// `normal_hours * rate + overtime_hours * overtime_rate`.
    pub total_pay: Decimal,
    /// Currency unit for `rate`, `overtime_rate` and `total_pay`.
    pub currency: String,
}

impl PayBreakdown {
    /// Formats an amount with this breakdown's currency, e.g. `"75 PLN"`.
    ///
    /// Trailing zeros are dropped so `75.00` renders as `75`.
    pub fn display_amount(&self, amount: Decimal) -> String {
        format!("{} {}", amount.normalize(), self.currency)
    }

    /// Normal-hour pay component.
    pub fn normal_pay(&self) -> Decimal {
        self.normal_hours * self.rate
    }

    /// Overtime pay component.
    pub fn overtime_pay(&self) -> Decimal {
        self.overtime_hours * self.overtime_rate
    }
}
