//! Configuration types for work-time reporting.
//!
//! These structures are deserialized from `time_management.yaml`.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Rates and thresholds that drive pay calculation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PayConfig {
    /// Currency unit attached to money values for display (e.g., "PLN").
    pub currency: String,
    /// Hourly rate paid for normal hours.
    pub default_hourly_rate: Decimal,
    /// Hours per calendar month paid at the normal rate before overtime starts.
    pub monthly_hour_limit: u32,
    /// Overtime rate as a percentage of the hourly rate (150 means 150%).
    pub overtime_rate_percent: Decimal,
}

impl PayConfig {
    /// Returns the monthly hour limit as a decimal hour count.
    pub fn monthly_hour_limit_hours(&self) -> Decimal {
        Decimal::from(self.monthly_hour_limit)
    }
}

/// Rules applied when recording a work-time entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkTimeRules {
    /// Longest accepted entry, in whole hours.
    pub max_hours: u32,
}

/// Accepted range of years for report requests.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportRules {
    /// Earliest year a report can be requested for.
    pub min_year: i32,
    /// Latest year a report can be requested for.
    pub max_year: i32,
}

/// The complete configuration loaded from `time_management.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeManagementConfig {
    /// Pay settings.
    pub pay: PayConfig,
    /// Work-time entry rules.
    pub work_time: WorkTimeRules,
    /// Report request rules.
    pub reports: ReportRules,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let yaml = r#"
pay:
  currency: PLN
  default_hourly_rate: 50
  monthly_hour_limit: 160
  overtime_rate_percent: 150
work_time:
  max_hours: 12
reports:
  min_year: 2000
  max_year: 2100
"#;

        let config: TimeManagementConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.pay.currency, "PLN");
        assert_eq!(config.pay.default_hourly_rate, Decimal::from(50));
        assert_eq!(config.pay.monthly_hour_limit, 160);
        assert_eq!(config.pay.overtime_rate_percent, Decimal::from(150));
        assert_eq!(config.work_time.max_hours, 12);
        assert_eq!(config.reports.min_year, 2000);
        assert_eq!(config.reports.max_year, 2100);
    }

    #[test]
    fn test_fractional_rate_is_exact() {
        let yaml = r#"
currency: EUR
default_hourly_rate: "28.54"
monthly_hour_limit: 152
overtime_rate_percent: 175
"#;

        let pay: PayConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(pay.default_hourly_rate, Decimal::new(2854, 2));
    }

    #[test]
    fn test_missing_section_fails() {
        let yaml = r#"
pay:
  currency: PLN
  default_hourly_rate: 50
  monthly_hour_limit: 160
  overtime_rate_percent: 150
"#;

        let result: Result<TimeManagementConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_monthly_hour_limit_hours() {
        let pay = PayConfig {
            currency: "PLN".to_string(),
            default_hourly_rate: Decimal::from(50),
            monthly_hour_limit: 160,
            overtime_rate_percent: Decimal::from(150),
        };
        assert_eq!(pay.monthly_hour_limit_hours(), Decimal::from(160));
    }
}
