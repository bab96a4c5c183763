//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading time-management
//! settings from a YAML file and validating them before any report runs.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PayConfig, ReportRules, TimeManagementConfig, WorkTimeRules};

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "time_management.yaml";

/// Loads, validates and provides access to time-management configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── time_management.yaml   # Pay rates, overtime threshold, validation rules
/// ```
///
/// # Example
///
/// ```no_run
/// use worktime_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Hourly rate: {} {}", loader.pay().default_hourly_rate, loader.pay().currency);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TimeManagementConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if the file is missing, is not valid YAML, lacks a
    /// required field, or holds a value that fails validation.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use worktime_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// # Ok::<(), worktime_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<TimeManagementConfig>(&config_path)?;
        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: TimeManagementConfig) -> EngineResult<Self> {
        validate_pay(&config.pay)?;
        validate_work_time(&config.work_time)?;
        validate_reports(&config.reports)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &TimeManagementConfig {
        &self.config
    }

    /// Returns the pay settings.
    pub fn pay(&self) -> &PayConfig {
        &self.config.pay
    }

    /// Returns the work-time entry rules.
    pub fn work_time(&self) -> &WorkTimeRules {
        &self.config.work_time
    }

    /// Returns the report request rules.
    pub fn reports(&self) -> &ReportRules {
        &self.config.reports
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn validate_pay(pay: &PayConfig) -> EngineResult<()> {
    if pay.currency.trim().is_empty() {
        return Err(invalid("pay.currency", "must not be blank"));
    }
    if pay.default_hourly_rate < Decimal::ZERO {
        return Err(invalid("pay.default_hourly_rate", "must not be negative"));
    }
    if pay.overtime_rate_percent < Decimal::ZERO {
        return Err(invalid("pay.overtime_rate_percent", "must not be negative"));
    }
    Ok(())
}

fn validate_work_time(rules: &WorkTimeRules) -> EngineResult<()> {
    if rules.max_hours == 0 {
        return Err(invalid("work_time.max_hours", "must be greater than zero"));
    }
    Ok(())
}

fn validate_reports(rules: &ReportRules) -> EngineResult<()> {
    if rules.min_year > rules.max_year {
        return Err(invalid(
            "reports.min_year",
            "must not be later than reports.max_year",
        ));
    }
    Ok(())
}
