//! Error types for the work-time engine.
//!
//! The calculation core itself never fails on bad records; these errors cover
//! configuration loading, request validation and store lookups around it.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the work-time engine.
///
/// # Example
///
/// ```
/// use worktime_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/time_management.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/time_management.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot work with.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration key.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A report was requested for a date that does not exist or is out of range.
    #[error("Invalid report date: {message}")]
    InvalidReportDate {
        /// A description of what made the date invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A work-time entry was invalid or contained inconsistent data.
    #[error("Invalid work time field '{field}': {message}")]
    InvalidWorkTime {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// The employee already has a work-time entry starting on that day.
    #[error("Employee '{employee_id}' already has a work time entry for {date}")]
    DuplicateWorkTime {
        /// The employee the entry belongs to.
        employee_id: Uuid,
        /// The day the existing entry starts on.
        date: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
