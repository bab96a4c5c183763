//! Response types for the work-time API.
//!
//! This module defines the success bodies, the error body and the mapping
//! from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{Employee, PayBreakdown, WorkTime};

use super::request::FieldErrors;

/// Timestamp layout used in responses.
pub const RESPONSE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Per-field validation messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            fields: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error carrying every failing field.
    pub fn validation_failed(fields: FieldErrors) -> Self {
        Self {
            fields: Some(fields),
            ..Self::new("VALIDATION_ERROR", "Request validation failed")
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response for a set of field errors.
    pub fn validation(fields: FieldErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation_failed(fields),
        }
    }

    /// A 400 response with a plain error body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("{}: {}", field, message),
                ),
            },
            EngineError::InvalidReportDate { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_DATE", message),
            },
            EngineError::InvalidEmployee { field, message } => {
                ApiErrorResponse::validation(FieldErrors::from([(field, message)]))
            }
            EngineError::InvalidWorkTime { field, message } => {
                ApiErrorResponse::validation(FieldErrors::from([(field, message)]))
            }
            EngineError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", format!("Employee not found: {}", id)),
            },
            EngineError::DuplicateWorkTime { employee_id, date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DUPLICATE_WORK_TIME",
                    format!("Employee already has a work time entry for {}", date),
                    format!("employee_id: {}", employee_id),
                ),
            },
        }
    }
}

/// Response body for a created employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    /// Assigned id.
    pub id: Uuid,
    /// First name.
    pub name: String,
    /// Last name.
    pub last_name: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            last_name: employee.last_name,
        }
    }
}

/// Response body for a created work-time entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkTimeResponse {
    /// Assigned id.
    pub id: u64,
    /// The employee who worked.
    pub employee_id: Uuid,
    /// Start, formatted `YYYY-MM-DD HH:MM:SS`.
    pub time_start: String,
    /// End, formatted `YYYY-MM-DD HH:MM:SS`.
    pub time_end: String,
    /// Whole hours between start and end.
    pub hours_worked: i64,
}

impl From<&WorkTime> for WorkTimeResponse {
    fn from(work_time: &WorkTime) -> Self {
        Self {
            id: work_time.id,
            employee_id: work_time.employee_id,
            time_start: work_time
                .interval
                .start
                .format(RESPONSE_DATETIME_FORMAT)
                .to_string(),
            time_end: work_time
                .interval
                .end
                .format(RESPONSE_DATETIME_FORMAT)
                .to_string(),
            hours_worked: work_time.interval.duration().num_hours(),
        }
    }
}

/// Response body for daily and monthly reports.
///
/// Hour counts are decimals; money fields carry the currency unit
/// (`"50 PLN"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    /// Hours paid at the normal rate.
    pub normal_hours: Decimal,
    /// Normal hourly rate with currency.
    pub rate: String,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Overtime hourly rate with currency.
    pub overtime_rate: String,
    /// Total pay with currency.
    pub sum: String,
}

impl From<&PayBreakdown> for ReportResponse {
    fn from(breakdown: &PayBreakdown) -> Self {
        Self {
            normal_hours: breakdown.normal_hours.normalize(),
            rate: breakdown.display_amount(breakdown.rate),
            overtime_hours: breakdown.overtime_hours.normalize(),
            overtime_rate: breakdown.display_amount(breakdown.overtime_rate),
            sum: breakdown.display_amount(breakdown.total_pay),
        }
    }
}
