//! HTTP request handlers for the work-time API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_daily_report, compute_monthly_report};
use crate::config::ReportRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{ReportWindow, WorkInterval, days_in_month};

use super::request::{CreateEmployeeRequest, CreateWorkTimeRequest, FieldErrors};
use super::response::{
    ApiError, ApiErrorResponse, EmployeeResponse, ReportResponse, WorkTimeResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(create_employee_handler))
        .route("/work-times", post(create_work_time_handler))
        .route(
            "/reports/daily/:employee_id/:year/:month/:day",
            get(daily_report_handler),
        )
        .route(
            "/reports/monthly/:employee_id/:year/:month",
            get(monthly_report_handler),
        )
        .with_state(state)
}

type HandlerResult = Result<Response, ApiErrorResponse>;

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let request = parse_body(payload, correlation_id)?;
    let employee = request.validate().map_err(|fields| {
        warn!(correlation_id = %correlation_id, fields = ?fields, "Employee validation failed");
        ApiErrorResponse::validation(fields)
    })?;

    let employee = state
        .employees()
        .insert_employee(employee)
        .await
        .map_err(|err| log_failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        "Employee created"
    );
    Ok(json_response(StatusCode::CREATED, EmployeeResponse::from(employee)))
}

/// Handler for POST /work-times.
async fn create_work_time_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateWorkTimeRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create work time request");

    let request = parse_body(payload, correlation_id)?;
    let new_work_time = request
        .validate(state.config().work_time())
        .map_err(|fields| {
            warn!(correlation_id = %correlation_id, fields = ?fields, "Work time validation failed");
            ApiErrorResponse::validation(fields)
        })?;

    let work_time = state
        .work_times()
        .insert_work_time(new_work_time)
        .await
        .map_err(|err| log_failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %work_time.employee_id,
        work_time_id = work_time.id,
        "Work time recorded"
    );
    Ok(json_response(StatusCode::CREATED, WorkTimeResponse::from(&work_time)))
}

/// Handler for GET /reports/daily/:employee_id/:year/:month/:day.
async fn daily_report_handler(
    State(state): State<AppState>,
    Path((employee_id, year, month, day)): Path<(String, String, String, String)>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily report request");
    let start_time = Instant::now();

    let employee_id = parse_employee_id(&employee_id)?;
    let date = parse_report_date(state.config().reports(), &year, &month, Some(&day))
        .map_err(|err| log_failure(correlation_id, err))?;
    ensure_employee(&state, employee_id)
        .await
        .map_err(|err| log_failure(correlation_id, err))?;

    let window = ReportWindow::day(date);
    let intervals = load_intervals(&state, employee_id, &window)
        .await
        .map_err(|err| log_failure(correlation_id, err))?;
    let breakdown = compute_daily_report(&intervals, date, state.config().pay());

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        date = %date,
        entries = intervals.len(),
        total_pay = %breakdown.total_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Daily report computed"
    );
    Ok(json_response(StatusCode::OK, ReportResponse::from(&breakdown)))
}

/// Handler for GET /reports/monthly/:employee_id/:year/:month.
async fn monthly_report_handler(
    State(state): State<AppState>,
    Path((employee_id, year, month)): Path<(String, String, String)>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly report request");
    let start_time = Instant::now();

    let employee_id = parse_employee_id(&employee_id)?;
    let first_day = parse_report_date(state.config().reports(), &year, &month, None)
        .map_err(|err| log_failure(correlation_id, err))?;
    ensure_employee(&state, employee_id)
        .await
        .map_err(|err| log_failure(correlation_id, err))?;

    let (year, month) = (first_day.year(), first_day.month());
    let window = ReportWindow::month(year, month).ok_or_else(|| EngineError::InvalidReportDate {
        message: format!("{}-{:02} is not a calendar month", year, month),
    })?;
    let intervals = load_intervals(&state, employee_id, &window)
        .await
        .map_err(|err| log_failure(correlation_id, err))?;
    let breakdown = compute_monthly_report(&intervals, year, month, state.config().pay())
        .map_err(|err| log_failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        year,
        month,
        entries = intervals.len(),
        overtime_hours = %breakdown.overtime_hours,
        total_pay = %breakdown.total_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Monthly report computed"
    );
    Ok(json_response(StatusCode::OK, ReportResponse::from(&breakdown)))
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn log_failure(correlation_id: Uuid, err: EngineError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    err.into()
}

fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse::bad_request(error))
        }
    }
}

fn parse_employee_id(raw: &str) -> Result<Uuid, ApiErrorResponse> {
    Uuid::parse_str(raw).map_err(|_| {
        ApiErrorResponse::validation(FieldErrors::from([(
            "employee_id".to_string(),
            "This is not a valid UUID.".to_string(),
        )]))
    })
}

/// Parses and range-checks a report date.
///
/// With `day` absent, returns the first day of the month.
fn parse_report_date(
    rules: &ReportRules,
    year: &str,
    month: &str,
    day: Option<&str>,
) -> EngineResult<NaiveDate> {
    let invalid = |message: String| EngineError::InvalidReportDate { message };

    let year: i32 = year
        .parse()
        .ok()
        .filter(|y| (rules.min_year..=rules.max_year).contains(y))
        .ok_or_else(|| {
            invalid(format!(
                "Year must be between {} and {}",
                rules.min_year, rules.max_year
            ))
        })?;
    let month: u32 = month
        .parse()
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| invalid("Month must be between 1 and 12".to_string()))?;
    let days = days_in_month(year, month)
        .ok_or_else(|| invalid(format!("{}-{:02} is not a calendar month", year, month)))?;

    let day: u32 = match day {
        None => 1,
        Some(day) => day
            .parse()
            .ok()
            .filter(|d| (1..=days).contains(d))
            .ok_or_else(|| invalid(format!("Day must be between 1 and {}", days)))?,
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid(format!("{}-{:02}-{:02} is not a valid date", year, month, day)))
}

async fn ensure_employee(state: &AppState, employee_id: Uuid) -> EngineResult<()> {
    match state.employees().find_employee(employee_id).await? {
        Some(_) => Ok(()),
        None => Err(EngineError::EmployeeNotFound { id: employee_id }),
    }
}

async fn load_intervals(
    state: &AppState,
    employee_id: Uuid,
    window: &ReportWindow,
) -> EngineResult<Vec<WorkInterval>> {
    let entries = state.work_times().find_overlapping(employee_id, window).await?;
    Ok(entries.into_iter().map(|entry| entry.interval).collect())
}
