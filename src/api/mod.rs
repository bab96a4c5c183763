//! HTTP API module for the work-time engine.
//!
//! This module provides the REST endpoints for registering employees,
//! recording work time and fetching daily and monthly pay reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateEmployeeRequest, CreateWorkTimeRequest, FieldErrors};
pub use response::{ApiError, EmployeeResponse, ReportResponse, WorkTimeResponse};
pub use state::AppState;
