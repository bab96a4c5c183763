//! Storage seams for employees and work-time entries.
//!
//! The calculation core never touches storage; handlers fetch intervals
//! through these traits and pass them in.

mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Employee, NewWorkTime, ReportWindow, WorkTime};

pub use memory::InMemoryStore;

/// Repository trait for employee records.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Stores a new employee.
    async fn insert_employee(&self, employee: Employee) -> EngineResult<Employee>;

    /// Looks up an employee by id.
    async fn find_employee(&self, id: Uuid) -> EngineResult<Option<Employee>>;
}

/// Repository trait for work-time entries.
#[async_trait]
pub trait WorkTimeRepository: Send + Sync {
    /// Stores a new entry and assigns its id.
    ///
    /// Returns [`crate::error::EngineError::DuplicateWorkTime`] if the employee
    /// already has an entry starting on the same day.
    async fn insert_work_time(&self, work_time: NewWorkTime) -> EngineResult<WorkTime>;

    /// Returns the employee's entries whose start falls on `date`.
    async fn find_starting_on(
        &self,
        employee_id: Uuid,
        date: NaiveDate,
    ) -> EngineResult<Vec<WorkTime>>;

    /// Returns the employee's entries that intersect `window`.
    async fn find_overlapping(
        &self,
        employee_id: Uuid,
        window: &ReportWindow,
    ) -> EngineResult<Vec<WorkTime>>;
}
