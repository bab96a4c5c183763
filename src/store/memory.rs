//! In-memory store backed by `HashMap`s behind a tokio `RwLock`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, NewWorkTime, ReportWindow, WorkTime};

use super::{EmployeeRepository, WorkTimeRepository};

#[derive(Debug, Default)]
struct Tables {
    employees: HashMap<Uuid, Employee>,
    // Entries per employee, in insertion order.
    work_times: HashMap<Uuid, Vec<WorkTime>>,
    next_work_time_id: u64,
}

impl Tables {
    fn starting_on(&self, employee_id: Uuid, date: NaiveDate) -> impl Iterator<Item = &WorkTime> {
        self.work_times
            .get(&employee_id)
            .into_iter()
            .flatten()
            .filter(move |e| e.interval.start.date() == date)
    }
}

/// In-memory implementation of both repositories.
///
/// Cloning is cheap and every clone shares the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryStore {
    async fn insert_employee(&self, employee: Employee) -> EngineResult<Employee> {
        let mut tables = self.tables.write().await;
        tables.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn find_employee(&self, id: Uuid) -> EngineResult<Option<Employee>> {
        let tables = self.tables.read().await;
        Ok(tables.employees.get(&id).cloned())
    }
}

#[async_trait]
impl WorkTimeRepository for InMemoryStore {
    async fn insert_work_time(&self, work_time: NewWorkTime) -> EngineResult<WorkTime> {
        let mut tables = self.tables.write().await;

        if !tables.employees.contains_key(&work_time.employee_id) {
            return Err(EngineError::EmployeeNotFound {
                id: work_time.employee_id,
            });
        }

        let date = work_time.interval.start.date();
        if tables.starting_on(work_time.employee_id, date).next().is_some() {
            return Err(EngineError::DuplicateWorkTime {
                employee_id: work_time.employee_id,
                date,
            });
        }

        tables.next_work_time_id += 1;
        let stored = WorkTime {
            id: tables.next_work_time_id,
            employee_id: work_time.employee_id,
            interval: work_time.interval,
        };
        tables
            .work_times
            .entry(stored.employee_id)
            .or_default()
            .push(stored.clone());
        Ok(stored)
    }

    async fn find_starting_on(
        &self,
        employee_id: Uuid,
        date: NaiveDate,
    ) -> EngineResult<Vec<WorkTime>> {
        let tables = self.tables.read().await;
        Ok(tables.starting_on(employee_id, date).cloned().collect())
    }

    async fn find_overlapping(
        &self,
        employee_id: Uuid,
        window: &ReportWindow,
    ) -> EngineResult<Vec<WorkTime>> {
        let tables = self.tables.read().await;
        Ok(tables
            .work_times
            .get(&employee_id)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| window.overlaps(&e.interval))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
