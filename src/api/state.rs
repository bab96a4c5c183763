//! Application state for the work-time API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::{EmployeeRepository, InMemoryStore, WorkTimeRepository};

/// Shared application state.
///
/// Contains the loaded configuration and the repositories handlers read
/// and write through.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    employees: Arc<dyn EmployeeRepository>,
    work_times: Arc<dyn WorkTimeRepository>,
}

impl AppState {
    /// Creates application state backed by a fresh in-memory store.
    pub fn new(config: ConfigLoader) -> Self {
        let store = InMemoryStore::new();
        Self::with_repositories(config, Arc::new(store.clone()), Arc::new(store))
    }

    /// Creates application state over the given repositories.
    pub fn with_repositories(
        config: ConfigLoader,
        employees: Arc<dyn EmployeeRepository>,
        work_times: Arc<dyn WorkTimeRepository>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            employees,
            work_times,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the employee repository.
    pub fn employees(&self) -> &dyn EmployeeRepository {
        self.employees.as_ref()
    }

    /// Returns the work-time repository.
    pub fn work_times(&self) -> &dyn WorkTimeRepository {
        self.work_times.as_ref()
    }
}
