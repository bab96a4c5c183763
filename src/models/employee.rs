//! Employee model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee whose work time is recorded.
///
/// Work-time entries point at an employee through `id`; the employee holds no
/// references back to its entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// First name.
    pub name: String,
    /// Last name.
    pub last_name: String,
}

impl Employee {
    /// Creates an employee with a fresh random id.
    pub fn new(name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            last_name: last_name.into(),
        }
    }
}
