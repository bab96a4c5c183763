//! Request types for the work-time API.
//!
//! Bodies are deserialized leniently (every field is a string that may be
//! missing) and then validated, so that all field problems can be reported
//! together instead of failing on the first one.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::WorkTimeRules;
use crate::models::{Employee, NewWorkTime, WorkInterval};

/// Field name to error message, ordered by field name.
pub type FieldErrors = BTreeMap<String, String>;

/// Shortest accepted employee name.
pub const NAME_MIN_CHARS: usize = 2;

/// Longest accepted employee name.
pub const NAME_MAX_CHARS: usize = 255;

/// Accepted timestamp layouts for work-time entries.
pub const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// First name.
    #[serde(default)]
    pub name: String,
    /// Last name.
    #[serde(default, alias = "lastName")]
    pub last_name: String,
}

impl CreateEmployeeRequest {
    /// Validates the request and builds a new employee with a fresh id.
    pub fn validate(&self) -> Result<Employee, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_name(&mut errors, "name", &self.name);
        check_name(&mut errors, "last_name", &self.last_name);

        if errors.is_empty() {
            Ok(Employee::new(self.name.trim(), self.last_name.trim()))
        } else {
            Err(errors)
        }
    }
}

/// Request body for `POST /work-times`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateWorkTimeRequest {
    /// Id of the employee who worked.
    #[serde(default, alias = "employeeId")]
    pub employee_id: String,
    /// Start timestamp.
    #[serde(default, alias = "timeStart")]
    pub time_start: String,
    /// End timestamp.
    #[serde(default, alias = "timeEnd")]
    pub time_end: String,
}

impl CreateWorkTimeRequest {
    /// Validates the request against the work-time rules.
    ///
    /// The duplicate-day rule needs the store and is checked there.
    pub fn validate(&self, rules: &WorkTimeRules) -> Result<NewWorkTime, FieldErrors> {
        let mut errors = FieldErrors::new();

        let employee_id = match Uuid::parse_str(self.employee_id.trim()) {
            Ok(id) => Some(id),
            Err(_) => {
                let message = if self.employee_id.trim().is_empty() {
                    "This value should not be blank."
                } else {
                    "This is not a valid UUID."
                };
                errors.insert("employee_id".to_string(), message.to_string());
                None
            }
        };
        let start = parse_timestamp(&mut errors, "time_start", &self.time_start);
        let end = parse_timestamp(&mut errors, "time_end", &self.time_end);

        if let (Some(start), Some(end)) = (start, end) {
            let interval = WorkInterval::new(start, end);
            if interval.is_inverted() {
                errors.insert(
                    "time_end".to_string(),
                    "End time must be after start time.".to_string(),
                );
            } else if interval.duration().num_hours() > i64::from(rules.max_hours) {
                errors.insert(
                    "time_end".to_string(),
                    format!("Work time cannot exceed {} hours.", rules.max_hours),
                );
            }
        }

        match (employee_id, start, end) {
            (Some(employee_id), Some(start), Some(end)) if errors.is_empty() => Ok(NewWorkTime {
                employee_id,
                interval: WorkInterval::new(start, end),
            }),
            _ => Err(errors),
        }
    }
}

fn check_name(errors: &mut FieldErrors, field: &str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field.to_string(), "This value should not be blank.".to_string());
        return;
    }
    let chars = value.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        errors.insert(
            field.to_string(),
            format!(
                "Must be between {} and {} characters long.",
                NAME_MIN_CHARS, NAME_MAX_CHARS
            ),
        );
    }
}

fn parse_timestamp(errors: &mut FieldErrors, field: &str, value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field.to_string(), "This value should not be blank.".to_string());
        return None;
    }
    let parsed = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok());
    if parsed.is_none() {
        errors.insert(field.to_string(), "This value is not a valid datetime.".to_string());
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> WorkTimeRules {
        WorkTimeRules { max_hours: 12 }
    }

    fn work_time_request(start: &str, end: &str) -> CreateWorkTimeRequest {
        CreateWorkTimeRequest {
            employee_id: "12345678-1234-1234-1234-123456789012".to_string(),
            time_start: start.to_string(),
            time_end: end.to_string(),
        }
    }

    #[test]
    fn test_valid_employee_request() {
        let request = CreateEmployeeRequest {
            name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
        };

        let employee = request.validate().unwrap();
        assert_eq!(employee.name, "Jan");
        assert_eq!(employee.last_name, "Kowalski");
    }

    #[test]
    fn test_employee_errors_are_collected() {
        let request = CreateEmployeeRequest {
            name: "J".to_string(),
            last_name: String::new(),
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors["name"].contains("between 2 and 255"));
        assert_eq!(errors["last_name"], "This value should not be blank.");
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        let request = CreateEmployeeRequest {
            name: "Łó".to_string(),
            last_name: "Żak".to_string(),
        };
        assert!(request.validate().is_ok());

        let too_long = CreateEmployeeRequest {
            name: "a".repeat(256),
            last_name: "Nowak".to_string(),
        };
        assert!(too_long.validate().unwrap_err().contains_key("name"));
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let json = r#"{"name": "Anna", "lastName": "Nowak"}"#;
        let request: CreateEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.last_name, "Nowak");

        let json = r#"{
            "employeeId": "12345678-1234-1234-1234-123456789012",
            "timeStart": "2025-04-26 09:00:00",
            "timeEnd": "2025-04-26 17:00:00"
        }"#;
        let request: CreateWorkTimeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.time_end, "2025-04-26 17:00:00");
    }

    #[test]
    fn test_valid_work_time_accepts_both_layouts() {
        let new = work_time_request("2025-04-26T09:00:00", "2025-04-26 17:30:00")
            .validate(&rules())
            .unwrap();

        assert_eq!(new.interval.duration().num_minutes(), 510);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let errors = work_time_request("2025-04-26 17:00:00", "2025-04-26 09:00:00")
            .validate(&rules())
            .unwrap_err();

        assert_eq!(errors["time_end"], "End time must be after start time.");
    }

    #[test]
    fn test_equal_start_and_end_is_rejected() {
        let errors = work_time_request("2025-04-26 09:00:00", "2025-04-26 09:00:00")
            .validate(&rules())
            .unwrap_err();

        assert!(errors.contains_key("time_end"));
    }

    #[test]
    fn test_more_than_max_hours_is_rejected() {
        let errors = work_time_request("2025-04-26 06:00:00", "2025-04-26 19:00:00")
            .validate(&rules())
            .unwrap_err();

        assert_eq!(errors["time_end"], "Work time cannot exceed 12 hours.");
    }

    #[test]
    fn test_partial_hour_past_max_is_allowed() {
        // Only whole hours count against the limit.
        let result = work_time_request("2025-04-26 06:00:00", "2025-04-26 18:59:00").validate(&rules());
        assert!(result.is_ok());
    }

    #[test]
    fn test_work_time_errors_are_collected() {
        let request = CreateWorkTimeRequest {
            employee_id: "not-a-uuid".to_string(),
            time_start: "yesterday".to_string(),
            time_end: String::new(),
        };

        let errors = request.validate(&rules()).unwrap_err();
        assert_eq!(errors["employee_id"], "This is not a valid UUID.");
        assert_eq!(errors["time_start"], "This value is not a valid datetime.");
        assert_eq!(errors["time_end"], "This value should not be blank.");
    }
}
