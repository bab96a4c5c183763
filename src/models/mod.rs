//! Core data models for the work-time engine.
//!
//! Employees, work intervals, report windows and the derived pay breakdown.

mod employee;
mod pay_breakdown;
mod report_window;
mod work_time;

pub use employee::Employee;
pub use pay_breakdown::{HourTally, PayBreakdown};
pub use report_window::{ReportWindow, WindowKind, days_in_month};
pub use work_time::{NewWorkTime, WorkInterval, WorkTime};
