//! Configuration loading and management for the work-time engine.
//!
//! Pay rates, the monthly overtime threshold and validation limits are read
//! once at startup from a YAML file and shared read-only afterwards.
//!
//! # Example
//!
//! ```no_run
//! use worktime_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Monthly limit: {}h", config.pay().monthly_hour_limit);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{PayConfig, ReportRules, TimeManagementConfig, WorkTimeRules};
