//! Work-time aggregation and pay report engine.
//!
//! This crate records employees' work intervals and turns them into daily and
//! monthly pay reports: intervals are clipped to the report window, rounded to
//! half hours, split into normal and overtime hours, and priced.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
