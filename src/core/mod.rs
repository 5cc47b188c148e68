//! Core module: the academic progress calculator and everything around it

pub mod aggregate;
pub mod calendar;
pub mod config;
pub mod grades;
pub mod models;
pub mod planner;
pub mod projection;
pub mod report;
pub mod status;
pub mod summary;

/// Returns the current version of the `gpa-planner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
