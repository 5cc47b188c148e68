//! Library for `gpa-planner`
//!
//! Pure calculations over a student's course records (weighted averages,
//! degree progress, projected final averages, what-if scenarios) plus the
//! loaders, config and report rendering used by the `gpaplanner` CLI.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
