//! CLI command handlers for `gpaplanner`.
//!
//! Each command is implemented in its own submodule. Helpers shared by the
//! record-based commands live here.

pub mod config;
pub mod plan;
pub mod report;
pub mod semesters;
pub mod summary;
pub mod what_if;

use gpa_planner::config::Config;
use gpa_planner::core::models::Semester;
use gpa_planner::core::planner::{load_student_record, StudentRecord};
use gpa_planner::{debug, error, info};
use std::path::Path;

/// Load a student record, mapping failures to a printable message
pub fn load_record(path: &Path) -> Result<StudentRecord, String> {
    let record = load_student_record(path).map_err(|e| {
        error!("Failed to load student record {}: {e}", path.display());
        format!("✗ Failed to load {}: {e}", path.display())
    })?;

    info!("Student record loaded: {}", path.display());
    Ok(record)
}

/// Semester the commands evaluate against
///
/// `--as-of` wins; otherwise today's date is mapped through the configured
/// academic calendar.
pub fn current_semester(as_of: Option<Semester>, config: &Config) -> Semester {
    as_of.unwrap_or_else(|| {
        let today = chrono::Local::now().date_naive();
        let semester = config.academic_calendar().semester_for(&today);
        debug!("Current semester from {today}: {semester}");
        semester
    })
}

/// Format a percentage-like figure, or `N/A` when undefined
pub fn fmt_value(value: f64) -> String {
    if value.is_nan() {
        "N/A".to_string()
    } else {
        format!("{value:.2}")
    }
}
