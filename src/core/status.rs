//! Course status inference relative to the current semester

use crate::core::models::Semester;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a course sits relative to the current semester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    /// Scheduled in a future semester
    Planned,
    /// Scheduled in the current semester
    InProgress,
    /// Scheduled in a past semester
    Completed,
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planned => write!(f, "planned"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Classify a semester placement against the current semester.
///
/// Returns `None` for unassigned courses (no semester).
#[must_use]
pub fn status(semester: Option<Semester>, current: Semester) -> Option<CourseStatus> {
    let semester = semester?;
    let status = match semester.ordinal().cmp(&current.ordinal()) {
        std::cmp::Ordering::Less => CourseStatus::Completed,
        std::cmp::Ordering::Equal => CourseStatus::InProgress,
        std::cmp::Ordering::Greater => CourseStatus::Planned,
    };
    Some(status)
}
