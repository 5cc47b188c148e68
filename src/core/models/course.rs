//! Course and enrollment models

use super::{GradeAttempt, Semester};
use crate::core::status::{status, CourseStatus};
use serde::{Deserialize, Serialize};

/// A course from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course name (e.g., "Data Structures")
    pub name: String,

    /// Credit hours (can be fractional)
    pub credits: f64,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `name` - Course name
    /// * `credits` - Credit hours
    #[must_use]
    pub fn new(name: impl Into<String>, credits: f64) -> Self {
        Self {
            name: name.into(),
            credits,
        }
    }
}

/// A student's enrollment in a course, with its graded attempts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Record identifier
    pub id: String,

    /// The enrolled course
    #[serde(flatten)]
    pub course: Course,

    /// Semester the course is placed in; `None` means unassigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<Semester>,

    /// Graded attempts in insertion order
    #[serde(default)]
    pub grades: Vec<GradeAttempt>,
}

impl CourseRecord {
    /// Create a record with no attempts
    ///
    /// # Arguments
    /// * `id` - Record identifier
    /// * `course` - The enrolled course
    /// * `semester` - Placement, or `None` for unassigned
    #[must_use]
    pub fn new(id: impl Into<String>, course: Course, semester: Option<Semester>) -> Self {
        Self {
            id: id.into(),
            course,
            semester,
            grades: Vec::new(),
        }
    }

    /// Add a graded attempt, keeping insertion order
    #[must_use]
    pub fn with_attempt(mut self, attempt: GradeAttempt) -> Self {
        self.grades.push(attempt);
        self
    }

    /// Credit hours of the enrolled course
    #[must_use]
    pub const fn credits(&self) -> f64 {
        self.course.credits
    }

    /// Status of this record relative to `current`.
    ///
    /// A record with no attempts is never completed: a past semester with no
    /// grade yet reports [`CourseStatus::InProgress`]. Returns `None` when the
    /// record is unassigned.
    #[must_use]
    pub fn status(&self, current: Semester) -> Option<CourseStatus> {
        match status(self.semester, current)? {
            CourseStatus::Completed if self.grades.is_empty() => Some(CourseStatus::InProgress),
            other => Some(other),
        }
    }

    /// Whether the record counts as completed relative to `current`
    #[must_use]
    pub fn is_completed(&self, current: Semester) -> bool {
        self.status(current) == Some(CourseStatus::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Term;

    const CURRENT: Semester = Semester::new(2024, Term::Fall);

    #[test]
    fn test_record_creation() {
        let record = CourseRecord::new(
            "r1",
            Course::new("Discrete Structures", 4.0),
            Some(Semester::new(2024, Term::Spring)),
        );

        assert_eq!(record.id, "r1");
        assert_eq!(record.course.name, "Discrete Structures");
        assert!((record.credits() - 4.0).abs() < f64::EPSILON);
        assert!(record.grades.is_empty());
    }

    #[test]
    fn test_past_semester_without_grades_is_not_completed() {
        let record = CourseRecord::new(
            "r1",
            Course::new("Algorithms", 4.0),
            Some(Semester::new(2024, Term::Spring)),
        );

        assert_eq!(record.status(CURRENT), Some(CourseStatus::InProgress));
        assert!(!record.is_completed(CURRENT));

        let graded = record.with_attempt(GradeAttempt::simple(90.0));
        assert_eq!(graded.status(CURRENT), Some(CourseStatus::Completed));
    }

    #[test]
    fn test_unassigned_has_no_status() {
        let record = CourseRecord::new("r1", Course::new("Elective", 3.0), None)
            .with_attempt(GradeAttempt::simple(80.0));

        assert_eq!(record.status(CURRENT), None);
    }

    #[test]
    fn test_future_and_current_status() {
        let planned = CourseRecord::new(
            "r1",
            Course::new("Compilers", 4.0),
            Some(Semester::new(2025, Term::Spring)),
        );
        let current = CourseRecord::new("r2", Course::new("Networks", 4.0), Some(CURRENT));

        assert_eq!(planned.status(CURRENT), Some(CourseStatus::Planned));
        assert_eq!(current.status(CURRENT), Some(CourseStatus::InProgress));
    }

    #[test]
    fn test_deserialize_flattened_course() {
        let record: CourseRecord = toml::from_str(
            r#"
id = "cs2510"
name = "Fundamentals of Computer Science 2"
credits = 4
semester = "Spring 2024"

[[grades]]
grade = 91
is_final = true
"#,
        )
        .expect("parse course record");

        assert_eq!(record.course.name, "Fundamentals of Computer Science 2");
        assert_eq!(record.semester, Some(Semester::new(2024, Term::Spring)));
        assert_eq!(record.grades.len(), 1);
        assert!(record.grades[0].is_final);
    }
}
