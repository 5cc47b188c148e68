//! Data models for `gpa-planner`

pub mod course;
pub mod degree;
pub mod grade;
pub mod semester;

pub use course::{Course, CourseRecord};
pub use degree::{DegreeConfig, StudentProfile};
pub use grade::{AttemptKind, GradeAttempt, GradeComponent};
pub use semester::{Semester, Term};
