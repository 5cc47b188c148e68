//! Planning: loading student records and laying courses out over semesters

pub mod loader;
pub mod semesters;
pub mod timeline;

pub use loader::{
    load_student_record, parse_student_record, RecordError, RecordFormat, StudentRecord,
};
pub use semesters::{PlannedSemester, SemesterPlan};
pub use timeline::GraduationTimeline;
