//! Semester-by-semester view of a student's courses

use crate::core::aggregate::semester_gpas;
use crate::core::models::{CourseRecord, Semester};
use crate::core::status::{status, CourseStatus};
use serde::Serialize;
use std::collections::BTreeMap;

/// One semester of the plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedSemester {
    /// The semester
    pub semester: Semester,
    /// Status of the semester relative to the current one
    pub status: CourseStatus,
    /// Names of the courses placed in it, in input order
    pub courses: Vec<String>,
    /// Total credit load
    pub credits: f64,
    /// Weighted average, when at least one course is completed and graded
    pub gpa: Option<f64>,
}

/// All assigned semesters in order, plus unassigned courses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterPlan {
    /// Semesters ascending
    pub semesters: Vec<PlannedSemester>,
    /// Names of courses with no semester
    pub unassigned: Vec<String>,
}

impl SemesterPlan {
    /// Group `records` by semester
    #[must_use]
    pub fn build(records: &[CourseRecord], current: Semester) -> Self {
        let mut grouped: BTreeMap<Semester, Vec<&CourseRecord>> = BTreeMap::new();
        let mut unassigned = Vec::new();

        for record in records {
            match record.semester {
                Some(semester) => grouped.entry(semester).or_default().push(record),
                None => unassigned.push(record.course.name.clone()),
            }
        }

        let gpas: BTreeMap<Semester, f64> = semester_gpas(records, current)
            .into_iter()
            .map(|entry| (entry.semester, entry.gpa))
            .collect();

        let semesters = grouped
            .into_iter()
            .map(|(semester, members)| PlannedSemester {
                semester,
                status: status(Some(semester), current).unwrap_or(CourseStatus::Planned),
                courses: members.iter().map(|r| r.course.name.clone()).collect(),
                credits: members.iter().map(|r| r.credits()).sum(),
                gpa: gpas.get(&semester).copied(),
            })
            .collect();

        Self {
            semesters,
            unassigned,
        }
    }

    /// Heaviest credit load across semesters at or after `from`
    #[must_use]
    pub fn peak_load_from(&self, from: Semester) -> Option<&PlannedSemester> {
        self.semesters
            .iter()
            .filter(|s| s.semester >= from)
            .fold(None, |best: Option<&PlannedSemester>, s| match best {
                Some(b) if b.credits >= s.credits => Some(b),
                _ => Some(s),
            })
    }
}
