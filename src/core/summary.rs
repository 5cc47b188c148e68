//! Progress summary: every derived metric for one student in one place

use crate::core::aggregate::{
    cumulative_gpas, degree_progress, semester_gpas, total_credits, weighted_average,
    CreditBreakdown, SemesterGpa,
};
use crate::core::models::{CourseRecord, Semester, StudentProfile};
use crate::core::planner::GraduationTimeline;
use crate::core::projection::{final_average_range, FinalAverageRange, ImpactAnalysis};
use serde::Serialize;

/// Cumulative weighted average after a semester
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CumulativeGpa {
    /// The semester
    pub semester: Semester,
    /// Weighted average over it and every earlier semester
    pub gpa: f64,
}

/// Summary statistics for a student
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    /// Student name
    pub student: String,
    /// Semester the summary was computed against
    pub as_of: Semester,
    /// Weighted average of completed, graded courses
    pub weighted_average: f64,
    /// Credits across every record
    pub total_credits: f64,
    /// Credits split by status
    pub credits: CreditBreakdown,
    /// Percent of the credit requirement covered (0-100)
    pub degree_progress: f64,
    /// Projected final average bounds
    pub final_average_range: FinalAverageRange,
    /// Name of the course dragging the average down most
    pub worst_course: Option<String>,
    /// Average increase from removing that course
    pub max_improvement: f64,
    /// Per-semester averages, ascending
    pub semester_gpas: Vec<SemesterGpa>,
    /// Running cumulative averages, ascending
    pub cumulative_gpas: Vec<CumulativeGpa>,
    /// Remaining workload until graduation
    pub timeline: GraduationTimeline,
}

impl ProgressSummary {
    /// Compute every metric for `profile` over `records` as of `current`
    #[must_use]
    pub fn compute(profile: &StudentProfile, records: &[CourseRecord], current: Semester) -> Self {
        let degree = &profile.degree;
        let impact = ImpactAnalysis::compute(records, current);

        Self {
            student: profile.name.clone(),
            as_of: current,
            weighted_average: weighted_average(records, current),
            total_credits: total_credits(records),
            credits: CreditBreakdown::compute(records, current),
            degree_progress: degree_progress(Some(degree), records, current),
            final_average_range: final_average_range(degree, records, current),
            worst_course: impact.worst.map(|record| record.course.name.clone()),
            max_improvement: impact.max_improvement,
            semester_gpas: semester_gpas(records, current),
            cumulative_gpas: cumulative_gpas(records, current)
                .into_iter()
                .map(|(semester, gpa)| CumulativeGpa { semester, gpa })
                .collect(),
            timeline: GraduationTimeline::compute(degree, records, current),
        }
    }

    /// Whether any course has been completed and graded
    #[must_use]
    pub fn has_grades(&self) -> bool {
        !self.semester_gpas.is_empty()
    }
}
