//! Report generation module for student progress
//!
//! This module renders a [`ProgressSummary`] and the semester plan into
//! Markdown, HTML, or JSON. Numbers are rounded here and nowhere else.

pub mod formats;

use crate::core::models::{CourseRecord, StudentProfile};
use crate::core::planner::SemesterPlan;
use crate::core::summary::ProgressSummary;
use serde::Serialize;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, JsonReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything a report needs so each format renders from the
/// same source.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Student and degree
    pub profile: &'a StudentProfile,
    /// All course records
    pub records: &'a [CourseRecord],
    /// Computed metrics
    pub summary: &'a ProgressSummary,
    /// Semester-by-semester layout
    pub plan: &'a SemesterPlan,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        profile: &'a StudentProfile,
        records: &'a [CourseRecord],
        summary: &'a ProgressSummary,
        plan: &'a SemesterPlan,
    ) -> Self {
        Self {
            profile,
            records,
            summary,
            plan,
        }
    }

    /// Student name, or a placeholder when the record has none
    #[must_use]
    pub fn student_name(&self) -> &str {
        if self.profile.name.is_empty() {
            "Student"
        } else {
            &self.profile.name
        }
    }

    /// Get course count
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.records.len()
    }

    /// Pre-formatted values shared by the text templates
    #[must_use]
    pub fn view(&self) -> ReportView {
        ReportView::from_context(self)
    }
}

/// One row of the semester table
#[derive(Debug, Clone, Serialize)]
pub struct SemesterRow {
    /// e.g. "Fall 2024"
    pub semester: String,
    /// planned / in-progress / completed
    pub status: String,
    /// Comma-separated course names
    pub courses: String,
    /// Credit load
    pub credits: String,
    /// Semester GPA or "-"
    pub gpa: String,
    /// Cumulative GPA or "-"
    pub cumulative: String,
}

/// Display-ready strings for a report
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    /// Student name
    pub student: String,
    /// Semester the report was computed for
    pub as_of: String,
    /// Number of course records
    pub course_count: usize,
    /// Credit requirement
    pub credit_requirement: String,
    /// Weighted average, or "N/A" without grades
    pub weighted_average: String,
    /// Degree progress percentage
    pub degree_progress: String,
    /// Completed credits
    pub completed_credits: String,
    /// In-progress credits
    pub in_progress_credits: String,
    /// Planned credits
    pub planned_credits: String,
    /// Unassigned credits
    pub unassigned_credits: String,
    /// Total credits across all records
    pub total_credits: String,
    /// Projected range bounds
    pub range_low: String,
    /// Projected range upper bound
    pub range_high: String,
    /// Damped lower bound
    pub range_soft_low: String,
    /// Damped upper bound
    pub range_soft_high: String,
    /// Worst course name or "N/A"
    pub worst_course: String,
    /// Average gain from dropping the worst course
    pub max_improvement: String,
    /// Remaining credits until graduation
    pub remaining_credits: String,
    /// Remaining regular terms
    pub remaining_terms: u32,
    /// Required credits per remaining term or "N/A"
    pub credits_per_term: String,
    /// Expected graduation semester or "N/A"
    pub graduation: String,
    /// "yes" or "no"
    pub on_track: String,
    /// Semester table rows
    pub semesters: Vec<SemesterRow>,
    /// Comma-separated unassigned course names, empty when none
    pub unassigned: String,
}

fn two_places(value: f64) -> String {
    format!("{value:.2}")
}

fn one_place(value: f64) -> String {
    format!("{value:.1}")
}

impl ReportView {
    /// Format every value in `ctx` for display
    #[must_use]
    pub fn from_context(ctx: &ReportContext) -> Self {
        let summary = ctx.summary;
        let range = &summary.final_average_range;
        let timeline = &summary.timeline;
        let not_available = || "N/A".to_string();

        let semesters = ctx
            .plan
            .semesters
            .iter()
            .map(|planned| SemesterRow {
                semester: planned.semester.to_string(),
                status: planned.status.to_string(),
                courses: planned.courses.join(", "),
                credits: one_place(planned.credits),
                gpa: planned.gpa.map_or_else(|| "-".to_string(), two_places),
                cumulative: summary
                    .cumulative_gpas
                    .iter()
                    .find(|c| c.semester == planned.semester)
                    .map_or_else(|| "-".to_string(), |c| two_places(c.gpa)),
            })
            .collect();

        Self {
            student: ctx.student_name().to_string(),
            as_of: summary.as_of.to_string(),
            course_count: ctx.course_count(),
            credit_requirement: one_place(ctx.profile.degree.credit_requirement),
            weighted_average: if summary.has_grades() {
                two_places(summary.weighted_average)
            } else {
                not_available()
            },
            degree_progress: one_place(summary.degree_progress),
            completed_credits: one_place(summary.credits.completed),
            in_progress_credits: one_place(summary.credits.in_progress),
            planned_credits: one_place(summary.credits.planned),
            unassigned_credits: one_place(summary.credits.unassigned),
            total_credits: one_place(summary.total_credits),
            range_low: two_places(range.low),
            range_high: two_places(range.high),
            range_soft_low: two_places(range.soft_low),
            range_soft_high: two_places(range.soft_high),
            worst_course: summary.worst_course.clone().unwrap_or_else(not_available),
            max_improvement: two_places(summary.max_improvement),
            remaining_credits: one_place(timeline.remaining_credits),
            remaining_terms: timeline.remaining_terms,
            credits_per_term: timeline
                .credits_per_term
                .map_or_else(not_available, one_place),
            graduation: timeline
                .graduation_semester
                .map_or_else(not_available, |s| s.to_string()),
            on_track: if timeline.on_track { "yes" } else { "no" }.to_string(),
            semesters,
            unassigned: ctx.plan.unassigned.join(", "),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        std::fs::write(output_path, report_content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
