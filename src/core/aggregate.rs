//! Weighted averages, credit sums, and degree progress
//!
//! Every function iterates its input in the given order so floating-point
//! sums are reproducible for identical inputs.

use crate::core::grades::final_grade;
use crate::core::models::{CourseRecord, DegreeConfig, Semester};
use crate::core::status::CourseStatus;
use serde::Serialize;
use std::collections::BTreeMap;

/// Upper bound of degree progress, in percent
pub const MAX_PROGRESS: f64 = 100.0;

/// Credit-weighted average over `(grade, credits)` pairs, `0.0` when the weights sum to zero
fn weighted_mean<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (weighted, credits) = pairs
        .into_iter()
        .fold((0.0, 0.0), |(w, c), (grade, credits)| {
            (w + grade * credits, c + credits)
        });

    if credits == 0.0 {
        0.0
    } else {
        weighted / credits
    }
}

/// Completed, graded records paired with their final grade
pub(crate) fn eligible<'a>(
    records: &'a [CourseRecord],
    current: Semester,
) -> impl Iterator<Item = (&'a CourseRecord, f64)> + 'a {
    records.iter().filter_map(move |record| {
        if record.is_completed(current) {
            final_grade(record).map(|grade| (record, grade))
        } else {
            None
        }
    })
}

/// Credit-weighted average of final grades over completed, graded courses.
///
/// Returns `0.0` when no course is eligible or their credits sum to zero;
/// never NaN.
#[must_use]
pub fn weighted_average(records: &[CourseRecord], current: Semester) -> f64 {
    weighted_mean(eligible(records, current).map(|(record, grade)| (grade, record.credits())))
}

/// Sum of credits over every record, regardless of status
#[must_use]
pub fn total_credits(records: &[CourseRecord]) -> f64 {
    records.iter().map(CourseRecord::credits).sum()
}

/// Credits split by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CreditBreakdown {
    /// Credits of completed (past and graded) courses
    pub completed: f64,
    /// Credits of courses in the current semester, or past but not yet graded
    pub in_progress: f64,
    /// Credits of courses in future semesters
    pub planned: f64,
    /// Credits of courses with no semester
    pub unassigned: f64,
}

impl CreditBreakdown {
    /// Split the credits of `records` by status relative to `current`
    #[must_use]
    pub fn compute(records: &[CourseRecord], current: Semester) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut breakdown, record| {
                let credits = record.credits();
                match record.status(current) {
                    Some(CourseStatus::Completed) => breakdown.completed += credits,
                    Some(CourseStatus::InProgress) => breakdown.in_progress += credits,
                    Some(CourseStatus::Planned) => breakdown.planned += credits,
                    None => breakdown.unassigned += credits,
                }
                breakdown
            })
    }

    /// Credits counting toward degree progress (completed and in progress)
    #[must_use]
    pub fn counted(&self) -> f64 {
        self.completed + self.in_progress
    }
}

/// Percentage of the degree's credit requirement covered by completed and
/// in-progress courses, capped at 100.
///
/// Returns NaN when `degree` is `None`; callers must check for it before
/// display. A non-positive requirement yields `0.0`.
#[must_use]
pub fn degree_progress(
    degree: Option<&DegreeConfig>,
    records: &[CourseRecord],
    current: Semester,
) -> f64 {
    let Some(degree) = degree else {
        return f64::NAN;
    };
    if degree.credit_requirement <= 0.0 {
        return 0.0;
    }

    let counted = CreditBreakdown::compute(records, current).counted();
    (counted / degree.credit_requirement * MAX_PROGRESS).min(MAX_PROGRESS)
}

/// Weighted average of one semester's courses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterGpa {
    /// The semester
    pub semester: Semester,
    /// Weighted average of its completed, graded courses
    pub gpa: f64,
    /// Credits of its completed, graded courses
    pub credits: f64,
    /// Number of completed, graded courses
    pub courses: usize,
}

/// Weighted average per semester, ascending by semester.
///
/// Semesters without a completed, graded course are omitted, as are
/// unassigned records.
#[must_use]
pub fn semester_gpas(records: &[CourseRecord], current: Semester) -> Vec<SemesterGpa> {
    let mut groups: BTreeMap<Semester, Vec<(f64, f64)>> = BTreeMap::new();

    for (record, grade) in eligible(records, current) {
        if let Some(semester) = record.semester {
            groups
                .entry(semester)
                .or_default()
                .push((grade, record.credits()));
        }
    }

    groups
        .into_iter()
        .map(|(semester, pairs)| SemesterGpa {
            semester,
            credits: pairs.iter().map(|(_, credits)| credits).sum(),
            courses: pairs.len(),
            gpa: weighted_mean(pairs),
        })
        .collect()
}

/// Weighted average over courses placed in `upto` or earlier
#[must_use]
pub fn cumulative_gpa(records: &[CourseRecord], upto: Semester, current: Semester) -> f64 {
    weighted_mean(
        eligible(records, current)
            .filter(|(record, _)| record.semester.is_some_and(|s| s <= upto))
            .map(|(record, grade)| (grade, record.credits())),
    )
}

/// Running cumulative GPA after each graded semester, ascending
#[must_use]
pub fn cumulative_gpas(records: &[CourseRecord], current: Semester) -> Vec<(Semester, f64)> {
    semester_gpas(records, current)
        .iter()
        .map(|entry| {
            (
                entry.semester,
                cumulative_gpa(records, entry.semester, current),
            )
        })
        .collect()
}
