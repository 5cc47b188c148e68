//! Graduation timeline: how many credits remain and how fast they must be taken

use crate::core::aggregate::CreditBreakdown;
use crate::core::models::{CourseRecord, DegreeConfig, Semester, Term};
use serde::Serialize;

/// Remaining workload until the expected graduation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraduationTimeline {
    /// Credits still needed beyond completed and in-progress courses
    pub remaining_credits: f64,
    /// Regular (Spring/Fall) terms after the current one, through Spring of the graduation year
    pub remaining_terms: u32,
    /// Credits needed per remaining term; `None` when no terms remain
    pub credits_per_term: Option<f64>,
    /// Credits already placed in future semesters
    pub planned_credits: f64,
    /// Whether planned courses cover the remaining credits
    pub on_track: bool,
    /// Spring of the expected graduation year, if known
    pub graduation_semester: Option<Semester>,
}

impl GraduationTimeline {
    /// Compute the timeline for `degree` given the student's records
    #[must_use]
    pub fn compute(degree: &DegreeConfig, records: &[CourseRecord], current: Semester) -> Self {
        let breakdown = CreditBreakdown::compute(records, current);
        let remaining_credits = (degree.credit_requirement - breakdown.counted()).max(0.0);

        let graduation_semester = degree
            .expected_graduation_year
            .map(|year| Semester::new(year, Term::Spring));
        let remaining_terms = graduation_semester.map_or(0, |grad| regular_terms_between(current, grad));

        let credits_per_term =
            (remaining_terms > 0).then(|| remaining_credits / f64::from(remaining_terms));

        Self {
            remaining_credits,
            remaining_terms,
            credits_per_term,
            planned_credits: breakdown.planned,
            on_track: breakdown.planned >= remaining_credits,
            graduation_semester,
        }
    }
}

/// Number of Spring/Fall terms `s` with `after < s <= until`
fn regular_terms_between(after: Semester, until: Semester) -> u32 {
    // Regular terms with ordinal <= the given semester, counted from year 0
    let upto = |s: Semester| -> i64 {
        2 * i64::from(s.year) + 1 + i64::from(matches!(s.term, Term::Fall))
    };

    let count = upto(until) - upto(after);
    u32::try_from(count.max(0)).unwrap_or(u32::MAX)
}
