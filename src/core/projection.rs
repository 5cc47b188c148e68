//! Final-grade projection, worst-course impact, and what-if simulation

use crate::core::aggregate::{eligible, weighted_average, CreditBreakdown};
use crate::core::models::{Course, CourseRecord, DegreeConfig, GradeAttempt, Semester};
use serde::{Deserialize, Serialize};

/// Lowest grade assumed for any remaining credit
pub const WORST_REMAINING_GRADE: f64 = 60.0;

/// Highest grade assumed for any remaining credit
pub const BEST_REMAINING_GRADE: f64 = 100.0;

/// Smallest average gain counted as an improvement; smaller gains are rounding noise
pub const IMPROVEMENT_TOLERANCE: f64 = 1e-9;

/// Range reported when no credits have been completed yet
pub const DEFAULT_RANGE: FinalAverageRange = FinalAverageRange {
    low: 60.0,
    high: 100.0,
    soft_low: 70.0,
    soft_high: 90.0,
};

/// Projected bounds on the final degree average
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinalAverageRange {
    /// Average if every remaining credit is graded 60
    pub low: f64,
    /// Average if every remaining credit is graded 100
    pub high: f64,
    /// `low` damped toward the current average
    pub soft_low: f64,
    /// Midpoint between the current average and `high`
    pub soft_high: f64,
}

/// Project the range the final degree average can land in.
///
/// With `W` the current weighted average, `T` the completed credits and `R`
/// the credit requirement:
/// `low = W*T/R + (R-T)*60/R`, `high = W*T/R + (R-T)*100/R`,
/// `soft_low = W - (W-low)/5`, `soft_high = (W+high)/2`.
///
/// With no completed credits the fixed [`DEFAULT_RANGE`] is returned. With a
/// non-positive requirement every bound equals `W`.
#[must_use]
pub fn final_average_range(
    degree: &DegreeConfig,
    records: &[CourseRecord],
    current: Semester,
) -> FinalAverageRange {
    let completed = CreditBreakdown::compute(records, current).completed;
    if completed == 0.0 {
        return DEFAULT_RANGE;
    }

    let average = weighted_average(records, current);
    let required = degree.credit_requirement;
    if required <= 0.0 {
        return FinalAverageRange {
            low: average,
            high: average,
            soft_low: average,
            soft_high: average,
        };
    }

    let earned = average * completed / required;
    let remaining = required - completed;
    let low = earned + remaining * WORST_REMAINING_GRADE / required;
    let high = earned + remaining * BEST_REMAINING_GRADE / required;

    FinalAverageRange {
        low,
        high,
        soft_low: average - (average - low) / 5.0,
        soft_high: (average + high) / 2.0,
    }
}

/// Result of looking for the course that drags the average down most
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactAnalysis<'a> {
    /// Course whose removal raises the average most; the first eligible
    /// course when no removal raises it, `None` when nothing is eligible
    pub worst: Option<&'a CourseRecord>,
    /// Increase in the average from removing `worst`, never negative
    pub max_improvement: f64,
}

impl<'a> ImpactAnalysis<'a> {
    /// Analyse the completed, graded courses in `records`.
    ///
    /// Ties go to the course encountered first.
    #[must_use]
    pub fn compute(records: &'a [CourseRecord], current: Semester) -> Self {
        let graded: Vec<(&CourseRecord, f64)> = eligible(records, current).collect();
        let baseline = mean_excluding(&graded, None);

        let mut worst = graded.first().map(|(record, _)| *record);
        let mut max_improvement = 0.0;

        for (index, (record, _)) in graded.iter().enumerate() {
            let improvement = mean_excluding(&graded, Some(index)) - baseline;
            if improvement > max_improvement + IMPROVEMENT_TOLERANCE {
                max_improvement = improvement;
                worst = Some(*record);
            }
        }

        Self {
            worst,
            max_improvement,
        }
    }
}

/// Weighted mean of graded pairs, optionally leaving one index out
fn mean_excluding(graded: &[(&CourseRecord, f64)], skip: Option<usize>) -> f64 {
    let (weighted, credits) = graded
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != skip)
        .fold((0.0, 0.0), |(w, c), (_, (record, grade))| {
            (w + grade * record.credits(), c + record.credits())
        });

    if credits == 0.0 {
        0.0
    } else {
        weighted / credits
    }
}

/// Course whose removal raises the weighted average the most
#[must_use]
pub fn worst_course(records: &[CourseRecord], current: Semester) -> Option<&CourseRecord> {
    ImpactAnalysis::compute(records, current).worst
}

/// How much the weighted average rises when [`worst_course`] is removed
#[must_use]
pub fn max_improvement(records: &[CourseRecord], current: Semester) -> f64 {
    ImpactAnalysis::compute(records, current).max_improvement
}

/// A course that has not been taken, used for what-if simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HypotheticalCourse {
    /// Course name
    pub name: String,
    /// Assumed final grade
    pub grade: f64,
    /// Credit hours
    pub credits: f64,
}

impl HypotheticalCourse {
    /// Create a hypothetical course
    #[must_use]
    pub fn new(name: impl Into<String>, grade: f64, credits: f64) -> Self {
        Self {
            name: name.into(),
            grade,
            credits,
        }
    }

    /// Materialize as a graded record in `semester`
    fn to_record(&self, index: usize, semester: Semester) -> CourseRecord {
        CourseRecord::new(
            format!("what-if-{index}"),
            Course::new(self.name.clone(), self.credits),
            Some(semester),
        )
        .with_attempt(GradeAttempt::simple(self.grade).marked_final())
    }
}

/// Weighted average before and after adding hypothetical courses
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WhatIfOutcome {
    /// Current weighted average
    pub before: f64,
    /// Weighted average including the hypothetical courses
    pub after: f64,
    /// `after - before`
    pub delta: f64,
}

/// Preview the weighted average with extra courses added.
///
/// Hypothetical courses are placed in the semester before `current` so they
/// count as completed. `records` is not modified.
#[must_use]
pub fn what_if(
    records: &[CourseRecord],
    hypotheticals: &[HypotheticalCourse],
    current: Semester,
) -> WhatIfOutcome {
    let before = weighted_average(records, current);

    let past = current.previous();
    let combined: Vec<CourseRecord> = records
        .iter()
        .cloned()
        .chain(
            hypotheticals
                .iter()
                .enumerate()
                .map(|(i, course)| course.to_record(i, past)),
        )
        .collect();
    let after = weighted_average(&combined, current);

    WhatIfOutcome {
        before,
        after,
        delta: after - before,
    }
}
