//! Grade resolution and component editing
//!
//! Resolves the single grade a course contributes from its attempts, and
//! provides pure edits over component lists that keep their percentages
//! summing to 100. Edits never touch the input slice; they return a new
//! vector.

use crate::core::models::{CourseRecord, GradeAttempt, GradeComponent};

/// Total that component percentages are kept at by the editing helpers
pub const FULL_WEIGHT: f64 = 100.0;

/// Weighted grade of a set of components: `Σ(grade * percentage) / 100`.
///
/// Percentages are used exactly as stored. Components whose percentages sum
/// to less than 100 produce a proportionally lower grade; nothing is
/// renormalized.
#[must_use]
pub fn component_grade(components: &[GradeComponent]) -> f64 {
    components
        .iter()
        .map(|c| c.grade * c.percentage)
        .sum::<f64>()
        / FULL_WEIGHT
}

/// The attempt that counts for a course.
///
/// The first attempt marked final wins; with none marked, the last attempt
/// in sequence order is used. Returns `None` when there are no attempts.
#[must_use]
pub fn final_attempt(grades: &[GradeAttempt]) -> Option<&GradeAttempt> {
    grades
        .iter()
        .find(|attempt| attempt.is_final)
        .or_else(|| grades.last())
}

/// Final grade of a course record, or `None` when it has not been graded
#[must_use]
pub fn final_grade(record: &CourseRecord) -> Option<f64> {
    final_attempt(&record.grades).map(GradeAttempt::effective_grade)
}

/// Set one component's percentage and rescale the others to keep the total at 100.
///
/// `new_percentage` is clamped to `[0, 100]`. The remaining weight is shared
/// among the other components in proportion to their current percentages,
/// or equally when those are all zero. A lone component always holds the
/// full weight. An out-of-range `index` returns an unchanged copy.
#[must_use]
pub fn redistribute(
    components: &[GradeComponent],
    index: usize,
    new_percentage: f64,
) -> Vec<GradeComponent> {
    if index >= components.len() {
        return components.to_vec();
    }
    if components.len() == 1 {
        return vec![GradeComponent {
            percentage: FULL_WEIGHT,
            ..components[0].clone()
        }];
    }

    let target = new_percentage.clamp(0.0, FULL_WEIGHT);
    let others: Vec<GradeComponent> = components
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, c)| c.clone())
        .collect();
    let mut rescaled = rescale(&others, FULL_WEIGHT - target).into_iter();

    components
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i == index {
                GradeComponent {
                    percentage: target,
                    ..c.clone()
                }
            } else {
                rescaled.next().unwrap_or_else(|| c.clone())
            }
        })
        .collect()
}

/// Append a new, ungraded component with an equal share of the weight.
///
/// With `n` existing components the new one receives `100 / (n + 1)` and the
/// existing ones are scaled down proportionally to fill the rest.
#[must_use]
pub fn add_component(components: &[GradeComponent], name: &str) -> Vec<GradeComponent> {
    #[allow(clippy::cast_precision_loss)]
    let share = FULL_WEIGHT / (components.len() + 1) as f64;

    let mut result = rescale(components, FULL_WEIGHT - share);
    result.push(GradeComponent::new(name, 0.0, share));
    result
}

/// Remove a component and rescale the rest back to a total of 100.
///
/// An out-of-range `index` returns an unchanged copy.
#[must_use]
pub fn remove_component(components: &[GradeComponent], index: usize) -> Vec<GradeComponent> {
    if index >= components.len() {
        return components.to_vec();
    }

    let remaining: Vec<GradeComponent> = components
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, c)| c.clone())
        .collect();

    rescale(&remaining, FULL_WEIGHT)
}

/// Scale percentages so they sum to `total`, proportionally or equally if all are zero
fn rescale(components: &[GradeComponent], total: f64) -> Vec<GradeComponent> {
    if components.is_empty() {
        return Vec::new();
    }

    let current: f64 = components.iter().map(|c| c.percentage).sum();
    #[allow(clippy::cast_precision_loss)]
    let equal_share = total / components.len() as f64;

    components
        .iter()
        .map(|c| GradeComponent {
            percentage: if current > 0.0 {
                c.percentage * total / current
            } else {
                equal_share
            },
            ..c.clone()
        })
        .collect()
}
