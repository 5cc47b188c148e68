//! Integration tests for the progress calculator

use gpa_planner::core::aggregate::{degree_progress, weighted_average};
use gpa_planner::core::grades::final_grade;
use gpa_planner::core::models::{
    Course, CourseRecord, DegreeConfig, GradeAttempt, GradeComponent, Semester, Term,
};
use gpa_planner::core::projection::{
    final_average_range, max_improvement, what_if, worst_course, HypotheticalCourse, DEFAULT_RANGE,
};

const TOLERANCE: f64 = 1e-9;
const CURRENT: Semester = Semester::new(2024, Term::Fall);
const LAST_SPRING: Semester = Semester::new(2024, Term::Spring);

fn completed(id: &str, credits: f64, grade: f64) -> CourseRecord {
    CourseRecord::new(id, Course::new(id, credits), Some(LAST_SPRING))
        .with_attempt(GradeAttempt::simple(grade))
}

fn sample_records() -> Vec<CourseRecord> {
    vec![
        completed("calculus", 4.0, 91.0),
        completed("physics", 3.0, 64.5),
        completed("writing", 2.0, 88.0),
        completed("chemistry", 4.0, 72.0),
        CourseRecord::new("networks", Course::new("Networks", 4.0), Some(CURRENT)),
        CourseRecord::new("compilers", Course::new("Compilers", 4.0), Some(CURRENT.next())),
    ]
}

#[test]
fn test_empty_records_average_zero() {
    assert!(weighted_average(&[], CURRENT).abs() < TOLERANCE);
}

#[test]
fn test_uniform_grade_is_the_average() {
    let records = vec![
        completed("a", 1.0, 83.0),
        completed("b", 4.0, 83.0),
        completed("c", 2.5, 83.0),
    ];

    assert!((weighted_average(&records, CURRENT) - 83.0).abs() < TOLERANCE);
}

#[test]
fn test_average_ignores_order() {
    let records = sample_records();
    let mut reversed = records.clone();
    reversed.reverse();
    let mut rotated = records.clone();
    rotated.rotate_left(2);

    let expected = weighted_average(&records, CURRENT);
    assert!((weighted_average(&reversed, CURRENT) - expected).abs() < TOLERANCE);
    assert!((weighted_average(&rotated, CURRENT) - expected).abs() < TOLERANCE);
}

#[test]
fn test_two_course_scenario() {
    let records = vec![completed("a", 3.0, 90.0), completed("b", 4.0, 70.0)];

    let average = weighted_average(&records, CURRENT);
    assert!((average - 550.0 / 7.0).abs() < TOLERANCE);
    assert!((average - 78.57).abs() < 0.01);
}

#[test]
fn test_no_degree_progress_is_nan() {
    assert!(degree_progress(None, &sample_records(), CURRENT).is_nan());
}

#[test]
fn test_degree_progress_bounded() {
    let records = sample_records();
    for requirement in [1.0, 10.0, 21.0, 120.0] {
        let degree = DegreeConfig::new(requirement);
        let progress = degree_progress(Some(&degree), &records, CURRENT);
        assert!(
            (0.0..=100.0).contains(&progress),
            "progress {progress} out of range for requirement {requirement}"
        );
    }

    let degree = DegreeConfig::new(120.0);
    assert!(degree_progress(Some(&degree), &[], CURRENT).abs() < TOLERANCE);
}

#[test]
fn test_planned_courses_do_not_count_toward_progress() {
    let degree = DegreeConfig::new(100.0);
    let progress = degree_progress(Some(&degree), &sample_records(), CURRENT);

    // 13 completed + 4 in progress; the next-semester course is excluded
    assert!((progress - 17.0).abs() < TOLERANCE);
}

#[test]
fn test_default_range_without_completed_credits() {
    let degree = DegreeConfig::new(120.0);
    let planned = vec![CourseRecord::new(
        "x",
        Course::new("Future", 4.0),
        Some(CURRENT.next()),
    )];

    assert_eq!(final_average_range(&degree, &[], CURRENT), DEFAULT_RANGE);
    assert_eq!(final_average_range(&degree, &planned, CURRENT), DEFAULT_RANGE);
    assert!((DEFAULT_RANGE.low - 60.0).abs() < TOLERANCE);
    assert!((DEFAULT_RANGE.high - 100.0).abs() < TOLERANCE);
    assert!((DEFAULT_RANGE.soft_low - 70.0).abs() < TOLERANCE);
    assert!((DEFAULT_RANGE.soft_high - 90.0).abs() < TOLERANCE);
}

#[test]
fn test_range_brackets_current_average() {
    let degree = DegreeConfig::new(40.0);
    let records = sample_records();
    let average = weighted_average(&records, CURRENT);

    let range = final_average_range(&degree, &records, CURRENT);

    assert!(range.low <= range.soft_low);
    assert!(range.soft_low <= range.soft_high);
    assert!(range.soft_high <= range.high);
    assert!(range.low <= average && average <= range.high);
}

#[test]
fn test_removing_worst_course_matches_max_improvement() {
    let records = sample_records();
    let worst = worst_course(&records, CURRENT).expect("a worst course");
    let improvement = max_improvement(&records, CURRENT);

    let without: Vec<CourseRecord> = records
        .iter()
        .filter(|record| record.id != worst.id)
        .cloned()
        .collect();
    let delta = weighted_average(&without, CURRENT) - weighted_average(&records, CURRENT);

    assert_eq!(worst.id, "physics");
    assert!((delta - improvement).abs() < TOLERANCE);
}

#[test]
fn test_components_override_stored_grade() {
    let json = r#"{
        "grade": 12,
        "components": [
            { "name": "Exams", "grade": 100, "percentage": 50 },
            { "name": "Labs", "grade": 60, "percentage": 50 }
        ]
    }"#;
    let attempt: GradeAttempt = serde_json::from_str(json).expect("valid attempt");
    let record = CourseRecord::new("a", Course::new("Physics", 4.0), Some(LAST_SPRING))
        .with_attempt(attempt);

    assert_eq!(final_grade(&record), Some(80.0));
}

#[test]
fn test_partial_component_weights_are_not_renormalized() {
    let attempt = GradeAttempt::composite(vec![
        GradeComponent::new("Exams", 100.0, 60.0),
        GradeComponent::new("Homework", 100.0, 30.0),
    ]);
    let record =
        CourseRecord::new("a", Course::new("Physics", 4.0), Some(LAST_SPRING)).with_attempt(attempt);

    let grade = final_grade(&record).expect("graded");
    assert!((grade - 90.0).abs() < TOLERANCE);
}

#[test]
fn test_last_attempt_used_without_final_marker() {
    let record = CourseRecord::new("a", Course::new("Calculus", 4.0), Some(LAST_SPRING))
        .with_attempt(GradeAttempt::simple(60.0))
        .with_attempt(GradeAttempt::simple(75.0));

    assert_eq!(final_grade(&record), Some(75.0));

    let reordered = CourseRecord::new("a", Course::new("Calculus", 4.0), Some(LAST_SPRING))
        .with_attempt(GradeAttempt::simple(75.0))
        .with_attempt(GradeAttempt::simple(60.0));
    assert_eq!(final_grade(&reordered), Some(60.0));
}

#[test]
fn test_final_marker_wins_over_position() {
    let record = CourseRecord::new("a", Course::new("Calculus", 4.0), Some(LAST_SPRING))
        .with_attempt(GradeAttempt::simple(55.0).marked_final())
        .with_attempt(GradeAttempt::simple(95.0));

    assert_eq!(final_grade(&record), Some(55.0));
}

#[test]
fn test_what_if_leaves_records_untouched() {
    let records = sample_records();
    let snapshot = records.clone();

    let outcome = what_if(
        &records,
        &[HypotheticalCourse::new("Databases", 100.0, 3.0)],
        CURRENT,
    );

    assert_eq!(records, snapshot);
    assert!(outcome.after > outcome.before);
    assert!((outcome.delta - (outcome.after - outcome.before)).abs() < TOLERANCE);
}
