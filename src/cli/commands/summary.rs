//! Summary command handler

use super::{current_semester, fmt_value, load_record};
use crate::args::RecordInput;
use gpa_planner::config::Config;
use gpa_planner::core::summary::ProgressSummary;
use gpa_planner::{error, verbose};

/// Run the summary command
pub fn run(input: &RecordInput, config: &Config) {
    if let Err(err) = print_summary(input, config) {
        error!("Summary failed for {}: {err}", input.file.display());
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn print_summary(input: &RecordInput, config: &Config) -> Result<(), String> {
    let record = load_record(&input.file)?;
    let current = current_semester(input.as_of, config);
    let summary = ProgressSummary::compute(&record.student, &record.courses, current);
    let degree = &record.student.degree;

    let name = if summary.student.is_empty() {
        "Student"
    } else {
        &summary.student
    };
    println!("\n=== {name} (as of {current}) ===");

    if summary.has_grades() {
        println!("Weighted Average: {:.2}", summary.weighted_average);
    } else {
        println!("Weighted Average: N/A (no completed courses)");
    }
    println!(
        "Degree Progress: {}% of {:.1} credits",
        fmt_value(summary.degree_progress),
        degree.credit_requirement
    );
    println!(
        "Credits: {:.1} completed, {:.1} in progress, {:.1} planned, {:.1} unassigned",
        summary.credits.completed,
        summary.credits.in_progress,
        summary.credits.planned,
        summary.credits.unassigned
    );

    let range = &summary.final_average_range;
    println!(
        "Projected Final Average: {:.2} - {:.2} (likely {:.2} - {:.2})",
        range.low, range.high, range.soft_low, range.soft_high
    );

    match &summary.worst_course {
        Some(course) => println!(
            "Biggest Drag: {course} (removing it adds {:.2})",
            summary.max_improvement
        ),
        None => println!("Biggest Drag: N/A"),
    }

    verbose!("Total credits on record: {:.1}", summary.total_credits);
    for entry in &summary.cumulative_gpas {
        verbose!("  Cumulative after {}: {:.2}", entry.semester, entry.gpa);
    }

    Ok(())
}
