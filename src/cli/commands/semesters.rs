//! Semesters command handler

use super::{current_semester, load_record};
use crate::args::RecordInput;
use gpa_planner::config::Config;
use gpa_planner::core::planner::SemesterPlan;
use gpa_planner::error;

/// Run the semesters command
pub fn run(input: &RecordInput, config: &Config) {
    if let Err(err) = print_semesters(input, config) {
        error!("Semester listing failed for {}: {err}", input.file.display());
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn print_semesters(input: &RecordInput, config: &Config) -> Result<(), String> {
    let record = load_record(&input.file)?;
    let current = current_semester(input.as_of, config);
    let plan = SemesterPlan::build(&record.courses, current);

    println!("\n=== Semesters (as of {current}) ===");
    if plan.semesters.is_empty() {
        println!("No courses are assigned to a semester.");
    }

    for semester in &plan.semesters {
        let gpa = semester
            .gpa
            .map_or_else(|| "-".to_string(), |gpa| format!("{gpa:.2}"));
        println!(
            "\n{} [{}] {:.1} credits, average {gpa}",
            semester.semester, semester.status, semester.credits
        );
        for course in &semester.courses {
            println!("  - {course}");
        }
    }

    if !plan.unassigned.is_empty() {
        println!("\nUnassigned:");
        for course in &plan.unassigned {
            println!("  - {course}");
        }
    }

    Ok(())
}
