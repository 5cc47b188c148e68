//! What-if command handler

use super::{current_semester, load_record};
use crate::args::RecordInput;
use gpa_planner::config::Config;
use gpa_planner::core::projection::{what_if, HypotheticalCourse};
use gpa_planner::{error, info};

/// Run the what-if command
pub fn run(input: &RecordInput, courses: &[HypotheticalCourse], config: &Config) {
    if let Err(err) = print_what_if(input, courses, config) {
        error!("What-if failed for {}: {err}", input.file.display());
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn print_what_if(
    input: &RecordInput,
    courses: &[HypotheticalCourse],
    config: &Config,
) -> Result<(), String> {
    let record = load_record(&input.file)?;
    let current = current_semester(input.as_of, config);
    let outcome = what_if(&record.courses, courses, current);
    info!("Simulated {} hypothetical courses", courses.len());

    println!("\n=== What If (as of {current}) ===");
    for course in courses {
        println!(
            "  + {} ({:.1} credits) at {:.2}",
            course.name, course.credits, course.grade
        );
    }
    println!("Current Average: {:.2}", outcome.before);
    println!("New Average: {:.2}", outcome.after);
    println!("Change: {:+.2}", outcome.delta);

    Ok(())
}
