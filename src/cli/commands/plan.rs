//! Plan command handler
//!
//! Prints the graduation timeline and the heaviest upcoming semester.

use super::{current_semester, load_record};
use crate::args::RecordInput;
use gpa_planner::config::Config;
use gpa_planner::core::planner::{GraduationTimeline, SemesterPlan};
use gpa_planner::error;

/// Run the plan command
pub fn run(input: &RecordInput, config: &Config) {
    if let Err(err) = print_plan(input, config) {
        error!("Planning failed for {}: {err}", input.file.display());
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn print_plan(input: &RecordInput, config: &Config) -> Result<(), String> {
    let record = load_record(&input.file)?;
    let current = current_semester(input.as_of, config);
    let degree = &record.student.degree;
    let timeline = GraduationTimeline::compute(degree, &record.courses, current);

    println!("\n=== Graduation Plan (as of {current}) ===");
    println!("Credit Requirement: {:.1}", degree.credit_requirement);
    println!("Remaining Credits: {:.1}", timeline.remaining_credits);
    println!("Planned Credits: {:.1}", timeline.planned_credits);

    match timeline.graduation_semester {
        Some(graduation) => {
            println!("Expected Graduation: {graduation}");
            println!("Remaining Terms: {}", timeline.remaining_terms);
        }
        None => println!("Expected Graduation: N/A (no graduation year on record)"),
    }

    if let Some(per_term) = timeline.credits_per_term {
        println!("Credits Per Term Needed: {per_term:.1}");
    }

    if timeline.on_track {
        println!("✓ Planned courses cover the remaining credits");
    } else {
        println!(
            "⚠️  {:.1} credits are not yet planned",
            (timeline.remaining_credits - timeline.planned_credits).max(0.0)
        );
    }

    let plan = SemesterPlan::build(&record.courses, current);
    if let Some(peak) = plan.peak_load_from(current) {
        println!(
            "Heaviest Upcoming Semester: {} ({:.1} credits)",
            peak.semester, peak.credits
        );
    }

    Ok(())
}
