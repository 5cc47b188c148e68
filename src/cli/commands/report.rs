//! Report command handler
//!
//! Generates progress reports in Markdown, HTML, or JSON.

use super::{current_semester, load_record};
use crate::args::RecordInput;
use gpa_planner::config::Config;
use gpa_planner::core::planner::{SemesterPlan, StudentRecord};
use gpa_planner::core::report::{
    HtmlReporter, JsonReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use gpa_planner::core::summary::ProgressSummary;
use gpa_planner::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `input` - Record file and optional `--as-of` semester
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html, json)
/// * `config` - Configuration containing the default reports directory
pub fn run(input: &RecordInput, output_file: Option<&Path>, format_str: &str, config: &Config) {
    if let Err(err) = generate_report(input, output_file, format_str, config) {
        error!("Report generation failed for {}: {err}", input.file.display());
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Default output path: `<reports_dir>/<input stem>_report.<ext>`
fn default_output_path(
    input_file: &Path,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let filename = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("student");
    Ok(reports_dir.join(format!("{filename}_report.{}", format.extension())))
}

/// Write the report to a file in the specified format
fn write_report(
    record: &StudentRecord,
    summary: &ProgressSummary,
    plan: &SemesterPlan,
    format: ReportFormat,
    output_path: &Path,
) -> Result<(), String> {
    let ctx = ReportContext::new(&record.student, &record.courses, summary, plan);

    let result = match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, output_path),
        ReportFormat::Html => HtmlReporter::new().generate(&ctx, output_path),
        ReportFormat::Json => JsonReporter::new().generate(&ctx, output_path),
    };

    result.map_err(|e| format!("✗ Failed to generate {format} report: {e}"))
}

fn generate_report(
    input: &RecordInput,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: markdown, html, or json"))?;

    let record = load_record(&input.file)?;
    let current = current_semester(input.as_of, config);
    let summary = ProgressSummary::compute(&record.student, &record.courses, current);
    let plan = SemesterPlan::build(&record.courses, current);

    let output_path = match output_file {
        Some(path) => path.to_path_buf(),
        None => default_output_path(&input.file, format, config)?,
    };

    write_report(&record, &summary, &plan, format, &output_path)?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());

    Ok(())
}
