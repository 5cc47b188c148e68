//! JSON report generator
//!
//! Emits the unrounded summary and semester plan for other tools to consume.

use crate::core::planner::SemesterPlan;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::summary::ProgressSummary;
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a ProgressSummary,
    plan: &'a SemesterPlan,
}

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let report = JsonReport {
            summary: ctx.summary,
            plan: ctx.plan,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::fixtures::{profile, records, CURRENT};

    #[test]
    fn renders_structured_summary() {
        let profile = profile();
        let records = records();
        let summary = ProgressSummary::compute(&profile, &records, CURRENT);
        let plan = SemesterPlan::build(&records, CURRENT);
        let ctx = ReportContext::new(&profile, &records, &summary, &plan);

        let output = JsonReporter::new().render(&ctx).expect("render json");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");

        assert_eq!(value["summary"]["student"], "Sam Rivera");
        assert_eq!(value["summary"]["as_of"], "Fall 2024");
        assert_eq!(value["summary"]["weighted_average"], 80.0);
        assert_eq!(value["summary"]["semester_gpas"][0]["semester"], "Fall 2023");
        assert_eq!(value["plan"]["unassigned"][0], "Writing <Seminar>");
        assert_eq!(value["plan"]["semesters"][2]["status"], "in-progress");
    }
}
