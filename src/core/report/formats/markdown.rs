//! Markdown report generator
//!
//! Renders progress reports as Markdown tables. These reports render well in
//! GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator, ReportView};
use askama::Template;
use std::error::Error;

/// Compiled Markdown template
#[derive(Template)]
#[template(path = "report.md", escape = "none")]
struct MarkdownTemplate {
    view: ReportView,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = MarkdownTemplate { view: ctx.view() };
        Ok(template.render()?)
    }
}
