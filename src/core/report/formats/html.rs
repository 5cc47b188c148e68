//! HTML report generator
//!
//! Generates a self-contained HTML page with embedded CSS. All text is
//! HTML-escaped by the template.

use crate::core::report::{ReportContext, ReportGenerator, ReportView};
use askama::Template;
use std::error::Error;

/// Compiled HTML template
#[derive(Template)]
#[template(path = "report.html")]
struct HtmlTemplate {
    view: ReportView,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = HtmlTemplate { view: ctx.view() };
        Ok(template.render()?)
    }
}
