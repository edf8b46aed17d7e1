//! HTML report generator
//!
//! The generated page is self-contained apart from Mermaid, which is loaded
//! from a CDN to draw the prerequisite chain.

use crate::core::report::{ReportContext, ReportGenerator, ReportView};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlTemplate<'a> {
    view: &'a ReportView,
}

/// HTML report generator
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let view = ReportView::from(ctx);
        Ok(HtmlTemplate { view: &view }.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Catalog, Course, Transcript};
    use crate::core::validator::PrerequisiteValidator;

    #[test]
    fn test_html_report_escapes_titles() {
        let mut catalog = Catalog::new("sfu".to_string());
        catalog.add_course(Course::new("Proofs & <Logic>".to_string(), "MACM", "101", 3.0, ""));
        catalog.add_course(Course::new("Next".to_string(), "CMPT", "225", 3.0, "MACM 101"));
        let validator = PrerequisiteValidator::new(&catalog);
        let transcript = Transcript::new();
        let ctx = ReportContext::new(&validator, &transcript, Some("CMPT 225"), 5);

        let report = HtmlReporter::new().render(&ctx).unwrap();

        assert!(report.starts_with("<!DOCTYPE html>"));
        assert!(report.contains("Proofs &amp; &lt;Logic&gt;"));
        assert!(report.contains("Missing prerequisites: MACM-101"));
        assert!(report.contains("class=\"mermaid\""));
    }
}
