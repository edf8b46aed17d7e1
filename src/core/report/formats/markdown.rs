//! Markdown report generator
//!
//! Generates transcript reports in Markdown format with an embedded Mermaid
//! diagram. These reports render well in GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator, ReportView};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "report.md")]
struct MarkdownTemplate<'a> {
    view: &'a ReportView,
}

/// Markdown report generator
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let view = ReportView::from(ctx);
        Ok(MarkdownTemplate { view: &view }.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Catalog, Course, Transcript};
    use crate::core::validator::PrerequisiteValidator;

    #[test]
    fn test_markdown_report() {
        let mut catalog = Catalog::new("sfu".to_string());
        catalog.add_course(Course::new("Intro".to_string(), "CMPT", "120", 3.0, ""));
        catalog.add_course(Course::new("Next".to_string(), "CMPT", "125", 3.0, "CMPT 120"));
        let validator = PrerequisiteValidator::new(&catalog);
        let transcript: Transcript = ["CMPT 120"].iter().collect();
        let ctx = ReportContext::new(&validator, &transcript, Some("CMPT-125"), 5);

        let report = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(report.contains("# Prerequisite Report: sfu"));
        assert!(report.contains("| CMPT-120 | Intro |"));
        assert!(report.contains("| 1 | CMPT-125 | Next |"));
        assert!(report.contains("You meet all prerequisites for CMPT-125"));
        assert!(report.contains("```mermaid\nflowchart LR"));
    }
}
