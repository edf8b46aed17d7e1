//! Transcript report generation
//!
//! Renders what a student has completed, what they could take next, and
//! optionally how far they are from one target course. Markdown reports embed
//! the target's prerequisite chain as a Mermaid flowchart; HTML reports load
//! Mermaid from a CDN.

pub mod formats;
pub mod visualization;

use crate::core::models::{tree_to_string, Catalog, CourseId, Transcript};
use crate::core::suggest::CourseSuggestion;
use crate::core::validator::{PrerequisiteValidator, ValidationResult};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};
pub use visualization::MermaidGenerator;

/// Everything known about the report's target course
#[derive(Debug, Clone)]
pub struct TargetReport {
    /// Validation of the transcript against the target
    pub validation: ValidationResult,
    /// Every transitive prerequisite of the target, sorted
    pub chain: Vec<CourseId>,
    /// Mermaid flowchart of the chain (without code fences)
    pub diagram: String,
}

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Catalog the report is computed against
    pub catalog: &'a Catalog,
    /// The student's completed courses
    pub transcript: &'a Transcript,
    /// Ranked next-course suggestions
    pub suggestions: Vec<CourseSuggestion>,
    /// Target course details, when a target was requested
    pub target: Option<TargetReport>,
}

impl<'a> ReportContext<'a> {
    /// Run every query a report needs within one validation session
    #[must_use]
    pub fn new(
        validator: &PrerequisiteValidator<'a>,
        transcript: &'a Transcript,
        target: Option<&str>,
        limit: usize,
    ) -> Self {
        let target = target.map(|target| {
            let validation = validator.validate_prerequisites(target, transcript);
            let chain = validator.prerequisite_chain(&validation.target_course);
            let diagram = MermaidGenerator::chain_diagram(
                validator.graph(),
                validator.catalog(),
                &validation.target_course,
                transcript,
            );
            TargetReport {
                validation,
                chain,
                diagram,
            }
        });

        Self {
            catalog: validator.catalog(),
            transcript,
            suggestions: validator.suggest_next(transcript, limit),
            target,
        }
    }

    /// Title of a course, or `-` when the catalog does not list it
    #[must_use]
    pub fn course_title(&self, course_id: &str) -> &str {
        self.catalog
            .get_course(course_id)
            .map_or("-", |c| c.title.as_str())
    }

    /// Total credits of the completed courses the catalog knows about
    #[must_use]
    pub fn completed_credits(&self) -> f32 {
        self.transcript
            .sorted()
            .iter()
            .filter_map(|id| self.catalog.get_course(id))
            .map(|c| c.credits)
            .sum()
    }
}

/// Flattened, display-ready form of a [`ReportContext`] shared by the templates
#[derive(Debug, Clone, Default)]
pub(crate) struct ReportView {
    pub catalog_name: String,
    pub version: String,
    pub completed_credits: String,
    pub completed: Vec<CourseRow>,
    pub suggestions: Vec<SuggestionRow>,
    pub has_target: bool,
    pub target_id: String,
    pub target_title: String,
    pub target_eligible: bool,
    pub target_message: String,
    pub target_requirement: String,
    pub target_chain: String,
    pub target_diagram: String,
}

#[derive(Debug, Clone)]
pub(crate) struct CourseRow {
    pub course_id: String,
    pub title: String,
}

#[derive(Debug, Clone)]
pub(crate) struct SuggestionRow {
    pub rank: usize,
    pub course_id: String,
    pub title: String,
    pub credits: String,
    pub eligible: bool,
    pub missing: String,
    pub unlocks: usize,
}

impl From<&ReportContext<'_>> for ReportView {
    fn from(ctx: &ReportContext<'_>) -> Self {
        let completed = ctx
            .transcript
            .sorted()
            .into_iter()
            .map(|course_id| CourseRow {
                title: ctx.course_title(&course_id).to_string(),
                course_id,
            })
            .collect();

        let suggestions = ctx
            .suggestions
            .iter()
            .enumerate()
            .map(|(idx, s)| SuggestionRow {
                rank: idx + 1,
                course_id: s.course_id.clone(),
                title: s.title.clone(),
                credits: format!("{:.1}", s.credits),
                eligible: s.is_eligible,
                missing: if s.missing_prerequisites.is_empty() {
                    "-".to_string()
                } else {
                    s.missing_prerequisites.join(", ")
                },
                unlocks: s.unlocks,
            })
            .collect();

        let mut view = Self {
            catalog_name: ctx.catalog.name.clone(),
            version: crate::get_version().to_string(),
            completed_credits: format!("{:.1}", ctx.completed_credits()),
            completed,
            suggestions,
            ..Self::default()
        };

        if let Some(target) = &ctx.target {
            let validation = &target.validation;
            view.has_target = true;
            view.target_id.clone_from(&validation.target_course);
            view.target_title = ctx.course_title(&validation.target_course).to_string();
            view.target_eligible = validation.is_valid;
            view.target_message.clone_from(&validation.message);
            view.target_requirement = tree_to_string(validation.prerequisite_tree.as_ref());
            view.target_chain = if target.chain.is_empty() {
                "None".to_string()
            } else {
                target.chain.join(", ")
            };
            view.target_diagram.clone_from(&target.diagram);
        }

        view
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
