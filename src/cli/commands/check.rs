//! Check command handler

use nu_prereqs::core::models::{tree_to_string, Catalog, Transcript};
use nu_prereqs::core::validator::PrerequisiteValidator;
use nu_prereqs::{info, verbose};

/// Validate a transcript against one target course
///
/// Returns `true` when the student may take the course.
pub fn run(catalog: &Catalog, target: &str, transcript: &Transcript, json: bool) -> bool {
    let validator = PrerequisiteValidator::new(catalog);
    let result = validator.validate_prerequisites(target, transcript);
    info!(
        "Checked {} against {} completed course(s): valid={}",
        result.target_course,
        transcript.len(),
        result.is_valid
    );

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(out) => println!("{out}"),
            Err(e) => eprintln!("✗ Failed to serialize result: {e}"),
        }
        return result.is_valid;
    }

    let mark = if result.is_valid { "✓" } else { "✗" };
    println!("{mark} {}", result.message);
    if result.prerequisite_tree.is_some() {
        verbose!(
            "  Requirement: {}",
            tree_to_string(result.prerequisite_tree.as_ref())
        );
    }
    if !result.missing_courses.is_empty() {
        println!("\nStill needed:");
        for course_id in &result.missing_courses {
            let title = catalog.get_course(course_id).map_or("", |c| c.title.as_str());
            println!("  {course_id:<12} {title}");
        }
    }
    result.is_valid
}
