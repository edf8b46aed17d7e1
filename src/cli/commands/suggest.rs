//! Suggest command handler

use nu_prereqs::core::models::{Catalog, Transcript};
use nu_prereqs::core::validator::PrerequisiteValidator;

/// Print ranked next-course suggestions
pub fn run(catalog: &Catalog, transcript: &Transcript, limit: usize, json: bool) {
    let validator = PrerequisiteValidator::new(catalog);
    let suggestions = validator.suggest_next(transcript, limit);

    if json {
        match serde_json::to_string_pretty(&suggestions) {
            Ok(out) => println!("{out}"),
            Err(e) => eprintln!("✗ Failed to serialize suggestions: {e}"),
        }
        return;
    }

    if suggestions.is_empty() {
        println!("No courses to suggest.");
        return;
    }

    println!("=== Suggested Next Courses ===\n");
    for (idx, s) in suggestions.iter().enumerate() {
        let status = if s.is_eligible {
            "eligible".to_string()
        } else {
            format!("needs {}", s.missing_prerequisites.join(", "))
        };
        println!(
            "{:>2}. {:<12} {:<40} unlocks {:<3} {status}",
            idx + 1,
            s.course_id,
            s.title,
            s.unlocks
        );
    }
}
