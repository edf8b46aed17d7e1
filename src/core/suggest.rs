//! Next-course suggestions

use crate::core::models::{Catalog, Course, CourseId, PrereqNode, PrerequisiteGraph, Transcript};
use crate::core::validator::evaluate;
use serde::Serialize;
use std::cmp::Reverse;

/// A course a student could plan to take next
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSuggestion {
    /// Canonical course id
    pub course_id: CourseId,
    /// Course title
    pub title: String,
    /// Department code
    pub dept: String,
    /// Course number
    pub number: String,
    /// Credit units
    pub credits: f32,
    /// Requirement text from the catalog
    pub prerequisites: String,
    /// Parsed requirement tree
    pub prerequisites_logic: Option<PrereqNode>,
    /// Whether every prerequisite is met
    pub is_eligible: bool,
    /// Courses still needed (empty when eligible)
    pub missing_prerequisites: Vec<CourseId>,
    /// Number of courses this one transitively unlocks
    pub unlocks: usize,
}

impl CourseSuggestion {
    fn new(course: &Course, is_eligible: bool, missing: Vec<CourseId>, unlocks: usize) -> Self {
        Self {
            course_id: course.id().to_string(),
            title: course.title.clone(),
            dept: course.dept.clone(),
            number: course.number.clone(),
            credits: course.credits,
            prerequisites: course.prerequisites.raw_text.clone(),
            prerequisites_logic: course.tree().cloned(),
            is_eligible,
            missing_prerequisites: missing,
            unlocks,
        }
    }
}

/// Classify one course for a transcript
///
/// # Returns
/// `Some((is_eligible, missing))` when the course should be suggested:
/// - no prerequisites: eligible
/// - prerequisites met: eligible
/// - only unresolved requirement text: eligible
/// - some course in the tree already completed: not eligible, with what is missing
fn classify(course: &Course, transcript: &Transcript) -> Option<(bool, Vec<CourseId>)> {
    let Some(tree) = course.tree() else {
        return Some((true, Vec::new()));
    };

    let evaluation = evaluate(Some(tree), transcript);
    let has_real_prereqs = tree.has_real_courses();

    if evaluation.satisfied || !has_real_prereqs {
        Some((true, Vec::new()))
    } else if tree.any_course_completed(transcript) {
        Some((false, evaluation.missing))
    } else {
        None
    }
}

/// Suggest courses to take next
///
/// Completed courses are skipped. Eligible courses come before partially
/// started ones; within each group, courses that unlock more of the catalog
/// come first, and ties keep catalog order. At most `limit` suggestions are
/// returned.
#[must_use]
pub fn suggest_next(
    catalog: &Catalog,
    graph: &PrerequisiteGraph,
    transcript: &Transcript,
    limit: usize,
) -> Vec<CourseSuggestion> {
    let mut suggestions: Vec<CourseSuggestion> = catalog
        .courses()
        .iter()
        .filter(|course| !transcript.contains(course.id()))
        .filter_map(|course| {
            classify(course, transcript).map(|(is_eligible, missing)| {
                let unlocks = graph.unlocked_by(course.id()).len();
                CourseSuggestion::new(course, is_eligible, missing, unlocks)
            })
        })
        .collect();

    suggestions.sort_by_key(|s| (!s.is_eligible, Reverse(s.unlocks)));
    suggestions.truncate(limit);

    crate::debug!(
        "Suggested {} course(s) for a transcript of {}",
        suggestions.len(),
        transcript.len()
    );
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new("test".to_string());
        for (number, prereqs) in [
            ("120", ""),
            ("125", "CMPT 120"),
            ("225", "CMPT 125 and MACM 101"),
            ("300", "CMPT 225"),
            ("400", "Permission of the instructor"),
        ] {
            catalog.add_course(Course::new(format!("CMPT {number}"), "CMPT", number, 3.0, prereqs));
        }
        catalog
    }

    fn suggest(completed: &[&str], limit: usize) -> Vec<CourseSuggestion> {
        let catalog = catalog();
        let graph = catalog.build_graph();
        let transcript: Transcript = completed.iter().collect();
        suggest_next(&catalog, &graph, &transcript, limit)
    }

    fn ids(suggestions: &[CourseSuggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.course_id.as_str()).collect()
    }

    #[test]
    fn test_empty_transcript() {
        let suggestions = suggest(&[], 10);
        assert_eq!(ids(&suggestions), vec!["CMPT-120", "CMPT-400"]);
        assert!(suggestions.iter().all(|s| s.is_eligible));
    }

    #[test]
    fn test_partial_progress_is_surfaced() {
        let suggestions = suggest(&["CMPT 120", "CMPT 125"], 10);
        let cmpt225 = suggestions
            .iter()
            .find(|s| s.course_id == "CMPT-225")
            .expect("CMPT-225 should be suggested");
        assert!(!cmpt225.is_eligible);
        assert_eq!(cmpt225.missing_prerequisites, vec!["MACM-101"]);
        assert!(!ids(&suggestions).contains(&"CMPT-300"));
        assert!(!ids(&suggestions).contains(&"CMPT-120"));
    }

    #[test]
    fn test_eligible_ranked_first_then_by_unlocks() {
        let suggestions = suggest(&["CMPT 120", "CMPT 125"], 10);
        assert_eq!(ids(&suggestions), vec!["CMPT-400", "CMPT-225"]);

        let suggestions = suggest(&["MACM 101"], 10);
        assert_eq!(ids(&suggestions), vec!["CMPT-120", "CMPT-400", "CMPT-225"]);
        assert_eq!(suggestions[0].unlocks, 3);
    }

    #[test]
    fn test_limit_caps_results() {
        assert_eq!(suggest(&[], 1).len(), 1);
        assert!(suggest(&[], 0).is_empty());
    }
}
