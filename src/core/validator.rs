//! Transcript validation against prerequisite trees

use crate::core::models::{
    normalize_course_id, Catalog, CourseId, PrereqNode, PrerequisiteGraph, Transcript,
};
use crate::core::suggest::{suggest_next, CourseSuggestion};
use serde::Serialize;
use std::cell::OnceCell;

/// Outcome of evaluating one requirement tree against a transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Whether the requirement is met
    pub satisfied: bool,
    /// Courses that would clear the requirement, first-seen order, no duplicates
    pub missing: Vec<CourseId>,
}

impl Evaluation {
    const fn met() -> Self {
        Self {
            satisfied: true,
            missing: Vec::new(),
        }
    }
}

/// Evaluate a requirement tree against a transcript
///
/// - `Course`: met iff the course is on the transcript; otherwise it is missing.
/// - `And`: met iff every child is met; missing is the union over all children.
/// - `Or`: met as soon as one child is met; otherwise missing is the union
///   of every alternative.
/// - `Unknown`: always met. Unresolvable text never blocks a student.
///
/// An absent tree means no prerequisites and is always met.
#[must_use]
pub fn evaluate(tree: Option<&PrereqNode>, transcript: &Transcript) -> Evaluation {
    tree.map_or_else(Evaluation::met, |node| evaluate_node(node, transcript))
}

fn evaluate_node(node: &PrereqNode, transcript: &Transcript) -> Evaluation {
    match node {
        PrereqNode::Course { course } => {
            if transcript.contains(course) {
                Evaluation::met()
            } else {
                Evaluation {
                    satisfied: false,
                    missing: vec![course.clone()],
                }
            }
        }
        PrereqNode::And { children } => {
            let mut result = Evaluation::met();
            for child in children {
                let child_result = evaluate_node(child, transcript);
                if !child_result.satisfied {
                    result.satisfied = false;
                    merge_missing(&mut result.missing, child_result.missing);
                }
            }
            result
        }
        PrereqNode::Or { children } => {
            let mut options = Vec::new();
            for child in children {
                let child_result = evaluate_node(child, transcript);
                if child_result.satisfied {
                    return Evaluation::met();
                }
                merge_missing(&mut options, child_result.missing);
            }
            Evaluation {
                satisfied: false,
                missing: options,
            }
        }
        PrereqNode::Unknown { .. } => Evaluation::met(),
    }
}

fn merge_missing(into: &mut Vec<CourseId>, from: Vec<CourseId>) {
    for course in from {
        if !into.contains(&course) {
            into.push(course);
        }
    }
}

/// Validation result for a single target course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Normalized target course id
    pub target_course: CourseId,
    /// Whether the student may take the course
    pub is_valid: bool,
    /// Courses still needed
    pub missing_courses: Vec<CourseId>,
    /// The target's requirement tree, if any
    pub prerequisite_tree: Option<PrereqNode>,
    /// Human-readable summary
    pub message: String,
}

/// One validation session over a catalog snapshot
///
/// The prerequisite graph is built on the first graph query and dropped with
/// the session. Create a new session when the catalog changes.
#[derive(Debug)]
pub struct PrerequisiteValidator<'a> {
    catalog: &'a Catalog,
    graph: OnceCell<PrerequisiteGraph>,
}

impl<'a> PrerequisiteValidator<'a> {
    /// Start a session over `catalog`
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            graph: OnceCell::new(),
        }
    }

    /// The catalog this session reads from
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The session's prerequisite graph, built on first use
    #[must_use]
    pub fn graph(&self) -> &PrerequisiteGraph {
        self.graph.get_or_init(|| self.catalog.build_graph())
    }

    /// Check whether a transcript meets a course's prerequisites
    #[must_use]
    pub fn validate_prerequisites(&self, target: &str, transcript: &Transcript) -> ValidationResult {
        let target_course = normalize_course_id(target);

        let Some(course) = self.catalog.get_course(&target_course) else {
            return ValidationResult {
                message: format!("Course {target_course} not found"),
                target_course,
                is_valid: false,
                missing_courses: Vec::new(),
                prerequisite_tree: None,
            };
        };

        let Some(tree) = course.tree() else {
            return ValidationResult {
                message: format!("{target_course} has no prerequisites"),
                target_course,
                is_valid: true,
                missing_courses: Vec::new(),
                prerequisite_tree: None,
            };
        };

        let evaluation = evaluate(Some(tree), transcript);
        let message = if evaluation.satisfied {
            format!("You meet all prerequisites for {target_course}")
        } else {
            format!("Missing prerequisites: {}", evaluation.missing.join(", "))
        };

        ValidationResult {
            target_course,
            is_valid: evaluation.satisfied,
            missing_courses: evaluation.missing,
            prerequisite_tree: Some(tree.clone()),
            message,
        }
    }

    /// Courses still needed before `target` may be taken
    #[must_use]
    pub fn missing_prerequisites(&self, target: &str, transcript: &Transcript) -> Vec<CourseId> {
        self.validate_prerequisites(target, transcript).missing_courses
    }

    /// Every transitive prerequisite of a course
    #[must_use]
    pub fn prerequisite_chain(&self, course_id: &str) -> Vec<CourseId> {
        self.graph().prerequisite_chain(course_id)
    }

    /// Every course transitively unlocked by a course
    #[must_use]
    pub fn unlocked_by(&self, course_id: &str) -> Vec<CourseId> {
        self.graph().unlocked_by(course_id)
    }

    /// Ranked next-course suggestions for a transcript
    #[must_use]
    pub fn suggest_next(&self, transcript: &Transcript, limit: usize) -> Vec<CourseSuggestion> {
        suggest_next(self.catalog, self.graph(), transcript, limit)
    }
}
