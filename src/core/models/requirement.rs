//! Boolean prerequisite requirement trees

use super::course_id::{normalize_course_id, CourseId};
use super::transcript::Transcript;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in a prerequisite requirement tree
///
/// Serialized as a tagged record so storage layers can persist it without
/// understanding it:
/// `{"type": "COURSE", "course": "CMPT-120"}`,
/// `{"type": "AND" | "OR", "children": [...]}`,
/// `{"type": "UNKNOWN", "expression": "..."}`.
///
/// Groups built through [`PrereqNode::all`] and [`PrereqNode::any`] are never
/// empty and never wrap a single child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum PrereqNode {
    /// A single required course
    Course {
        /// Canonical course id
        course: CourseId,
    },
    /// Every child must be satisfied
    And {
        /// Ordered child requirements
        children: Vec<PrereqNode>,
    },
    /// At least one child must be satisfied
    Or {
        /// Ordered alternative requirements
        children: Vec<PrereqNode>,
    },
    /// Requirement text that could not be resolved to a course; never blocks
    Unknown {
        /// The original fragment
        expression: String,
    },
}

impl PrereqNode {
    /// Create a course leaf
    #[must_use]
    pub fn course(id: impl Into<CourseId>) -> Self {
        Self::Course { course: id.into() }
    }

    /// Create an unknown leaf holding the unresolved fragment
    #[must_use]
    pub fn unknown(expression: impl Into<String>) -> Self {
        Self::Unknown {
            expression: expression.into(),
        }
    }

    /// Conjunction of `children`, collapsing empty and single-child groups
    #[must_use]
    pub fn all(mut children: Vec<Self>) -> Option<Self> {
        match children.len() {
            0 => None,
            1 => children.pop(),
            _ => Some(Self::And { children }),
        }
    }

    /// Disjunction of `children`, collapsing empty and single-child groups
    #[must_use]
    pub fn any(mut children: Vec<Self>) -> Option<Self> {
        match children.len() {
            0 => None,
            1 => children.pop(),
            _ => Some(Self::Or { children }),
        }
    }

    /// Operator keyword for group nodes
    const fn operator(&self) -> Option<&'static str> {
        match self {
            Self::And { .. } => Some("AND"),
            Self::Or { .. } => Some("OR"),
            Self::Course { .. } | Self::Unknown { .. } => None,
        }
    }

    /// All course ids in the tree, in pre-order, without duplicates
    #[must_use]
    pub fn flatten_courses(&self) -> Vec<CourseId> {
        let mut courses = Vec::new();
        self.collect_courses(&mut courses);
        courses
    }

    fn collect_courses(&self, out: &mut Vec<CourseId>) {
        match self {
            Self::Course { course } => {
                if !out.contains(course) {
                    out.push(course.clone());
                }
            }
            Self::And { children } | Self::Or { children } => {
                for child in children {
                    child.collect_courses(out);
                }
            }
            Self::Unknown { .. } => {}
        }
    }

    /// Whether the tree references at least one real course
    ///
    /// A tree made only of unknown leaves is recommendation text, not a
    /// verifiable requirement.
    #[must_use]
    pub fn has_real_courses(&self) -> bool {
        match self {
            Self::Course { .. } => true,
            Self::And { children } | Self::Or { children } => {
                children.iter().any(Self::has_real_courses)
            }
            Self::Unknown { .. } => false,
        }
    }

    /// Whether any course leaf anywhere in the tree is on the transcript
    #[must_use]
    pub fn any_course_completed(&self, transcript: &Transcript) -> bool {
        match self {
            Self::Course { course } => transcript.contains(course),
            Self::And { children } | Self::Or { children } => children
                .iter()
                .any(|child| child.any_course_completed(transcript)),
            Self::Unknown { .. } => false,
        }
    }

    /// Rebuild a tree from outside the parser into canonical form
    ///
    /// Course leaves are normalized and groups are rebuilt bottom-up through
    /// [`PrereqNode::all`] and [`PrereqNode::any`], so empty groups vanish and
    /// single-child groups collapse. A tree with nothing left returns `None`.
    #[must_use]
    pub fn into_canonical(self) -> Option<Self> {
        match self {
            Self::Course { course } => {
                let course = normalize_course_id(&course);
                (!course.is_empty()).then(|| Self::course(course))
            }
            Self::And { children } => {
                Self::all(children.into_iter().filter_map(Self::into_canonical).collect())
            }
            Self::Or { children } => {
                Self::any(children.into_iter().filter_map(Self::into_canonical).collect())
            }
            unknown @ Self::Unknown { .. } => Some(unknown),
        }
    }
}

impl fmt::Display for PrereqNode {
    /// Infix rendering; a child is parenthesized only when its operator differs from its parent's.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Course { course } => f.write_str(course),
            Self::Unknown { expression } => f.write_str(expression),
            Self::And { children } | Self::Or { children } => {
                let operator = self.operator().unwrap_or_default();
                for (idx, child) in children.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " {operator} ")?;
                    }
                    match child.operator() {
                        Some(child_op) if child_op != operator => write!(f, "( {child} )")?,
                        _ => write!(f, "{child}")?,
                    }
                }
                Ok(())
            }
        }
    }
}

/// Render an optional tree; an absent tree renders as an empty string
#[must_use]
pub fn tree_to_string(tree: Option<&PrereqNode>) -> String {
    tree.map(ToString::to_string).unwrap_or_default()
}
