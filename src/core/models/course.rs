//! Catalog course and prerequisite entry models

use super::course_id::{normalize_course_id, CourseId};
use super::requirement::PrereqNode;
use crate::core::parser;
use serde::{Deserialize, Serialize};

/// A course's prerequisite text together with its parsed tree
///
/// `tree == None` means the course has no prerequisites. That is different
/// from a tree made of unknown leaves, which means requirement text existed
/// but could not be resolved to courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrerequisiteEntry {
    /// Canonical id of the course these prerequisites belong to
    pub course_id: CourseId,
    /// Requirement text as it appeared in the catalog (possibly empty)
    pub raw_text: String,
    /// Parsed requirement tree
    pub tree: Option<PrereqNode>,
}

impl PrerequisiteEntry {
    /// Create an entry from an already-parsed tree
    #[must_use]
    pub fn new(course_id: &str, raw_text: String, tree: Option<PrereqNode>) -> Self {
        Self {
            course_id: normalize_course_id(course_id),
            raw_text,
            tree,
        }
    }

    /// Parse `raw_text` and create the entry
    #[must_use]
    pub fn from_raw(course_id: &str, raw_text: &str) -> Self {
        Self::new(course_id, raw_text.to_string(), parser::parse(raw_text))
    }

    /// Whether the course has no prerequisites at all
    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        self.tree.is_none()
    }
}

/// Represents a course in a catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course title (e.g., "Data Structures and Programming")
    pub title: String,

    /// Department code (e.g., "CMPT")
    pub dept: String,

    /// Course number (e.g., "225", "105W")
    pub number: String,

    /// Credit units (can be fractional)
    pub credits: f32,

    /// Prerequisites for this course
    pub prerequisites: PrerequisiteEntry,
}

impl Course {
    /// Create a new course and parse its prerequisite text
    ///
    /// # Arguments
    /// * `title` - Full course title
    /// * `dept` - Department code
    /// * `number` - Course number
    /// * `credits` - Credit units
    /// * `prerequisites_raw` - Requirement text from the catalog
    #[must_use]
    pub fn new(
        title: String,
        dept: &str,
        number: &str,
        credits: f32,
        prerequisites_raw: &str,
    ) -> Self {
        let dept = dept.trim().to_uppercase();
        let number = number.trim().to_uppercase();
        let id = format!("{dept}-{number}");
        Self {
            title,
            prerequisites: PrerequisiteEntry::from_raw(&id, prerequisites_raw),
            dept,
            number,
            credits,
        }
    }

    /// Canonical course id (`DEPT-NUMBER`)
    #[must_use]
    pub fn id(&self) -> &str {
        &self.prerequisites.course_id
    }

    /// Parsed prerequisite tree, if the course has prerequisites
    #[must_use]
    pub const fn tree(&self) -> Option<&PrereqNode> {
        self.prerequisites.tree.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "Data Structures and Programming".to_string(),
            "cmpt",
            "225",
            3.0,
            "CMPT 125 or CMPT 135, and MACM 101",
        );

        assert_eq!(course.id(), "CMPT-225");
        assert_eq!(course.dept, "CMPT");
        assert!((course.credits - 3.0).abs() < f32::EPSILON);
        assert_eq!(
            course.tree().map(PrereqNode::flatten_courses),
            Some(vec![
                "CMPT-125".to_string(),
                "CMPT-135".to_string(),
                "MACM-101".to_string()
            ])
        );
    }

    #[test]
    fn test_course_without_prerequisites() {
        let course = Course::new("Intro".to_string(), "CMPT", "120", 3.0, "");
        assert!(course.prerequisites.is_unrestricted());
        assert!(course.tree().is_none());
    }

    #[test]
    fn test_entry_distinguishes_unknown_from_absent() {
        let entry = PrerequisiteEntry::from_raw("CMPT 499", "Permission of the department");
        assert!(!entry.is_unrestricted());
        assert_eq!(
            entry.tree,
            Some(PrereqNode::unknown("Permission of the department"))
        );
    }
}
