//! Student transcript model

use super::course_id::{normalize_course_id, CourseId};
use std::collections::HashSet;

/// The set of courses a student has completed
///
/// Ids are normalized on the way in, so "cmpt 120" and "CMPT-120" are the
/// same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    completed: HashSet<CourseId>,
}

impl Transcript {
    /// Create an empty transcript
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed course. Returns `false` if it was already present.
    pub fn add(&mut self, course: &str) -> bool {
        self.completed.insert(normalize_course_id(course))
    }

    /// Whether the (already canonical) course id has been completed
    #[must_use]
    pub fn contains(&self, course_id: &str) -> bool {
        self.completed.contains(course_id)
    }

    /// Number of completed courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    /// Whether no courses have been completed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Completed course ids, sorted
    #[must_use]
    pub fn sorted(&self) -> Vec<CourseId> {
        let mut courses: Vec<CourseId> = self.completed.iter().cloned().collect();
        courses.sort();
        courses
    }
}

impl<S: AsRef<str>> FromIterator<S> for Transcript {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut transcript = Self::new();
        for course in iter {
            transcript.add(course.as_ref());
        }
        transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_normalized() {
        let transcript: Transcript = ["cmpt 120", "MACM-101"].into_iter().collect();
        assert!(transcript.contains("CMPT-120"));
        assert!(transcript.contains("MACM-101"));
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_add_duplicate() {
        let mut transcript = Transcript::new();
        assert!(transcript.add("CMPT 120"));
        assert!(!transcript.add("cmpt120"));
        assert_eq!(transcript.sorted(), vec!["CMPT-120"]);
    }
}
