//! Course catalog model

use super::course::{Course, PrerequisiteEntry};
use super::course_id::{normalize_course_id, CourseId};
use super::graph::PrerequisiteGraph;
use std::collections::HashMap;

/// A snapshot of an institution's course catalog
///
/// Courses keep their insertion order so listings and suggestions are stable.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Catalog name (institution or source file)
    pub name: String,

    /// Courses in insertion order
    courses: Vec<Course>,

    /// Course id -> position in `courses`
    index: HashMap<CourseId, usize>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            courses: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a course to the catalog
    ///
    /// # Returns
    /// `true` if the course was added, `false` if it replaced an existing course with the same id
    pub fn add_course(&mut self, course: Course) -> bool {
        if let Some(&pos) = self.index.get(course.id()) {
            self.courses[pos] = course;
            false
        } else {
            self.index.insert(course.id().to_string(), self.courses.len());
            self.courses.push(course);
            true
        }
    }

    /// Get a course by id; the id is normalized before lookup
    #[must_use]
    pub fn get_course(&self, course_id: &str) -> Option<&Course> {
        self.index
            .get(&normalize_course_id(course_id))
            .map(|&pos| &self.courses[pos])
    }

    /// All courses in insertion order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Prerequisite entries of every course
    pub fn entries(&self) -> impl Iterator<Item = &PrerequisiteEntry> {
        self.courses.iter().map(|course| &course.prerequisites)
    }

    /// Build a fresh prerequisite graph from the current snapshot
    #[must_use]
    pub fn build_graph(&self) -> PrerequisiteGraph {
        PrerequisiteGraph::from_entries(self.entries())
    }

    /// Course ids referenced by some prerequisite tree but missing from the catalog
    ///
    /// # Returns
    /// Sorted, de-duplicated ids. Dangling references are kept in trees and graphs;
    /// this only reports them.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<CourseId> {
        let mut missing: Vec<CourseId> = self
            .courses
            .iter()
            .filter_map(Course::tree)
            .flat_map(|tree| tree.flatten_courses())
            .filter(|id| !self.index.contains_key(id))
            .collect();
        missing.sort();
        missing.dedup();
        missing
    }
}
