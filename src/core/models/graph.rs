//! Catalog-wide prerequisite graph

use super::course::PrerequisiteEntry;
use super::course_id::{normalize_course_id, CourseId};
use std::collections::{HashMap, HashSet, VecDeque};

/// Directed graph of course prerequisites
///
/// An edge `P -> C` means "P is a prerequisite of C". The graph keeps two
/// association lists:
/// - `dependencies`: maps each course to its direct prerequisites
/// - `dependents`: maps each course to the courses that directly require it
///
/// Catalog data can be inconsistent, so the graph is not assumed to be
/// acyclic. Every traversal keeps a visited set.
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteGraph {
    /// Maps course id -> list of direct prerequisite ids
    dependencies: HashMap<CourseId, Vec<CourseId>>,

    /// Maps course id -> list of courses that directly require it
    dependents: HashMap<CourseId, Vec<CourseId>>,

    /// All course ids in insertion order
    courses: Vec<CourseId>,
}

impl PrerequisiteGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a snapshot of prerequisite entries
    ///
    /// Entries without a tree are skipped. Every other entry becomes a node,
    /// with an edge from each course leaf in its tree.
    #[must_use]
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a PrerequisiteEntry>,
    {
        let mut graph = Self::new();

        for entry in entries {
            let Some(tree) = &entry.tree else {
                continue;
            };
            graph.add_course(entry.course_id.clone());
            for prereq in tree.flatten_courses() {
                graph.add_prerequisite(entry.course_id.clone(), &prereq);
            }
        }

        crate::info!(
            "Built prerequisite graph with {} nodes and {} edges",
            graph.course_count(),
            graph.edge_count()
        );
        graph
    }

    /// Add a course node
    pub fn add_course(&mut self, course_id: CourseId) {
        if !self.dependencies.contains_key(&course_id) {
            self.dependencies.insert(course_id.clone(), Vec::new());
            self.dependents.insert(course_id.clone(), Vec::new());
            self.courses.push(course_id);
        }
    }

    /// Add a prerequisite edge `prerequisite_id -> course_id`
    pub fn add_prerequisite(&mut self, course_id: CourseId, prerequisite_id: &str) {
        self.add_course(course_id.clone());
        self.add_course(prerequisite_id.to_string());

        if let Some(prereqs) = self.dependencies.get_mut(&course_id) {
            if !prereqs.iter().any(|p| p == prerequisite_id) {
                prereqs.push(prerequisite_id.to_string());
            }
        }

        if let Some(deps) = self.dependents.get_mut(prerequisite_id) {
            if !deps.contains(&course_id) {
                deps.push(course_id);
            }
        }
    }

    /// Direct prerequisites of a course, or `None` if the course is not in the graph
    #[must_use]
    pub fn get_prerequisites(&self, course_id: &str) -> Option<&Vec<CourseId>> {
        self.dependencies.get(course_id)
    }

    /// Courses that directly require a course, or `None` if the course is not in the graph
    #[must_use]
    pub fn get_dependents(&self, course_id: &str) -> Option<&Vec<CourseId>> {
        self.dependents.get(course_id)
    }

    /// Every transitive prerequisite of a course, sorted
    ///
    /// The id is normalized first. A course missing from the graph has an
    /// empty chain.
    #[must_use]
    pub fn prerequisite_chain(&self, course_id: &str) -> Vec<CourseId> {
        reachable(&normalize_course_id(course_id), &self.dependencies)
    }

    /// Every course transitively unlocked by a course, sorted
    ///
    /// The id is normalized first. A course missing from the graph unlocks
    /// nothing.
    #[must_use]
    pub fn unlocked_by(&self, course_id: &str) -> Vec<CourseId> {
        reachable(&normalize_course_id(course_id), &self.dependents)
    }

    /// All course ids in insertion order
    #[must_use]
    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    /// Number of courses in the graph
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of prerequisite edges in the graph
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.dependencies.values().map(Vec::len).sum()
    }

    /// Check if a course exists in the graph
    #[must_use]
    pub fn contains_course(&self, course_id: &str) -> bool {
        self.dependencies.contains_key(course_id)
    }
}

/// Breadth-first search over `edges` from `start`, excluding `start` itself
fn reachable(start: &str, edges: &HashMap<CourseId, Vec<CourseId>>) -> Vec<CourseId> {
    if !edges.contains_key(start) {
        return Vec::new();
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(course) = queue.pop_front() {
        if let Some(neighbors) = edges.get(course) {
            for neighbor in neighbors {
                if visited.insert(neighbor.as_str()) {
                    queue.push_back(neighbor.as_str());
                }
            }
        }
    }

    let mut found: Vec<CourseId> = visited
        .into_iter()
        .filter(|course| *course != start)
        .map(str::to_string)
        .collect();
    found.sort();
    found
}

impl std::fmt::Display for PrerequisiteGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Prerequisite graph ({} courses, {} edges):",
            self.course_count(),
            self.edge_count()
        )?;
        writeln!(f)?;

        let mut sorted_courses = self.courses.clone();
        sorted_courses.sort();

        for course_id in sorted_courses {
            match self.dependencies.get(&course_id) {
                Some(prereqs) if !prereqs.is_empty() => {
                    writeln!(f, "  {course_id} ← {}", prereqs.join(", "))?;
                }
                _ => writeln!(f, "  {course_id} ← (no prerequisites)")?,
            }
        }

        Ok(())
    }
}
