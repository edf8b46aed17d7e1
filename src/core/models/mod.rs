//! Data models for `NuPrereqs`

pub mod catalog;
pub mod course;
pub mod course_id;
pub mod graph;
pub mod requirement;
pub mod transcript;

pub use catalog::Catalog;
pub use course::{Course, PrerequisiteEntry};
pub use course_id::{normalize_course_id, split_course_id, CourseId};
pub use graph::PrerequisiteGraph;
pub use requirement::{tree_to_string, PrereqNode};
pub use transcript::Transcript;
