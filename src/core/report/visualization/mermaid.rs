//! Mermaid diagram generator for prerequisite chains
//!
//! Generates Mermaid flowchart syntax that can be embedded in Markdown files
//! and rendered by GitHub, GitLab, and other Markdown viewers.

use crate::core::models::{normalize_course_id, Catalog, PrerequisiteGraph, Transcript};
use std::collections::HashSet;
use std::fmt::Write;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a left-to-right flowchart of a course's prerequisite chain
    ///
    /// Nodes are the target plus every transitive prerequisite. Completed
    /// courses get the `done` class and the target gets the `target` class.
    /// The output has no code fences so callers can embed it in Markdown or HTML.
    #[must_use]
    pub fn chain_diagram(
        graph: &PrerequisiteGraph,
        catalog: &Catalog,
        target: &str,
        transcript: &Transcript,
    ) -> String {
        let target = normalize_course_id(target);
        let mut nodes = graph.prerequisite_chain(&target);
        nodes.push(target.clone());
        let in_chain: HashSet<&str> = nodes.iter().map(String::as_str).collect();

        let mut output = String::from("flowchart LR\n");

        for course_id in &nodes {
            let label = Self::get_node_label(course_id, catalog);
            let safe_id = Self::sanitize_id(course_id);
            let _ = writeln!(output, "    {safe_id}[\"{label}\"]");
        }

        for course_id in &nodes {
            let Some(prereqs) = graph.get_prerequisites(course_id) else {
                continue;
            };
            let course_node = Self::sanitize_id(course_id);
            for prereq in prereqs.iter().filter(|p| in_chain.contains(p.as_str())) {
                let _ = writeln!(output, "    {} --> {course_node}", Self::sanitize_id(prereq));
            }
        }

        output.push_str("    classDef done fill:#d4edda,stroke:#28a745\n");
        output.push_str("    classDef target fill:#cce5ff,stroke:#004085\n");

        let done: Vec<String> = nodes
            .iter()
            .filter(|id| **id != target && transcript.contains(id))
            .map(|id| Self::sanitize_id(id))
            .collect();
        if !done.is_empty() {
            let _ = writeln!(output, "    class {} done", done.join(","));
        }
        let _ = writeln!(output, "    class {} target", Self::sanitize_id(&target));

        output
    }

    /// Display label for a course node: id plus a shortened title
    fn get_node_label(course_id: &str, catalog: &Catalog) -> String {
        catalog.get_course(course_id).map_or_else(
            || course_id.to_string(),
            |c| {
                let title: String = if c.title.chars().count() > 24 {
                    let short: String = c.title.chars().take(21).collect();
                    format!("{short}...")
                } else {
                    c.title.clone()
                };
                format!("{course_id}<br/>{}", title.replace('"', "'"))
            },
        )
    }

    /// Sanitize a course id for use as a Mermaid node ID
    fn sanitize_id(key: &str) -> String {
        key.chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    }
}
