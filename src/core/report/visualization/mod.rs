//! Diagram generation for prerequisite chains

pub mod mermaid;

pub use mermaid::MermaidGenerator;
