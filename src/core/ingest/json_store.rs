//! JSON persistence for parsed catalogs
//!
//! Each course is stored as a flat record with its requirement tree in the
//! tagged form, so a storage layer can keep the tree without understanding it.

use crate::core::models::{
    normalize_course_id, split_course_id, Catalog, Course, PrereqNode, PrerequisiteEntry,
};
use crate::core::parser;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Stored form of one catalog course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCourse {
    /// Canonical course id
    pub course_id: String,
    /// Course title
    #[serde(default)]
    pub title: String,
    /// Department code; derived from `course_id` when empty
    #[serde(default)]
    pub dept: String,
    /// Course number; derived from `course_id` when empty
    #[serde(default)]
    pub number: String,
    /// Credit units
    #[serde(default)]
    pub credits: f32,
    /// Requirement text from the catalog
    #[serde(default)]
    pub prerequisites_raw: String,
    /// Parsed requirement tree
    #[serde(default)]
    pub prerequisites_logic: Option<PrereqNode>,
}

impl From<&Course> for StoredCourse {
    fn from(course: &Course) -> Self {
        Self {
            course_id: course.id().to_string(),
            title: course.title.clone(),
            dept: course.dept.clone(),
            number: course.number.clone(),
            credits: course.credits,
            prerequisites_raw: course.prerequisites.raw_text.clone(),
            prerequisites_logic: course.tree().cloned(),
        }
    }
}

impl From<StoredCourse> for Course {
    /// Stored trees are brought into canonical form; raw text is re-parsed
    /// only when no tree was stored.
    fn from(stored: StoredCourse) -> Self {
        let tree = match stored.prerequisites_logic {
            Some(tree) => tree.into_canonical(),
            None => parser::parse(&stored.prerequisites_raw),
        };
        let course_id = normalize_course_id(&stored.course_id);
        let (dept, number) = match split_course_id(&course_id) {
            Some((dept, number)) if stored.dept.is_empty() || stored.number.is_empty() => {
                (dept.to_string(), number.to_string())
            }
            _ => (stored.dept, stored.number),
        };
        Self {
            title: stored.title,
            dept,
            number,
            credits: stored.credits,
            prerequisites: PrerequisiteEntry::new(&course_id, stored.prerequisites_raw, tree),
        }
    }
}

/// Serialize a catalog to a pretty-printed JSON array
///
/// # Errors
/// Returns an error if serialization fails
pub fn export_catalog_json(catalog: &Catalog) -> Result<String, serde_json::Error> {
    let records: Vec<StoredCourse> = catalog.courses().iter().map(StoredCourse::from).collect();
    serde_json::to_string_pretty(&records)
}

/// Rebuild a catalog from JSON produced by [`export_catalog_json`]
///
/// # Errors
/// Returns an error if the JSON is malformed or holds an unrecognized tree node type
pub fn import_catalog_json(name: String, json: &str) -> Result<Catalog, serde_json::Error> {
    let records: Vec<StoredCourse> = serde_json::from_str(json)?;
    let mut catalog = Catalog::new(name);
    for record in records {
        catalog.add_course(Course::from(record));
    }
    Ok(catalog)
}

/// Write a catalog to a JSON file, creating parent directories as needed
///
/// # Errors
/// Returns an error if serialization or any filesystem operation fails
pub fn save_catalog_json(catalog: &Catalog, path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, export_catalog_json(catalog)?)?;
    Ok(())
}

/// Load a catalog from a JSON file; the catalog is named after the file stem
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_catalog_json(path: &Path) -> Result<Catalog, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read catalog {}: {e}", path.display()))?;
    let name = path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("catalog")
        .to_string();
    Ok(import_catalog_json(name, &content)?)
}
