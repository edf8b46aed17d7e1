//! CSV loader for course catalogs
//!
//! Expected header (case-sensitive, any column order):
//! `Dept,Number,Title,Credits,Prerequisites`. Requirement text usually
//! contains commas, so it must be quoted.

use crate::core::models::{Catalog, Course};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One catalog row as it appears in the CSV
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Dept", default)]
    dept: String,
    #[serde(rename = "Number", default)]
    number: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Credits", default)]
    credits: Option<f32>,
    #[serde(rename = "Prerequisites", default)]
    prerequisites: String,
}

/// Load a catalog CSV file; the catalog is named after the file stem
///
/// # Errors
/// Returns an error if the file cannot be opened or is not valid CSV
pub fn load_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| format!("Failed to open catalog {}: {e}", path.display()))?;
    let name = path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("catalog")
        .to_string();

    let catalog = read_catalog_csv(name, file)?;
    crate::info!(
        "Loaded {} course(s) from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Read a catalog from any CSV source, parsing every row's requirement text
///
/// Rows without a department or number are skipped with a warning. A repeated
/// course id replaces the earlier row.
///
/// # Errors
/// Returns an error if the header or a row cannot be decoded
pub fn read_catalog_csv<R: Read>(name: String, reader: R) -> Result<Catalog, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut catalog = Catalog::new(name);

    for (idx, row) in reader.deserialize::<CatalogRow>().enumerate() {
        let row = row.map_err(|e| format!("Invalid catalog row {}: {e}", idx + 2))?;

        if row.dept.is_empty() || row.number.is_empty() {
            crate::warn!("Skipping catalog row {}: missing Dept or Number", idx + 2);
            continue;
        }

        let course = Course::new(
            row.title,
            &row.dept,
            &row.number,
            row.credits.unwrap_or(0.0),
            &row.prerequisites,
        );
        if !catalog.add_course(course) {
            crate::warn!(
                "Duplicate course {}-{} on row {} replaces the earlier entry",
                row.dept,
                row.number,
                idx + 2
            );
        }
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::PrereqNode;

    const SAMPLE: &str = "\
Dept,Number,Title,Credits,Prerequisites
CMPT,120,Intro to Computing,3,
CMPT,125,Intro to Computing II,3,\"CMPT 120 or CMPT 130, with a minimum grade of C-.\"
,130,Missing department,3,
MACM,101,Discrete Mathematics I,3,\"BC Math 12, or MATH 100\"
";

    #[test]
    fn test_read_catalog_csv() {
        let catalog = read_catalog_csv("sample".to_string(), SAMPLE.as_bytes()).unwrap();

        assert_eq!(catalog.name, "sample");
        assert_eq!(catalog.len(), 3);

        let cmpt125 = catalog.get_course("CMPT-125").unwrap();
        assert_eq!(cmpt125.title, "Intro to Computing II");
        assert_eq!(
            cmpt125.tree(),
            Some(&PrereqNode::Or {
                children: vec![PrereqNode::course("CMPT-120"), PrereqNode::course("CMPT-130")],
            })
        );

        assert!(catalog.get_course("CMPT-120").unwrap().tree().is_none());
    }

    #[test]
    fn test_missing_credits_default_to_zero() {
        let csv = "Dept,Number,Title,Credits,Prerequisites\nHIST,101,History,,\n";
        let catalog = read_catalog_csv("h".to_string(), csv.as_bytes()).unwrap();
        let course = catalog.get_course("HIST-101").unwrap();
        assert!(course.credits.abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_nonexistent_file() {
        assert!(load_catalog_csv("samples/catalog/does-not-exist.csv").is_err());
    }
}
