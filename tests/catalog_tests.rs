//! Integration tests for catalog loading and JSON persistence

use nu_prereqs::core::ingest::{
    export_catalog_json, import_catalog_json, load_catalog, load_catalog_csv, save_catalog_json,
};
use nu_prereqs::core::models::PrereqNode;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/catalog/sfu_cmpt.csv");

#[test]
fn sample_catalog_loads() {
    let catalog = load_catalog_csv(SAMPLE_CATALOG).expect("sample catalog should load");

    assert_eq!(catalog.name, "sfu_cmpt");
    assert_eq!(catalog.len(), 20);

    let course = catalog.get_course("cmpt 225").expect("CMPT-225 should exist");
    assert_eq!(course.title, "Data Structures and Programming");
    assert_eq!(course.dept, "CMPT");
    assert_eq!(course.number, "225");
    assert!((course.credits - 3.0).abs() < f32::EPSILON);
    assert!(course.prerequisites.raw_text.starts_with("CMPT 125 or CMPT 135"));
    assert!(!course.prerequisites.is_unrestricted());

    assert!(catalog
        .get_course("CMPT-120")
        .is_some_and(|c| c.prerequisites.is_unrestricted()));
}

#[test]
fn unresolved_text_is_kept_as_unknown() {
    let catalog = load_catalog_csv(SAMPLE_CATALOG).expect("sample catalog should load");
    let tree = catalog.get_course("MATH-151").and_then(|c| c.tree());
    assert!(matches!(tree, Some(PrereqNode::Unknown { .. })));
}

#[test]
fn dangling_references_are_reported() {
    let catalog = load_catalog_csv(SAMPLE_CATALOG).expect("sample catalog should load");
    assert_eq!(
        catalog.dangling_references(),
        vec!["MACM-201", "MATH-100", "MATH-150", "MATH-154", "MATH-157"]
    );
}

#[test]
fn json_export_round_trip_through_files() {
    let catalog = load_catalog_csv(SAMPLE_CATALOG).expect("sample catalog should load");
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("sfu_cmpt.json");

    save_catalog_json(&catalog, &path).expect("export should succeed");
    let restored = load_catalog(&path).expect("exported catalog should load");

    assert_eq!(restored.name, catalog.name);
    assert_eq!(restored.courses(), catalog.courses());
}

#[test]
fn stored_trees_are_trusted() {
    let json = r#"[{
        "course_id": "CMPT-999",
        "dept": "CMPT",
        "number": "999",
        "prerequisites_raw": "CMPT 120",
        "prerequisites_logic": {"type": "COURSE", "course": "CMPT-130"}
    }]"#;
    let catalog = import_catalog_json("stored".to_string(), json).expect("import should succeed");
    assert_eq!(
        catalog.get_course("CMPT-999").and_then(|c| c.tree()),
        Some(&PrereqNode::course("CMPT-130"))
    );

    let exported = export_catalog_json(&catalog).expect("export should succeed");
    assert!(exported.contains("\"prerequisites_logic\""));
}

#[test]
fn missing_catalog_file_is_an_error() {
    assert!(load_catalog(Path::new("samples/catalog/nope.csv")).is_err());
    assert!(load_catalog(Path::new("samples/catalog/nope.json")).is_err());
}
