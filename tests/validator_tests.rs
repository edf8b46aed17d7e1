//! Integration tests for transcript evaluation and validation sessions

use nu_prereqs::core::ingest::load_catalog_csv;
use nu_prereqs::core::models::{Catalog, PrereqNode, Transcript};
use nu_prereqs::core::validator::{evaluate, PrerequisiteValidator};

const SAMPLE_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/catalog/sfu_cmpt.csv");

fn sample() -> Catalog {
    load_catalog_csv(SAMPLE_CATALOG).expect("sample catalog should load")
}

fn course(id: &str) -> PrereqNode {
    PrereqNode::course(id)
}

fn transcript(courses: &[&str]) -> Transcript {
    courses.iter().collect()
}

#[test]
fn and_reports_missing_child() {
    let tree = PrereqNode::And {
        children: vec![course("A-100"), course("B-100")],
    };
    let result = evaluate(Some(&tree), &transcript(&["A-100"]));
    assert!(!result.satisfied);
    assert_eq!(result.missing, vec!["B-100"]);
}

#[test]
fn or_is_met_by_any_child() {
    let tree = PrereqNode::Or {
        children: vec![course("A-100"), course("B-100")],
    };
    let result = evaluate(Some(&tree), &transcript(&["B-100"]));
    assert!(result.satisfied);
    assert!(result.missing.is_empty());
}

#[test]
fn evaluation_is_monotonic() {
    let universe = ["A-100", "B-100", "C-100", "D-100"];
    let trees = [
        PrereqNode::And {
            children: vec![
                PrereqNode::Or {
                    children: vec![course("A-100"), course("B-100")],
                },
                course("C-100"),
            ],
        },
        PrereqNode::Or {
            children: vec![
                PrereqNode::And {
                    children: vec![course("A-100"), course("D-100")],
                },
                PrereqNode::And {
                    children: vec![course("B-100"), course("C-100")],
                },
            ],
        },
    ];

    for tree in &trees {
        for mask in 0u32..(1 << universe.len()) {
            let base: Vec<&str> = universe
                .iter()
                .enumerate()
                .filter(|&(bit, _)| (mask >> bit) & 1 == 1)
                .map(|(_, id)| *id)
                .collect();
            if !evaluate(Some(tree), &transcript(&base)).satisfied {
                continue;
            }
            for extra in universe {
                let mut grown = base.clone();
                grown.push(extra);
                assert!(
                    evaluate(Some(tree), &transcript(&grown)).satisfied,
                    "adding {extra} to {base:?} broke {tree}"
                );
            }
        }
    }
}

#[test]
fn session_validates_sample_catalog() {
    let catalog = sample();
    let validator = PrerequisiteValidator::new(&catalog);

    let result = validator.validate_prerequisites("cmpt 225", &transcript(&["CMPT 120"]));
    assert_eq!(result.target_course, "CMPT-225");
    assert!(!result.is_valid);
    assert_eq!(result.missing_courses, vec!["CMPT-125", "CMPT-135", "MACM-101"]);
    assert_eq!(
        result.message,
        "Missing prerequisites: CMPT-125, CMPT-135, MACM-101"
    );

    let result =
        validator.validate_prerequisites("CMPT-225", &transcript(&["CMPT 135", "MACM 101"]));
    assert!(result.is_valid);
    assert_eq!(result.message, "You meet all prerequisites for CMPT-225");
}

#[test]
fn recommendations_never_block() {
    let catalog = sample();
    let validator = PrerequisiteValidator::new(&catalog);

    let result = validator.validate_prerequisites("CMPT 371", &transcript(&["CMPT 225"]));
    assert!(result.is_valid, "recommended CMPT 295 must not be required");

    let result = validator.validate_prerequisites("CMPT 479", &Transcript::new());
    assert!(result.is_valid);
    assert!(result.missing_courses.is_empty());
}

#[test]
fn unrestricted_and_unknown_targets() {
    let catalog = sample();
    let validator = PrerequisiteValidator::new(&catalog);

    let result = validator.validate_prerequisites("CMPT 120", &Transcript::new());
    assert!(result.is_valid);
    assert_eq!(result.message, "CMPT-120 has no prerequisites");
    assert!(result.prerequisite_tree.is_none());

    let result = validator.validate_prerequisites("HIST 101", &Transcript::new());
    assert!(!result.is_valid);
    assert_eq!(result.message, "Course HIST-101 not found");
}

#[test]
fn missing_prerequisites_shortcut() {
    let catalog = sample();
    let validator = PrerequisiteValidator::new(&catalog);
    assert_eq!(
        validator.missing_prerequisites("CMPT 300", &transcript(&["CMPT 225"])),
        vec!["CMPT-295"]
    );
}

#[test]
fn validation_result_serializes() {
    let catalog = sample();
    let validator = PrerequisiteValidator::new(&catalog);
    let result = validator.validate_prerequisites("CMPT 201", &Transcript::new());
    let json = serde_json::to_value(&result).expect("result should serialize");

    assert_eq!(json["target_course"], "CMPT-201");
    assert_eq!(json["is_valid"], false);
    assert_eq!(json["prerequisite_tree"]["type"], "AND");
}
