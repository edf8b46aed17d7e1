//! Integration tests for requirement text parsing

use nu_prereqs::core::models::{normalize_course_id, tree_to_string, PrereqNode};
use nu_prereqs::core::parser::parse;

fn course(id: &str) -> PrereqNode {
    PrereqNode::course(id)
}

fn or(children: Vec<PrereqNode>) -> PrereqNode {
    PrereqNode::Or { children }
}

fn and(children: Vec<PrereqNode>) -> PrereqNode {
    PrereqNode::And { children }
}

#[test]
fn shorthand_numbers_inherit_department() {
    assert_eq!(
        parse("CMPT 120 or 125 or 130"),
        Some(or(vec![course("CMPT-120"), course("CMPT-125"), course("CMPT-130")]))
    );
}

#[test]
fn commas_are_conjunctive() {
    assert_eq!(
        parse("CMPT 120, MATH 151"),
        Some(and(vec![course("CMPT-120"), course("MATH-151")]))
    );
    assert_eq!(
        parse("CMPT 120, MATH 151, MACM 101"),
        Some(and(vec![
            course("CMPT-120"),
            course("MATH-151"),
            course("MACM-101"),
        ]))
    );
}

#[test]
fn comma_both_stays_conjunctive() {
    assert_eq!(
        parse("MATH 150, both MATH 151"),
        Some(and(vec![course("MATH-150"), course("MATH-151")]))
    );
}

#[test]
fn parentheses_group_alternatives() {
    assert_eq!(
        parse("(CMPT 125 or CMPT 135) and MACM 101"),
        Some(and(vec![
            or(vec![course("CMPT-125"), course("CMPT-135")]),
            course("MACM-101"),
        ]))
    );
}

#[test]
fn comma_then_and_keeps_local_or() {
    assert_eq!(
        parse("CMPT 125 or CMPT 135, and MACM 101"),
        Some(and(vec![
            or(vec![course("CMPT-125"), course("CMPT-135")]),
            course("MACM-101"),
        ]))
    );
}

#[test]
fn long_catalog_requirement() {
    let tree = parse(
        "MACM 101, MATH 152, CMPT 125 or CMPT 135, and (MATH 240 or MATH 232), \
         all with a minimum grade of C-.",
    )
    .expect("requirement should parse");

    assert_eq!(
        tree.flatten_courses(),
        vec!["MACM-101", "MATH-152", "CMPT-125", "CMPT-135", "MATH-240", "MATH-232"]
    );
    assert_eq!(
        tree,
        and(vec![
            and(vec![
                course("MACM-101"),
                course("MATH-152"),
                or(vec![course("CMPT-125"), course("CMPT-135")]),
            ]),
            or(vec![course("MATH-240"), course("MATH-232")]),
        ])
    );
}

#[test]
fn labels_and_grades_are_ignored() {
    assert_eq!(
        parse("Prerequisite: CMPT 225 with minimum grade of C-"),
        Some(course("CMPT-225"))
    );
    assert_eq!(parse("CMPT 120 with a minimum grade of C-"), Some(course("CMPT-120")));
}

#[test]
fn uppercase_operators_are_recognized() {
    assert_eq!(
        parse("CMPT 120 OR CMPT 130"),
        Some(or(vec![course("CMPT-120"), course("CMPT-130")]))
    );
}

#[test]
fn prose_becomes_unknown_leaf() {
    assert_eq!(
        parse("Permission of the instructor."),
        Some(PrereqNode::unknown("Permission of the instructor"))
    );
}

#[test]
fn empty_text_means_no_prerequisites() {
    assert_eq!(parse(""), None);
    assert_eq!(parse("   "), None);
}

#[test]
fn dash_form_references() {
    assert_eq!(
        parse("CMPT-225 and CMPT-295"),
        Some(and(vec![course("CMPT-225"), course("CMPT-295")]))
    );
}

#[test]
fn rendering_parenthesizes_only_operator_changes() {
    let tree = parse("(CMPT 125 or CMPT 135) and MACM 101");
    assert_eq!(
        tree_to_string(tree.as_ref()),
        "( CMPT-125 OR CMPT-135 ) AND MACM-101"
    );
    assert_eq!(tree_to_string(None), "");
}

#[test]
fn flatten_of_or_preserves_order() {
    let tree = parse("MATH 151 or 150 or 154").expect("requirement should parse");
    assert_eq!(tree.flatten_courses(), vec!["MATH-151", "MATH-150", "MATH-154"]);
}

#[test]
fn tagged_json_shape() {
    let tree = parse("CMPT 120 or 130").expect("requirement should parse");
    let json = serde_json::to_value(&tree).expect("tree should serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "type": "OR",
            "children": [
                {"type": "COURSE", "course": "CMPT-120"},
                {"type": "COURSE", "course": "CMPT-130"}
            ]
        })
    );

    let back: PrereqNode = serde_json::from_value(json).expect("tree should deserialize");
    assert_eq!(back, tree);
}

#[test]
fn course_id_normalization_is_idempotent() {
    for raw in ["cmpt 225", "CMPT225", "CMPT-225", " macm  101 ", "math151w"] {
        let once = normalize_course_id(raw);
        assert_eq!(normalize_course_id(&once), once, "not idempotent for {raw:?}");
    }
    assert_eq!(normalize_course_id("cmpt 225"), "CMPT-225");
}
