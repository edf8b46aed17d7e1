//! Integration smoke tests for `nu_prereqs`

use nu_prereqs::core::models::Transcript;
use nu_prereqs::core::parser::parse;
use nu_prereqs::core::validator::evaluate;
use nu_prereqs::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn parse_then_evaluate() {
    let tree = parse("Prerequisite: CMPT 125 or CMPT 135, and MACM 101, with a minimum grade of C-.");
    let transcript: Transcript = ["cmpt135", "MACM 101"].iter().collect();
    assert!(evaluate(tree.as_ref(), &transcript).satisfied);
}
