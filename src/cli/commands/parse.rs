//! Parse command handler

use nu_prereqs::core::parser::{normalize_text, parse};
use nu_prereqs::verbose;

/// Parse requirement text and print the resulting tree
pub fn run(text: &str, json: bool) {
    verbose!("Normalized: {}", normalize_text(text));
    let tree = parse(text);

    if json {
        match serde_json::to_string_pretty(&tree) {
            Ok(out) => println!("{out}"),
            Err(e) => eprintln!("✗ Failed to serialize tree: {e}"),
        }
        return;
    }

    match tree {
        None => println!("No prerequisites"),
        Some(tree) => {
            println!("{tree}");
            let courses = tree.flatten_courses();
            if !courses.is_empty() {
                println!("Courses: {}", courses.join(", "));
            }
        }
    }
}
