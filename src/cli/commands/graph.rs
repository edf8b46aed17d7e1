//! Graph query handlers: `chain`, `unlocks` and `dangling`

use nu_prereqs::core::models::{normalize_course_id, Catalog, CourseId};
use nu_prereqs::core::validator::PrerequisiteValidator;

/// Print every transitive prerequisite of a course
pub fn chain(catalog: &Catalog, course: &str) {
    let validator = PrerequisiteValidator::new(catalog);
    let courses = validator.prerequisite_chain(course);
    print_courses(
        catalog,
        &format!("Prerequisite chain for {}", normalize_course_id(course)),
        &courses,
    );
}

/// Print every course a course transitively unlocks
pub fn unlocks(catalog: &Catalog, course: &str) {
    let validator = PrerequisiteValidator::new(catalog);
    let courses = validator.unlocked_by(course);
    print_courses(
        catalog,
        &format!("Courses unlocked by {}", normalize_course_id(course)),
        &courses,
    );
}

/// Print course ids referenced by prerequisites but missing from the catalog
pub fn dangling(catalog: &Catalog) {
    let missing = catalog.dangling_references();
    if missing.is_empty() {
        println!("✓ Every referenced course is in catalog '{}'", catalog.name);
        return;
    }
    println!(
        "{} referenced course(s) not in catalog '{}':",
        missing.len(),
        catalog.name
    );
    for course_id in missing {
        println!("  {course_id}");
    }
}

fn print_courses(catalog: &Catalog, heading: &str, courses: &[CourseId]) {
    println!("{heading} ({}):", courses.len());
    if courses.is_empty() {
        println!("  (none)");
    }
    for course_id in courses {
        match catalog.get_course(course_id) {
            Some(course) => println!("  {course_id:<12} {}", course.title),
            None => println!("  {course_id:<12} (not in catalog)"),
        }
    }
}
