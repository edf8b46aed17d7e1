//! Canonical course identifiers

/// Canonical `DEPT-NUMBER` course identifier (e.g., "CMPT-225")
pub type CourseId = String;

/// Normalize a free-form course mention to canonical `DEPT-NUMBER` form
///
/// Whitespace is removed, letters are uppercased, and a hyphen is inserted at
/// the first digit if the mention has none. Mentions that start with a digit
/// have no department to separate and are returned compacted and uppercased.
///
/// # Examples
/// ```
/// use nu_prereqs::core::models::normalize_course_id;
///
/// assert_eq!(normalize_course_id("CMPT 120"), "CMPT-120");
/// assert_eq!(normalize_course_id("cmpt120"), "CMPT-120");
/// assert_eq!(normalize_course_id("CMPT-120"), "CMPT-120");
/// ```
#[must_use]
pub fn normalize_course_id(raw: &str) -> CourseId {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if compact.contains('-') {
        return compact;
    }

    match compact.find(|c: char| c.is_ascii_digit()) {
        Some(idx) if idx > 0 => format!("{}-{}", &compact[..idx], &compact[idx..]),
        _ => compact,
    }
}

/// Split a canonical id into its department and number parts
///
/// Returns `None` when the id has no hyphen.
#[must_use]
pub fn split_course_id(course_id: &str) -> Option<(&str, &str)> {
    course_id.split_once('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_variants() {
        assert_eq!(normalize_course_id("CMPT 120"), "CMPT-120");
        assert_eq!(normalize_course_id("cmpt120"), "CMPT-120");
        assert_eq!(normalize_course_id("CMPT-120"), "CMPT-120");
        assert_eq!(normalize_course_id("  macm 101 "), "MACM-101");
        assert_eq!(normalize_course_id("cmpt 105w"), "CMPT-105W");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["CMPT 120", "math151", "Bus-272", "120", "", "STAT 270W"] {
            let once = normalize_course_id(raw);
            assert_eq!(normalize_course_id(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_normalize_without_department() {
        assert_eq!(normalize_course_id("120"), "120");
        assert_eq!(normalize_course_id(""), "");
    }

    #[test]
    fn test_split_course_id() {
        assert_eq!(split_course_id("CMPT-225"), Some(("CMPT", "225")));
        assert_eq!(split_course_id("CMPT225"), None);
    }
}
