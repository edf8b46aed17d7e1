//! Requirement text cleanup ahead of structural parsing

use regex::Regex;
use std::sync::LazyLock;

static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:prerequisite|corequisite|pre-?req)s?\s*:?\s*")
        .expect("label pattern is valid")
});

static EITHER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^either\s+").expect("either pattern is valid"));

static EXCLUSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.?\s*\bstudents?\s+[^.]*?(?:may\s+not|cannot)[^.]*?further\s+credit[^.]*")
        .expect("exclusion pattern is valid")
});

static GRADE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i),?\s*(?:all\s+|both\s+)?with\s+(?:a\s+)?(?:(?:minimum|min\.?)\s+)?grade\s+of\s+(?:at\s+least\s+)?(?:an?\s+)?[A-F]\b[+-]?(?:\s+or\s+(?:better|higher|above))?",
    )
    .expect("grade pattern is valid")
});

static AT_LEAST_GRADE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i),?\s*(?:all\s+)?with\s+(?:a\s+)?(?:grade\s+of\s+)?at\s+least\s+(?:an?\s+)?[A-F]\b[+-]?(?:\s+or\s+(?:better|higher|above))?",
    )
    .expect("at-least grade pattern is valid")
});

static RECOMMENDATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.?\s*\brecommend(?:ed|ation)s?\s*:[^.]*")
        .expect("recommendation pattern is valid")
});

static W_COURSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bone\s+w\s+course,?\s*").expect("W course pattern is valid")
});

static COMMA_BOTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i),\s*both\b").expect("comma-both pattern is valid"));

static BOTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bboth\b").expect("both pattern is valid"));

static AND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\band\b").expect("and pattern is valid"));

static OR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bor\b").expect("or pattern is valid"));

/// Clean a raw requirement string so the expression parser only sees
/// course mentions, operators, commas and parentheses
///
/// Steps, in order: strip the "Prerequisite:" style label, drop exclusion
/// clauses ("Students with credit for X may not take this course for further
/// credit"), drop minimum-grade clauses, drop unverifiable recommendation
/// clauses, collapse whitespace, rewrite conjunctive "both" as "and",
/// lowercase the `AND`/`OR` operators, and trim trailing punctuation.
///
/// An empty result means the course has no prerequisites.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    let s = LABEL_RE.replace(raw, "");
    let s = EITHER_RE.replace(s.trim_start(), "");
    let s = EXCLUSION_RE.replace_all(&s, "");
    let s = GRADE_RE.replace_all(&s, "");
    let s = AT_LEAST_GRADE_RE.replace_all(&s, "");
    let s = RECOMMENDATION_RE.replace_all(&s, "");
    let s = W_COURSE_RE.replace_all(&s, "");

    let s = s.split_whitespace().collect::<Vec<_>>().join(" ");

    let s = COMMA_BOTH_RE.replace_all(&s, ",");
    let s = BOTH_RE.replace_all(&s, "and");
    let s = AND_RE.replace_all(&s, "and");
    let s = OR_RE.replace_all(&s, "or");

    s.trim_end_matches(['.', ',', ';', ' ']).trim().to_string()
}
