//! Recursive-descent parser for normalized requirement text
//!
//! Precedence, outermost first:
//! 1. top-level `" and "` splits into an AND group
//! 2. top-level commas split into an AND group (catalog lists are conjunctive)
//! 3. top-level `" or "` splits into an OR group
//! 4. atoms: a fully parenthesized fragment restarts at level 1, anything else
//!    is scanned for course references
//!
//! Every split ignores delimiters nested inside parentheses.

use crate::core::models::{CourseId, PrereqNode};
use regex::Regex;
use std::sync::LazyLock;

/// `DEPT NUMBER`, `DEPT-NUMBER`, or a bare `NUMBER` that inherits a department.
///
/// Departments are uppercase only so lowercase words such as "and" are never
/// mistaken for one.
static COURSE_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:([A-Z]{3,4})[\s-])?(\d{3}[A-Z]?)\b").expect("course pattern is valid")
});

/// Parser state for a single requirement string
///
/// The only state is the department of the most recent fully qualified
/// reference, which bare numbers later in the same string inherit
/// ("CMPT 120 or 125" means CMPT-125). Use a fresh parser per string.
#[derive(Debug, Default)]
pub struct ExpressionParser {
    last_dept: Option<String>,
}

impl ExpressionParser {
    /// Create a parser with no inherited department
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a normalized requirement string
    ///
    /// # Returns
    /// `None` when the string holds nothing to require
    pub fn parse(&mut self, normalized: &str) -> Option<PrereqNode> {
        self.last_dept = None;
        self.parse_expression(normalized)
    }

    fn parse_expression(&mut self, expr: &str) -> Option<PrereqNode> {
        let parts = split_top_level(expr, " and ");
        if parts.len() > 1 {
            let children = parts
                .into_iter()
                .filter_map(|part| self.parse_comma_group(part))
                .collect();
            return PrereqNode::all(children);
        }
        self.parse_comma_group(expr)
    }

    fn parse_comma_group(&mut self, expr: &str) -> Option<PrereqNode> {
        let parts = split_top_level(expr, ",");
        if parts.len() > 1 {
            let children = parts
                .into_iter()
                .filter_map(|part| self.parse_or_group(part))
                .collect();
            return PrereqNode::all(children);
        }
        self.parse_or_group(expr)
    }

    fn parse_or_group(&mut self, expr: &str) -> Option<PrereqNode> {
        let expr = expr.trim();
        if let Some(inner) = strip_enclosing_parens(expr) {
            return self.parse_expression(inner);
        }

        let parts = split_top_level(expr, " or ");
        if parts.len() > 1 {
            let children = parts
                .into_iter()
                .filter_map(|part| self.parse_atom(part))
                .collect();
            return PrereqNode::any(children);
        }
        self.parse_atom(expr)
    }

    fn parse_atom(&mut self, expr: &str) -> Option<PrereqNode> {
        let expr = expr.trim();
        if expr.is_empty() {
            return None;
        }

        if let Some(inner) = strip_enclosing_parens(expr) {
            return self.parse_expression(inner);
        }

        let courses = self.extract_courses(expr);
        if courses.is_empty() {
            crate::debug!("Unresolved prerequisite fragment: '{expr}'");
            return Some(PrereqNode::unknown(expr));
        }
        PrereqNode::any(courses.into_iter().map(PrereqNode::course).collect())
    }

    /// Course references in `text`, left to right, without duplicates
    fn extract_courses(&mut self, text: &str) -> Vec<CourseId> {
        let mut courses: Vec<CourseId> = Vec::new();

        for caps in COURSE_REF_RE.captures_iter(text) {
            let number = &caps[2];
            let dept = match caps.get(1) {
                Some(dept) => {
                    self.last_dept = Some(dept.as_str().to_string());
                    dept.as_str()
                }
                None => match self.last_dept.as_deref() {
                    Some(dept) => dept,
                    None => continue,
                },
            };

            let id = format!("{dept}-{number}");
            if !courses.contains(&id) {
                courses.push(id);
            }
        }

        courses
    }
}

/// Split `expr` on `delimiter` wherever the parenthesis depth is zero
///
/// Parts are trimmed and empty parts dropped. Once a stray `)` drives the
/// depth negative nothing further is split.
fn split_top_level<'a>(expr: &'a str, delimiter: &str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    let mut resume_at = 0;

    for (idx, ch) in expr.char_indices() {
        if idx < resume_at {
            continue;
        }
        if depth == 0 && expr[idx..].starts_with(delimiter) {
            parts.push(&expr[start..idx]);
            start = idx + delimiter.len();
            resume_at = start;
            continue;
        }
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
    }
    parts.push(&expr[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// The interior of `expr` when one pair of parentheses encloses all of it
///
/// `"(A or B)"` yields `"A or B"`, while `"(A) or (B)"` yields `None`.
fn strip_enclosing_parens(expr: &str) -> Option<&str> {
    let inner = expr.strip_prefix('(')?.strip_suffix(')')?;

    let mut depth: i32 = 0;
    for ch in inner.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }

    (depth == 0).then(|| inner.trim())
}
