//! Prerequisite text parsing
//!
//! Turns catalog requirement text such as
//! `"Prerequisite: CMPT 125 or CMPT 135, and MACM 101, with a minimum grade of C-."`
//! into a [`PrereqNode`] tree.

pub mod expression;
pub mod normalize;

pub use expression::ExpressionParser;
pub use normalize::normalize_text;

use crate::core::models::PrereqNode;

/// Parse raw requirement text into a requirement tree
///
/// Never fails: text that cannot be resolved to courses becomes
/// [`PrereqNode::Unknown`] leaves.
///
/// # Returns
/// `None` when the text is empty after cleanup, meaning "no prerequisites"
///
/// # Examples
/// ```
/// use nu_prereqs::core::models::PrereqNode;
/// use nu_prereqs::core::parser::parse;
///
/// let tree = parse("CMPT 120, MATH 151");
/// assert_eq!(
///     tree,
///     Some(PrereqNode::And {
///         children: vec![PrereqNode::course("CMPT-120"), PrereqNode::course("MATH-151")],
///     })
/// );
/// assert_eq!(parse("   "), None);
/// ```
#[must_use]
pub fn parse(raw_text: &str) -> Option<PrereqNode> {
    let cleaned = normalize_text(raw_text);
    if cleaned.is_empty() {
        return None;
    }
    ExpressionParser::new().parse(&cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cleans_before_parsing() {
        assert_eq!(
            parse("Prerequisite: CMPT 225 with a minimum grade of C-."),
            Some(PrereqNode::course("CMPT-225"))
        );
    }

    #[test]
    fn test_parse_whitespace_is_absent() {
        assert_eq!(parse(""), None);
        assert_eq!(parse(" \t\n"), None);
        assert_eq!(parse("Prerequisites:"), None);
    }
}
