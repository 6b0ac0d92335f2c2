//! Declaration string parsing.
//!
//! A declaration string is a `;`-separated list of `property:value`
//! segments, as found in an HTML `style` attribute:
//!
//! ```text
//! color: red; font-size: 12px
//! ```
//!
//! Splitting is naive. A segment is kept only if it contains exactly one
//! `:` with a non-blank property and value on either side, so values that themselves contain `:` or `;` (URLs, quoted
//! strings) are dropped rather than mis-parsed. Malformed segments never
//! produce an error.

use tracing::trace;

use crate::style::{CssObject, Declaration};

/// Iterates the well-formed declarations of `text` in source order.
///
/// Duplicates are not folded; see [`parse_declarations`] for last-wins
/// semantics.
///
/// # Example
///
/// ```rust
/// use html_styles::convert::declarations;
///
/// let props: Vec<_> = declarations("color: red; ; a:b:c; margin: 0")
///     .map(|d| d.property)
///     .collect();
/// assert_eq!(props, vec!["color", "margin"]);
/// ```
pub fn declarations(text: &str) -> impl Iterator<Item = Declaration> + '_ {
    text.split(';').filter_map(parse_segment)
}

/// Parses a declaration string into raw property/value strings.
///
/// Later declarations of the same property overwrite earlier ones.
///
/// # Example
///
/// ```rust
/// use html_styles::convert::parse_declarations;
///
/// let object = parse_declarations("color: red; margin:");
/// assert_eq!(object.get("color"), Some("red"));
/// assert_eq!(object.len(), 1);
/// ```
pub fn parse_declarations(text: &str) -> CssObject {
    declarations(text).collect()
}

fn parse_segment(segment: &str) -> Option<Declaration> {
    let mut parts = segment.split(':');
    let property = parts.next()?;
    let Some(value) = parts.next() else {
        if !segment.trim().is_empty() {
            trace!(segment, "dropping declaration without ':'");
        }
        return None;
    };
    if parts.next().is_some() {
        trace!(segment, "dropping declaration with more than one ':'");
        return None;
    }
    let (property, value) = (property.trim(), value.trim());
    if property.is_empty() || value.is_empty() {
        trace!(segment, "dropping declaration with an empty side");
        return None;
    }
    Some(Declaration::new(property, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(parse_declarations("").is_empty());
    }

    #[test]
    fn test_single_declaration() {
        let object = parse_declarations("color:red");
        assert_eq!(object.get("color"), Some("red"));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let object = parse_declarations("  font-size :  12px  ;\n\tcolor:\tblue ");
        assert_eq!(object.get("font-size"), Some("12px"));
        assert_eq!(object.get("color"), Some("blue"));
    }

    #[test]
    fn test_missing_value_segment_dropped() {
        let object = parse_declarations("color: red; margin:");
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("color"), Some("red"));
        assert!(!object.contains_key("margin"));
    }

    #[test]
    fn test_trailing_semicolon() {
        let object = parse_declarations("color: red;");
        assert_eq!(object.len(), 1);
    }

    #[test]
    fn test_segment_without_colon_dropped() {
        let object = parse_declarations("color; margin: 0");
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("margin"), Some("0"));
    }

    #[test]
    fn test_segment_with_two_colons_dropped() {
        let object = parse_declarations("background: url(http://x/y.png); color: red");
        assert!(!object.contains_key("background"));
        assert_eq!(object.get("color"), Some("red"));
    }

    #[test]
    fn test_duplicate_property_last_wins() {
        let object = parse_declarations("a:1;a:2");
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("a"), Some("2"));
    }

    #[test]
    fn test_duplicate_keeps_first_position() {
        let object = parse_declarations("a:1; b:2; a:3");
        let entries: Vec<_> = object.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_empty_property_name_dropped() {
        let object = parse_declarations(": red; color: blue");
        assert!(!object.contains_key(""));
        assert_eq!(object.len(), 1);
    }

    #[test]
    fn test_blank_value_dropped() {
        assert!(parse_declarations("margin:   ").is_empty());
    }

    #[test]
    fn test_declarations_iterator_keeps_duplicates() {
        let all: Vec<_> = declarations("a:1;a:2").collect();
        assert_eq!(
            all,
            vec![Declaration::new("a", "1"), Declaration::new("a", "2")]
        );
    }
}
