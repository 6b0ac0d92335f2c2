//! Property name normalization.

/// Rewrites a `kebab-case` CSS property name into `camelCase`.
///
/// The first `-`-separated segment is kept as-is; each later segment has
/// its first character upper-cased. Empty segments contribute nothing, so a
/// leading dash produces a capitalized vendor prefix.
///
/// # Example
///
/// ```rust
/// use html_styles::normalize_key;
///
/// assert_eq!(normalize_key("background-color"), "backgroundColor");
/// assert_eq!(normalize_key("border-top-width"), "borderTopWidth");
/// assert_eq!(normalize_key("color"), "color");
/// assert_eq!(normalize_key("-webkit-transition"), "WebkitTransition");
/// ```
pub fn normalize_key(key: &str) -> String {
    let mut segments = key.split('-');
    let mut result = String::with_capacity(key.len());
    if let Some(first) = segments.next() {
        result.push_str(first);
    }
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(c) = chars.next() {
            result.extend(c.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalized_keys_have_no_dashes(key in "[a-z-]{0,24}") {
            prop_assert!(!normalize_key(&key).contains('-'));
        }

        #[test]
        fn dashless_keys_are_unchanged(key in "[a-zA-Z]{0,24}") {
            prop_assert_eq!(normalize_key(&key), key);
        }

        #[test]
        fn first_segment_is_a_prefix(key in "[a-z]{1,8}(-[a-z]{1,8}){0,3}") {
            let first = key.split('-').next().unwrap_or_default();
            prop_assert!(normalize_key(&key).starts_with(first));
        }
    }
}
