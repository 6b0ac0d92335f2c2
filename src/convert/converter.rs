//! Composition of parsing, key normalization and value coercion.

use crate::style::{CssObject, StyleMap, StyleValue};

use super::coerce::{CoercionPolicy, ValueCoercer};
use super::key::normalize_key;
use super::parser::parse_declarations;

/// Converts CSS declarations into style objects.
///
/// # Example
///
/// ```rust
/// use html_styles::{CoercionPolicy, StyleConverter, StyleValue};
///
/// let converter = StyleConverter::new();
/// let style = converter.string_to_style("font-size: 12px; background-color: #fff");
/// assert_eq!(style.get_str("fontSize"), Some("12px"));
/// assert_eq!(style.get_str("backgroundColor"), Some("#fff"));
///
/// let strict = StyleConverter::with_policy(CoercionPolicy::StripPx);
/// let style = strict.string_to_style("font-size: 12px");
/// assert_eq!(style.get("fontSize"), Some(&StyleValue::Number(12.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleConverter {
    coercer: ValueCoercer,
}

impl StyleConverter {
    /// Creates a converter that keeps every value as text.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: CoercionPolicy) -> Self {
        Self {
            coercer: ValueCoercer::new(policy),
        }
    }

    pub fn policy(&self) -> &CoercionPolicy {
        self.coercer.policy()
    }

    /// Parses a declaration string into raw property/value strings.
    pub fn string_to_object(&self, text: &str) -> CssObject {
        parse_declarations(text)
    }

    /// Normalizes keys and coerces values of an existing mapping.
    ///
    /// Entries are processed in iteration order. When two raw keys
    /// normalize to the same name, the later one wins.
    pub fn object_to_style<I, K, V>(&self, object: I) -> StyleMap
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<StyleValue>,
    {
        let mut style = StyleMap::new();
        for (key, value) in object {
            let key = normalize_key(key.as_ref());
            let value = self.coercer.coerce(&key, value.into());
            style.insert(key, value);
        }
        style
    }

    /// Parses a declaration string straight into a style object.
    pub fn string_to_style(&self, text: &str) -> StyleMap {
        self.object_to_style(self.string_to_object(text))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn string_to_style_is_deterministic(text in "[a-z: ;-]{0,64}") {
            let converter = StyleConverter::new();
            prop_assert_eq!(converter.string_to_style(&text), converter.string_to_style(&text));
        }

        #[test]
        fn converted_keys_are_camel_case(
            decls in prop::collection::vec(("[a-z]{1,6}(-[a-z]{1,6}){0,2}", "[a-z0-9]{1,6}"), 0..8)
        ) {
            let text: Vec<String> = decls.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
            let style = StyleConverter::new().string_to_style(&text.join("; "));
            for key in style.keys() {
                prop_assert!(!key.contains('-'));
            }
            prop_assert!(style.len() <= decls.len());
        }
    }
}
