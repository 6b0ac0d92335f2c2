//! Value coercion.
//!
//! Values parsed from a declaration string are always text. Whether a
//! pixel value such as `"12px"` becomes the number `12` is decided by an
//! explicit [`CoercionPolicy`], never by inspecting the value's type.
//! The default policy keeps every value as it was parsed.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::style::StyleValue;

/// Controls which values [`ValueCoercer`] reduces to numbers.
///
/// Property names in [`CoercionPolicy::StripPxFor`] are matched after key
/// normalization, so list `fontSize`, not `font-size`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoercionPolicy {
    /// Values pass through unchanged.
    #[default]
    Preserve,
    /// Every pixel or unitless numeric string becomes a number.
    StripPx,
    /// As [`CoercionPolicy::StripPx`], limited to the listed properties.
    StripPxFor(BTreeSet<String>),
}

impl CoercionPolicy {
    /// Builds a [`CoercionPolicy::StripPxFor`] from property names.
    pub fn strip_px_for<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CoercionPolicy::StripPxFor(properties.into_iter().map(Into::into).collect())
    }

    fn applies_to(&self, property: &str) -> bool {
        match self {
            CoercionPolicy::Preserve => false,
            CoercionPolicy::StripPx => true,
            CoercionPolicy::StripPxFor(properties) => properties.contains(property),
        }
    }
}

/// Reduces a pixel length to a number.
///
/// Accepts a decimal number with an optional `px` suffix, surrounded by
/// optional whitespace. Returns `None` for any other unit, for trailing
/// garbage, and for non-finite values.
///
/// # Example
///
/// ```rust
/// use html_styles::convert::parse_px;
///
/// assert_eq!(parse_px("12px"), Some(12.0));
/// assert_eq!(parse_px(" 1.5 "), Some(1.5));
/// assert_eq!(parse_px("2em"), None);
/// ```
pub fn parse_px(text: &str) -> Option<f64> {
    let text = text.trim();
    let number = text.strip_suffix("px").unwrap_or(text).trim_end();
    if number.is_empty() {
        return None;
    }
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Applies a [`CoercionPolicy`] to individual style values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueCoercer {
    policy: CoercionPolicy,
}

impl ValueCoercer {
    pub fn new(policy: CoercionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CoercionPolicy {
        &self.policy
    }

    /// Coerces the value of a (normalized) property.
    ///
    /// Numbers always pass through. Strings are replaced by their pixel
    /// value only when the policy covers `property` and [`parse_px`]
    /// accepts them.
    pub fn coerce(&self, property: &str, value: StyleValue) -> StyleValue {
        match value {
            StyleValue::Str(text) if self.policy.applies_to(property) => match parse_px(&text) {
                Some(n) => StyleValue::Number(n),
                None => StyleValue::Str(text),
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px_accepts_pixels_and_bare_numbers() {
        assert_eq!(parse_px("12px"), Some(12.0));
        assert_eq!(parse_px("0.5px"), Some(0.5));
        assert_eq!(parse_px("-3px"), Some(-3.0));
        assert_eq!(parse_px("40"), Some(40.0));
        assert_eq!(parse_px("  7 px "), Some(7.0));
    }

    #[test]
    fn test_parse_px_rejects_other_forms() {
        assert_eq!(parse_px("1em"), None);
        assert_eq!(parse_px("50%"), None);
        assert_eq!(parse_px("px"), None);
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("12pxpx"), None);
        assert_eq!(parse_px("bold"), None);
    }

    #[test]
    fn test_parse_px_rejects_non_finite() {
        assert_eq!(parse_px("inf"), None);
        assert_eq!(parse_px("NaN"), None);
        assert_eq!(parse_px("1e400px"), None);
    }

    #[test]
    fn test_default_policy_preserves_pixel_strings() {
        let coercer = ValueCoercer::default();
        assert_eq!(coercer.policy(), &CoercionPolicy::Preserve);
        assert_eq!(
            coercer.coerce("fontSize", "12px".into()),
            StyleValue::from("12px")
        );
    }

    #[test]
    fn test_numbers_always_pass_through() {
        for policy in [CoercionPolicy::Preserve, CoercionPolicy::StripPx] {
            let coercer = ValueCoercer::new(policy);
            assert_eq!(coercer.coerce("height", 1.into()), StyleValue::from(1));
        }
    }

    #[test]
    fn test_strip_px_converts_pixels_only() {
        let coercer = ValueCoercer::new(CoercionPolicy::StripPx);
        assert_eq!(
            coercer.coerce("fontSize", "12px".into()),
            StyleValue::from(12)
        );
        assert_eq!(
            coercer.coerce("fontSize", "1em".into()),
            StyleValue::from("1em")
        );
        assert_eq!(
            coercer.coerce("color", "red".into()),
            StyleValue::from("red")
        );
    }

    #[test]
    fn test_strip_px_for_listed_properties() {
        let coercer = ValueCoercer::new(CoercionPolicy::strip_px_for(["width", "height"]));
        assert_eq!(coercer.coerce("width", "20px".into()), StyleValue::from(20));
        assert_eq!(
            coercer.coerce("fontSize", "20px".into()),
            StyleValue::from("20px")
        );
    }

    #[test]
    fn test_policy_deserializes_from_config_names() {
        let policy: CoercionPolicy = serde_json::from_str("\"strip_px\"").unwrap();
        assert_eq!(policy, CoercionPolicy::StripPx);

        let policy: CoercionPolicy =
            serde_json::from_str(r#"{"strip_px_for": ["width"]}"#).unwrap();
        assert_eq!(policy, CoercionPolicy::strip_px_for(["width"]));
    }
}
