//! A single style value.

use serde::{Deserialize, Serialize};

/// A value in a style object.
///
/// Native style objects mix strings (`"bold"`, `"#245dc1"`, `"12px"`) with
/// plain numbers (`14`, `18.76`). Serializes untagged, so a [`StyleMap`]
/// renders as the flat object a UI layer expects.
///
/// [`StyleMap`]: super::StyleMap
///
/// # Example
///
/// ```rust
/// use html_styles::StyleValue;
///
/// let weight: StyleValue = "bold".into();
/// let size: StyleValue = 14.0.into();
///
/// assert_eq!(weight.as_str(), Some("bold"));
/// assert_eq!(size.as_number(), Some(14.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Str(String),
}

impl StyleValue {
    /// Returns the text if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }

    /// Returns the number if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Str(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, StyleValue::Number(_))
    }
}

impl std::fmt::Display for StyleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}
