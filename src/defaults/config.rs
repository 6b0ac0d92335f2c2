//! Default stylesheet configuration.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::convert::CoercionPolicy;

/// Font size, in points, that every default size is derived from.
pub const DEFAULT_BASE_FONT_SIZE: f64 = 14.0;

/// Parameters for generating the default stylesheet and converter.
///
/// Missing fields take their defaults when deserialized, so a config file
/// only needs to name what it changes.
///
/// # Example
///
/// ```rust
/// use html_styles::{CoercionPolicy, StyleConfig};
///
/// let config = StyleConfig::new()
///     .base_font_size(16.0)
///     .coercion(CoercionPolicy::StripPx);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.link_color, "#245dc1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub base_font_size: f64,
    pub link_color: String,
    /// Background of `hr` rules.
    pub rule_color: String,
    /// Left padding of `ul` and `ol`.
    pub list_indent: f64,
    pub coercion: CoercionPolicy,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_font_size(mut self, size: f64) -> Self {
        self.base_font_size = size;
        self
    }

    pub fn link_color(mut self, color: impl Into<String>) -> Self {
        self.link_color = color.into();
        self
    }

    pub fn rule_color(mut self, color: impl Into<String>) -> Self {
        self.rule_color = color.into();
        self
    }

    pub fn list_indent(mut self, indent: f64) -> Self {
        self.list_indent = indent;
        self
    }

    pub fn coercion(mut self, policy: CoercionPolicy) -> Self {
        self.coercion = policy;
        self
    }

    /// Checks that sizes are finite (and the base size positive) and that
    /// colors are not empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_font_size.is_finite() || self.base_font_size <= 0.0 {
            return Err(ConfigError::InvalidSize {
                field: "base_font_size",
                value: self.base_font_size,
            });
        }
        if !self.list_indent.is_finite() || self.list_indent < 0.0 {
            return Err(ConfigError::InvalidSize {
                field: "list_indent",
                value: self.list_indent,
            });
        }
        if self.link_color.trim().is_empty() {
            return Err(ConfigError::EmptyColor {
                field: "link_color",
            });
        }
        if self.rule_color.trim().is_empty() {
            return Err(ConfigError::EmptyColor {
                field: "rule_color",
            });
        }
        Ok(())
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            base_font_size: DEFAULT_BASE_FONT_SIZE,
            link_color: "#245dc1".to_string(),
            rule_color: "#CCC".to_string(),
            list_indent: 40.0,
            coercion: CoercionPolicy::Preserve,
        }
    }
}
