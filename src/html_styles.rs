//! The assembled style configuration.

use crate::convert::StyleConverter;
use crate::defaults::{BlockElements, ConfigError, DefaultStyleSheet, StyleConfig};
use crate::style::StyleMap;
use crate::styleset::StyleSet;

/// Default tag styles, block tags and a converter, built together.
///
/// Construct one at startup and share it by reference; it is immutable
/// and `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use html_styles::HtmlStyles;
///
/// let styles = HtmlStyles::new();
///
/// let h1 = styles.default_style("h1").unwrap();
/// assert_eq!(h1.get_number("fontSize"), Some(28.0));
/// assert!(styles.is_block("div"));
///
/// let inline = styles.string_to_style("text-align: center");
/// assert_eq!(inline.get_str("textAlign"), Some("center"));
/// ```
#[derive(Debug, Clone)]
pub struct HtmlStyles {
    default_styles: DefaultStyleSheet,
    block_elements: BlockElements,
    converter: StyleConverter,
}

impl HtmlStyles {
    /// Builds everything from the default configuration.
    pub fn new() -> Self {
        let config = StyleConfig::default();
        Self {
            default_styles: DefaultStyleSheet::from_config(&config),
            block_elements: BlockElements::new(),
            converter: StyleConverter::with_policy(config.coercion),
        }
    }

    /// Builds everything from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails [`StyleConfig::validate`].
    pub fn with_config(config: StyleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            default_styles: DefaultStyleSheet::from_config(&config),
            block_elements: BlockElements::new(),
            converter: StyleConverter::with_policy(config.coercion),
        })
    }

    pub fn default_styles(&self) -> &DefaultStyleSheet {
        &self.default_styles
    }

    /// Returns the default style of `tag`, if it has one.
    pub fn default_style(&self, tag: &str) -> Option<&StyleMap> {
        self.default_styles.get(tag)
    }

    pub fn block_elements(&self) -> &BlockElements {
        &self.block_elements
    }

    pub fn is_block(&self, tag: &str) -> bool {
        self.block_elements.contains(tag)
    }

    pub fn stylesets(&self) -> [StyleSet; 3] {
        StyleSet::ALL
    }

    pub fn converter(&self) -> &StyleConverter {
        &self.converter
    }

    /// Converts an inline `style` attribute using the configured policy.
    pub fn string_to_style(&self, text: &str) -> StyleMap {
        self.converter.string_to_style(text)
    }
}

impl Default for HtmlStyles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::CoercionPolicy;

    #[test]
    fn test_new_uses_defaults() {
        let styles = HtmlStyles::new();
        assert_eq!(styles.default_styles(), &DefaultStyleSheet::new());
        assert_eq!(styles.converter().policy(), &CoercionPolicy::Preserve);
        assert_eq!(styles.stylesets(), [StyleSet::View, StyleSet::Text, StyleSet::Image]);
    }

    #[test]
    fn test_with_config_applies_policy_and_sizes() {
        let config = StyleConfig::new()
            .base_font_size(10.0)
            .coercion(CoercionPolicy::StripPx);
        let styles = HtmlStyles::with_config(config).unwrap();

        assert_eq!(styles.default_style("p").unwrap().get_number("fontSize"), Some(10.0));
        assert_eq!(
            styles.string_to_style("width: 30px").get_number("width"),
            Some(30.0)
        );
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let result = HtmlStyles::with_config(StyleConfig::new().base_font_size(0.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_block_lookup() {
        let styles = HtmlStyles::default();
        assert!(styles.is_block("ol"));
        assert!(!styles.is_block("li"));
        assert_eq!(styles.block_elements().len(), 3);
    }

    #[test]
    fn test_conversion_does_not_touch_defaults() {
        let styles = HtmlStyles::new();
        let before = styles.default_styles().clone();
        let _ = styles.string_to_style("font-size: 99px; display: block");
        assert_eq!(styles.default_styles(), &before);
        assert_eq!(styles.block_elements(), &BlockElements::new());
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HtmlStyles>();
    }
}
