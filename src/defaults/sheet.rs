//! The generated default stylesheet.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use super::config::StyleConfig;
use crate::style::StyleMap;

/// Font and margin multipliers for one heading level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingScale {
    pub tag: &'static str,
    pub font: f64,
    pub margin: f64,
}

/// Scales for `h1` through `h6`, adapted from the Blink `html.css`
/// (`font-size` in em, block margins in em of the heading's own size).
pub const HEADING_SCALES: [HeadingScale; 6] = [
    HeadingScale { tag: "h1", font: 2.0, margin: 0.67 },
    HeadingScale { tag: "h2", font: 1.5, margin: 0.83 },
    HeadingScale { tag: "h3", font: 1.17, margin: 1.0 },
    HeadingScale { tag: "h4", font: 1.0, margin: 1.33 },
    HeadingScale { tag: "h5", font: 0.83, margin: 1.67 },
    HeadingScale { tag: "h6", font: 0.67, margin: 2.33 },
];

/// Generates a bold heading style.
///
/// The font size is `base * font_multiplier`, and both vertical margins are
/// that size times `margin_multiplier`.
///
/// # Example
///
/// ```rust
/// use html_styles::defaults::heading_style;
///
/// let h1 = heading_style(14.0, 2.0, 0.67);
/// assert_eq!(h1.get_number("fontSize"), Some(28.0));
/// assert_eq!(h1.get_number("marginTop"), Some(18.76));
/// assert_eq!(h1.get_str("fontWeight"), Some("bold"));
/// ```
pub fn heading_style(base: f64, font_multiplier: f64, margin_multiplier: f64) -> StyleMap {
    let font_size = base * font_multiplier;
    let margin = base * font_multiplier * margin_multiplier;
    StyleMap::new()
        .with("fontSize", font_size)
        .with("marginTop", margin)
        .with("marginBottom", margin)
        .with("fontWeight", "bold")
}

/// Default style objects keyed by tag name.
///
/// Built once from a [`StyleConfig`] and read-only afterwards. Tags without
/// an entry return `None` from [`DefaultStyleSheet::get`]; the caller picks
/// the fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DefaultStyleSheet {
    styles: IndexMap<&'static str, StyleMap>,
}

impl DefaultStyleSheet {
    /// Builds the sheet with the default configuration.
    pub fn new() -> Self {
        Self::from_config(&StyleConfig::default())
    }

    /// Builds the sheet from `config`.
    ///
    /// The config is not validated here; [`crate::HtmlStyles::with_config`]
    /// validates before building.
    pub fn from_config(config: &StyleConfig) -> Self {
        let base = config.base_font_size;
        let mut styles = IndexMap::new();

        // Block level elements
        styles.insert("div", StyleMap::new());

        // Typography
        styles.insert(
            "p",
            StyleMap::new()
                .with("fontSize", base)
                .with("marginTop", base)
                .with("marginBottom", base),
        );
        styles.insert("u", StyleMap::new().with("textDecorationLine", "underline"));
        styles.insert("em", StyleMap::new().with("fontStyle", "italic"));
        styles.insert("b", StyleMap::new().with("fontWeight", "bold"));
        styles.insert("strong", StyleMap::new().with("fontWeight", "bold"));
        styles.insert("big", StyleMap::new().with("fontSize", base * 1.2));
        styles.insert("small", StyleMap::new().with("fontSize", base * 0.8));
        styles.insert(
            "a",
            StyleMap::new()
                .with("textDecorationLine", "underline")
                .with("color", config.link_color.as_str()),
        );

        for scale in &HEADING_SCALES {
            styles.insert(scale.tag, heading_style(base, scale.font, scale.margin));
        }

        // Lists
        for tag in ["ul", "ol"] {
            styles.insert(
                tag,
                StyleMap::new()
                    .with("paddingLeft", config.list_indent)
                    .with("marginBottom", base),
            );
        }

        // Breaks
        styles.insert("br", StyleMap::new());
        styles.insert(
            "hr",
            StyleMap::new()
                .with("marginTop", base / 2.0)
                .with("marginBottom", base / 2.0)
                .with("height", 1)
                .with("backgroundColor", config.rule_color.as_str()),
        );

        debug!(tags = styles.len(), base_font_size = base, "built default stylesheet");
        Self { styles }
    }

    /// Returns the default style of `tag`, if it has one.
    pub fn get(&self, tag: &str) -> Option<&StyleMap> {
        self.styles.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.styles.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.styles.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleMap)> {
        self.styles.iter().map(|(tag, style)| (*tag, style))
    }
}

impl Default for DefaultStyleSheet {
    fn default() -> Self {
        Self::new()
    }
}
