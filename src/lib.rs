//! # html-styles - inline CSS to native style objects
//!
//! `html-styles` turns the contents of an HTML `style` attribute into the
//! flat, camel-cased style objects that native UI layers consume, and ships
//! a default style for common HTML tags.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_styles::{string_to_object, string_to_style};
//!
//! let raw = string_to_object("background-color: #fff; font-size: 12px");
//! assert_eq!(raw.get("background-color"), Some("#fff"));
//!
//! let style = string_to_style("background-color: #fff; font-size: 12px");
//! assert_eq!(style.get_str("backgroundColor"), Some("#fff"));
//! assert_eq!(style.get_str("fontSize"), Some("12px"));
//! ```
//!
//! ## Default Styles
//!
//! [`HtmlStyles`] bundles the default stylesheet, the set of block-level
//! tags and a converter. It is built explicitly and is read-only afterwards:
//!
//! ```rust
//! use html_styles::{HtmlStyles, StyleConfig};
//!
//! let styles = HtmlStyles::with_config(StyleConfig::new().base_font_size(16.0)).unwrap();
//! assert_eq!(styles.default_style("p").unwrap().get_number("fontSize"), Some(16.0));
//! assert!(styles.is_block("ul"));
//! ```
//!
//! ## Pixel Values
//!
//! Values are kept as parsed text unless a [`CoercionPolicy`] other than
//! [`CoercionPolicy::Preserve`] is chosen. See the [`convert`] module.

pub mod convert;
pub mod defaults;
mod html_styles;
mod style;
mod styleset;

pub use convert::{normalize_key, CoercionPolicy, StyleConverter, ValueCoercer};
pub use defaults::{BlockElements, ConfigError, DefaultStyleSheet, StyleConfig};
pub use html_styles::HtmlStyles;
pub use style::{CssObject, Declaration, StyleMap, StyleValue};
pub use styleset::{ParseStyleSetError, StyleSet};

/// Parses a declaration string into raw property/value strings.
///
/// Malformed segments are dropped; later duplicates win.
pub fn string_to_object(text: &str) -> CssObject {
    convert::parse_declarations(text)
}

/// Normalizes keys of a raw mapping into a style object, keeping values
/// unchanged.
pub fn object_to_style<I, K, V>(object: I) -> StyleMap
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<StyleValue>,
{
    StyleConverter::new().object_to_style(object)
}

/// Parses a declaration string straight into a style object.
pub fn string_to_style(text: &str) -> StyleMap {
    StyleConverter::new().string_to_style(text)
}
