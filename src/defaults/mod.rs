//! Default styles for HTML tags.
//!
//! This module provides:
//!
//! - [`DefaultStyleSheet`]: Tag names mapped to their default style objects
//! - [`BlockElements`]: Tags that lay out as blocks rather than inline
//! - [`StyleConfig`]: The knobs the default sheet is generated from
//! - [`heading_style`]: The formula behind `h1` to `h6`
//!
//! Sizes follow the Blink user-agent stylesheet, expressed in points
//! relative to a base font size of 14.

mod block;
mod config;
mod error;
mod sheet;

pub use block::{BlockElements, BLOCK_ELEMENTS};
pub use config::{StyleConfig, DEFAULT_BASE_FONT_SIZE};
pub use error::ConfigError;
pub use sheet::{heading_style, DefaultStyleSheet, HeadingScale, HEADING_SCALES};
