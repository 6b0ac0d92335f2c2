//! Style values and the maps that hold them.
//!
//! This module provides the data types shared by the conversion pipeline
//! and the default stylesheet:
//!
//! - [`StyleValue`]: A single style value, either text or a number
//! - [`StyleMap`]: An insertion-ordered map of property names to values
//! - [`CssObject`]: The raw `property -> value` strings of a declaration string
//! - [`Declaration`]: One `property:value` pair as it appeared in the source

mod map;
mod value;

pub use map::{CssObject, Declaration, StyleMap};
pub use value::StyleValue;
