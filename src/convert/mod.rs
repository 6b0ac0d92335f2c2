//! The declaration-string to style-object pipeline.
//!
//! A declaration string flows through three stages:
//!
//! 1. [`parse_declarations`] splits it into raw `property -> value` strings
//! 2. [`normalize_key`] rewrites `kebab-case` names into `camelCase`
//! 3. [`ValueCoercer`] optionally reduces pixel values to numbers
//!
//! [`StyleConverter`] composes the stages.

mod coerce;
mod converter;
mod key;
mod parser;

pub use coerce::{parse_px, CoercionPolicy, ValueCoercer};
pub use converter::StyleConverter;
pub use key::normalize_key;
pub use parser::{declarations, parse_declarations};
