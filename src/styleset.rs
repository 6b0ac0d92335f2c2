//! Rendering primitive categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The native primitive a tag renders as.
///
/// Deciding which tag maps to which set is left to the tag classifier
/// that consumes this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleSet {
    View,
    Text,
    Image,
}

impl StyleSet {
    pub const ALL: [StyleSet; 3] = [StyleSet::View, StyleSet::Text, StyleSet::Image];

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleSet::View => "view",
            StyleSet::Text => "text",
            StyleSet::Image => "image",
        }
    }
}

impl std::fmt::Display for StyleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no [`StyleSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStyleSetError {
    pub name: String,
}

impl std::fmt::Display for ParseStyleSetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown styleset '{}'. Available: view, text, image",
            self.name
        )
    }
}

impl std::error::Error for ParseStyleSetError {}

impl FromStr for StyleSet {
    type Err = ParseStyleSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleSet::ALL
            .into_iter()
            .find(|set| set.as_str() == s)
            .ok_or_else(|| ParseStyleSetError {
                name: s.to_string(),
            })
    }
}
