//! Block-level tags.

use serde::Serialize;

/// Tags laid out as blocks. Native layouts have no `display: block`, so a
/// renderer has to know these up front.
pub const BLOCK_ELEMENTS: [&str; 3] = ["div", "ol", "ul"];

/// The fixed set of block-level tag names.
///
/// Matching is exact; tag names are expected in lowercase.
///
/// # Example
///
/// ```rust
/// use html_styles::BlockElements;
///
/// let blocks = BlockElements::new();
/// assert!(blocks.contains("ul"));
/// assert!(!blocks.contains("p"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BlockElements {
    tags: &'static [&'static str],
}

impl BlockElements {
    pub fn new() -> Self {
        Self {
            tags: &BLOCK_ELEMENTS,
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        let tags: &'static [&'static str] = self.tags;
        tags.iter().copied()
    }
}

impl Default for BlockElements {
    fn default() -> Self {
        Self::new()
    }
}
