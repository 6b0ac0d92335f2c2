//! Insertion-ordered style maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::StyleValue;

/// One `property:value` pair from a declaration string, both trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Raw property names mapped to raw string values.
///
/// This is what a declaration string parses into before any key
/// normalization or value coercion. Re-inserting a property replaces its
/// value but keeps the position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssObject {
    entries: IndexMap<String, String>,
}

impl CssObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, returning the value it replaced.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(property.into(), value.into())
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries.get(property).map(String::as_str)
    }

    pub fn contains_key(&self, property: &str) -> bool {
        self.entries.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<Declaration> for CssObject {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        let mut object = CssObject::new();
        for decl in iter {
            object.insert(decl.property, decl.value);
        }
        object
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CssObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = CssObject::new();
        for (k, v) in iter {
            object.insert(k, v);
        }
        object
    }
}

impl IntoIterator for CssObject {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A style object: property names mapped to [`StyleValue`]s.
///
/// Keys are unique and iterate in insertion order. Serializes as a flat
/// object, e.g. `{"fontSize":28.0,"fontWeight":"bold"}`.
///
/// # Example
///
/// ```rust
/// use html_styles::StyleMap;
///
/// let style = StyleMap::new()
///     .with("textDecorationLine", "underline")
///     .with("color", "#245dc1");
///
/// assert_eq!(style.len(), 2);
/// assert_eq!(style.get_str("color"), Some("#245dc1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    entries: IndexMap<String, StyleValue>,
}

impl StyleMap {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, returning the updated map for chaining.
    pub fn with<V: Into<StyleValue>>(mut self, property: &str, value: V) -> Self {
        self.insert(property, value);
        self
    }

    /// Inserts a property, returning the value it replaced.
    ///
    /// A replaced property keeps its original position.
    pub fn insert<V: Into<StyleValue>>(
        &mut self,
        property: impl Into<String>,
        value: V,
    ) -> Option<StyleValue> {
        self.entries.insert(property.into(), value.into())
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.entries.get(property)
    }

    /// Returns the value of `property` if it is a string.
    pub fn get_str(&self, property: &str) -> Option<&str> {
        self.get(property).and_then(StyleValue::as_str)
    }

    /// Returns the value of `property` if it is a number.
    pub fn get_number(&self, property: &str) -> Option<f64> {
        self.get(property).and_then(StyleValue::as_number)
    }

    pub fn contains_key(&self, property: &str) -> bool {
        self.entries.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for StyleMap {
    type Item = (String, StyleValue);
    type IntoIter = indexmap::map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<CssObject> for StyleMap {
    fn from(object: CssObject) -> Self {
        object.into_iter().collect()
    }
}
