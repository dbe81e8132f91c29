//! Plain style-property mappings and shallow merging.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::style::PropertyValue;

/// A plain mapping of style property names to values.
///
/// This is the currency of the whole crate: base styles, selector fragments,
/// and resolved results are all `StyleMap`s. Merging is shallow: a property
/// from the incoming map replaces the existing property wholesale, and
/// nested values are never combined.
///
/// # Example
///
/// ```rust
/// use mediasheet::style;
///
/// let mut base = style! { "color": "black", "fontSize": 12 };
/// base.merge(style! { "color": "red" });
///
/// assert_eq!(base.get("color"), Some(&"red".into()));
/// assert_eq!(base.get("fontSize"), Some(&12.into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, PropertyValue>);

impl StyleMap {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns true when the map has no properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Sets a property, returning the previous value if one was present.
    pub fn insert(
        &mut self,
        property: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.0.insert(property.into(), value.into())
    }

    /// Looks up a property value.
    pub fn get(&self, property: &str) -> Option<&PropertyValue> {
        self.0.get(property)
    }

    /// Returns true when the property is present.
    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    /// Removes a property, returning its value if it was present.
    pub fn remove(&mut self, property: &str) -> Option<PropertyValue> {
        self.0.remove(property)
    }

    /// Shallow-merges `other` into this map.
    ///
    /// Properties from `other` overwrite identically-named properties here;
    /// everything else is kept. Nested lists and objects are replaced as a
    /// whole, never concatenated or deep-merged.
    pub fn merge(&mut self, other: StyleMap) {
        self.0.extend(other.0);
    }

    /// Iterates over properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over property names in name order.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<BTreeMap<String, PropertyValue>> for StyleMap {
    fn from(map: BTreeMap<String, PropertyValue>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, PropertyValue)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (String, PropertyValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for StyleMap {
    type Item = (String, PropertyValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Builds a [`StyleMap`] from property/value pairs.
///
/// Values go through `Into<PropertyValue>`, so literals of every supported
/// shape work directly.
///
/// # Example
///
/// ```rust
/// use mediasheet::style;
///
/// let map = style! {
///     "flexDirection": "row",
///     "padding": 16,
/// };
/// assert_eq!(map.len(), 2);
/// ```
#[macro_export]
macro_rules! style {
    () => {
        $crate::StyleMap::new()
    };
    ($($property:literal : $value:expr),+ $(,)?) => {{
        let mut map = $crate::StyleMap::new();
        $(map.insert($property, $value);)+
        map
    }};
}
