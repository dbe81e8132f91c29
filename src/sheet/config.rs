//! JSON style configuration.
//!
//! Sheets can be declared as JSON documents instead of built in code. Each
//! top-level key names a style; its value is an object of base properties,
//! optionally carrying an [`MEDIA_KEY`] entry that maps selectors to override
//! objects:
//!
//! ```json
//! {
//!     "container": {
//!         "padding": 16,
//!         "@media": {
//!             "(min-width: 768px)": { "padding": 32 }
//!         }
//!     }
//! }
//! ```
//!
//! Document order is preserved all the way through parsing so that
//! declaration order can break specificity ties exactly as it does with the
//! builder API.

use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::sheet::def::StyleDef;
use crate::sheet::error::SheetError;
use crate::style::{PropertyValue, StyleFragment, StyleMap};

/// The reserved property key that introduces conditional overrides.
pub const MEDIA_KEY: &str = "@media";

/// A parsed style configuration document.
///
/// Feed it to [`StyleSheet::create`](crate::StyleSheet::create) or a
/// [`StyleSheetBuilder`](crate::StyleSheetBuilder).
#[derive(Debug, Clone, Default)]
pub struct SheetConfig {
    entries: Vec<(String, StyleDef)>,
}

impl SheetConfig {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Config`] when the document is not valid JSON or
    /// not shaped like a style configuration.
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        let config: SheetConfig =
            serde_json::from_str(json).map_err(|err| SheetError::Config {
                message: err.to_string(),
            })?;
        debug!("parsed style config: {} styles", config.len());
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Read`] when the file cannot be read and
    /// [`SheetError::Config`] when its contents do not parse.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SheetError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| SheetError::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// The style definitions in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &StyleDef)> {
        self.entries.iter().map(|(key, def)| (key.as_str(), def))
    }

    pub(crate) fn into_entries(self) -> Vec<(String, StyleDef)> {
        self.entries
    }

    /// Number of styles in the configuration.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the configuration is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for SheetConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = SheetConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of style names to style objects")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<(String, StyleDef)> = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    let def = map.next_value::<StyleDef>()?;
                    match entries.iter_mut().find(|(k, _)| *k == key) {
                        Some(entry) => entry.1 = def,
                        None => entries.push((key, def)),
                    }
                }
                Ok(SheetConfig { entries })
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}

impl<'de> Deserialize<'de> for StyleDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DefVisitor;

        impl<'de> Visitor<'de> for DefVisitor {
            type Value = StyleDef;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a style object with properties and an optional \"@media\" block")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut def = StyleDef::new();
                while let Some(key) = map.next_key::<String>()? {
                    if key == MEDIA_KEY {
                        let block = map.next_value::<MediaBlock>()?;
                        for (selector, props) in block.0 {
                            def.push_conditional(selector, StyleFragment::Static(props));
                        }
                    } else {
                        let value = map.next_value::<PropertyValue>()?;
                        def = def.prop(key, value);
                    }
                }
                Ok(def)
            }
        }

        deserializer.deserialize_map(DefVisitor)
    }
}

/// The `"@media"` block: selectors to override maps, in document order.
struct MediaBlock(Vec<(String, StyleMap)>);

impl<'de> Deserialize<'de> for MediaBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BlockVisitor;

        impl<'de> Visitor<'de> for BlockVisitor {
            type Value = MediaBlock;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of selectors to property objects")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(selector) = map.next_key::<String>()? {
                    let props = map.next_value::<StyleMap>()?;
                    entries.push((selector, props));
                }
                Ok(MediaBlock(entries))
            }
        }

        deserializer.deserialize_map(BlockVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_properties() {
        let config = SheetConfig::from_json(
            r#"{ "title": { "fontSize": 20, "fontWeight": "bold" } }"#,
        )
        .unwrap();
        assert_eq!(config.len(), 1);
        let (key, def) = config.entries().next().unwrap();
        assert_eq!(key, "title");
        assert_eq!(def.base().get("fontSize").unwrap().as_number(), Some(20.0));
        assert_eq!(def.base().get("fontWeight").unwrap().as_text(), Some("bold"));
        assert!(!def.has_conditional());
    }

    #[test]
    fn test_parse_media_block() {
        let config = SheetConfig::from_json(
            r#"{
                "container": {
                    "padding": 16,
                    "@media": {
                        "(min-width: 768px)": { "padding": 32 },
                        "all": { "margin": 4 }
                    }
                }
            }"#,
        )
        .unwrap();
        let (_, def) = config.entries().next().unwrap();
        assert_eq!(def.base().len(), 1);
        let selectors: Vec<&str> = def.conditional().map(|(s, _)| s).collect();
        assert_eq!(selectors, ["(min-width: 768px)", "all"]);
    }

    #[test]
    fn test_document_order_preserved() {
        let config = SheetConfig::from_json(
            r#"{ "zebra": {}, "apple": {}, "mango": {} }"#,
        )
        .unwrap();
        let keys: Vec<&str> = config.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_duplicate_style_key_keeps_position() {
        let config = SheetConfig::from_json(
            r#"{ "a": { "x": 1 }, "b": {}, "a": { "x": 2 } }"#,
        )
        .unwrap();
        let entries: Vec<(&str, &StyleDef)> = config.entries().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "a");
        assert_eq!(
            entries[0].1.base().get("x").unwrap().as_number(),
            Some(2.0)
        );
    }

    #[test]
    fn test_nested_property_values() {
        let config = SheetConfig::from_json(
            r#"{
                "card": {
                    "shadowOffset": { "width": 0, "height": 2 },
                    "transform": [{ "scale": 1.5 }]
                }
            }"#,
        )
        .unwrap();
        let (_, def) = config.entries().next().unwrap();
        assert!(matches!(
            def.base().get("shadowOffset"),
            Some(PropertyValue::Map(_))
        ));
        assert!(matches!(
            def.base().get("transform"),
            Some(PropertyValue::List(_))
        ));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = SheetConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SheetError::Config { .. }));
    }

    #[test]
    fn test_wrong_shape_is_config_error() {
        let err = SheetConfig::from_json(r#"["not", "a", "map"]"#).unwrap_err();
        assert!(matches!(err, SheetError::Config { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = SheetConfig::from_json_file("/nonexistent/styles.json").unwrap_err();
        match err {
            SheetError::Read { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/styles.json"));
            }
            other => panic!("expected a read error, got {other:?}"),
        }
    }
}
