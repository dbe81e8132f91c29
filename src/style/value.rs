//! Property value type for style mappings.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single style property value.
///
/// Style objects are plain property/value mappings, so values cover the
/// shapes that appear in them: booleans, numbers, text, and the occasional
/// nested list or object (`"transform"`, `"shadowOffset"` and friends).
/// Merging never descends into nested values; a property is always replaced
/// as a whole.
///
/// `From` conversions keep style construction terse:
///
/// ```rust
/// use mediasheet::PropertyValue;
///
/// let color: PropertyValue = "black".into();
/// let size: PropertyValue = 12.into();
/// assert_eq!(size.as_number(), Some(12.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Boolean flag, e.g. `"includeFontPadding": false`.
    Bool(bool),
    /// Numeric value in device-independent pixels or unitless form.
    Number(f64),
    /// Textual value, e.g. a color name or a keyword.
    Text(String),
    /// Nested list, replaced wholesale on merge.
    List(Vec<PropertyValue>),
    /// Nested object, replaced wholesale on merge.
    Map(BTreeMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        PropertyValue::Number(f64::from(value))
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(f64::from(value))
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        PropertyValue::Number(f64::from(value))
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Number(value as f64)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl<V: Into<PropertyValue>> From<Vec<V>> for PropertyValue {
    fn from(values: Vec<V>) -> Self {
        PropertyValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Number(n) => write_number(f, *n),
            PropertyValue::Text(s) => write!(f, "{}", s),
            PropertyValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            PropertyValue::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Writes a number without a trailing `.0` when it is integral.
pub(crate) fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_finite() && n == n.trunc() && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Conversions
    // =========================================================================

    #[test]
    fn test_from_bool() {
        assert_eq!(PropertyValue::from(true), PropertyValue::Bool(true));
    }

    #[test]
    fn test_from_numbers() {
        assert_eq!(PropertyValue::from(12), PropertyValue::Number(12.0));
        assert_eq!(PropertyValue::from(1.5), PropertyValue::Number(1.5));
        assert_eq!(PropertyValue::from(2.0f32), PropertyValue::Number(2.0));
    }

    #[test]
    fn test_from_text() {
        assert_eq!(
            PropertyValue::from("red"),
            PropertyValue::Text("red".to_string())
        );
        assert_eq!(
            PropertyValue::from(String::from("blue")),
            PropertyValue::Text("blue".to_string())
        );
    }

    #[test]
    fn test_from_vec() {
        let value = PropertyValue::from(vec![1, 2, 3]);
        assert_eq!(
            value,
            PropertyValue::List(vec![
                PropertyValue::Number(1.0),
                PropertyValue::Number(2.0),
                PropertyValue::Number(3.0),
            ])
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(PropertyValue::from(10).as_number(), Some(10.0));
        assert_eq!(PropertyValue::from("x").as_number(), None);
        assert_eq!(PropertyValue::from("x").as_text(), Some("x"));
        assert_eq!(PropertyValue::from(false).as_bool(), Some(false));
    }

    // =========================================================================
    // Serde
    // =========================================================================

    #[test]
    fn test_deserialize_untagged() {
        let value: PropertyValue = serde_json::from_str("12").unwrap();
        assert_eq!(value, PropertyValue::Number(12.0));

        let value: PropertyValue = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(value, PropertyValue::Text("red".to_string()));

        let value: PropertyValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, PropertyValue::Bool(true));

        let value: PropertyValue = serde_json::from_str(r#"{"width": 0, "height": 2}"#).unwrap();
        assert!(matches!(value, PropertyValue::Map(_)));
    }

    // =========================================================================
    // Display
    // =========================================================================

    #[test]
    fn test_display_trims_integral_numbers() {
        assert_eq!(PropertyValue::from(12).to_string(), "12");
        assert_eq!(PropertyValue::from(0.5).to_string(), "0.5");
        assert_eq!(PropertyValue::from("row").to_string(), "row");
    }

    #[test]
    fn test_display_nested() {
        let value = PropertyValue::from(vec![1, 2]);
        assert_eq!(value.to_string(), "[1, 2]");
    }
}
