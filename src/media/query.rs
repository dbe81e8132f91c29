//! Media query types and evaluation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::ResponsiveContext;
use crate::media::parser::QueryParser;
use crate::media::ParseError;

/// Viewport orientation.
///
/// Portrait means the viewport is at least as tall as it is wide (the CSS
/// `orientation` definition, so a square viewport is portrait).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Height >= width.
    Portrait,
    /// Width > height.
    Landscape,
}

impl Orientation {
    /// Parses an orientation value.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediasheet::Orientation;
    ///
    /// assert_eq!(Orientation::parse("portrait").unwrap(), Orientation::Portrait);
    /// assert!(Orientation::parse("sideways").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            _ => Err(ParseError::InvalidOrientation(s)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// The type component of a media query.
///
/// Outside a browser there is no fixed set of media types; the type matches
/// against whatever platform identifier the context carries (`"ios"`,
/// `"android"`, `"web"`, ...). `all` matches every platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// Matches any platform.
    All,
    /// Matches a specific platform identifier, case-insensitively.
    Platform(String),
}

impl MediaType {
    /// Parses a media type. Any identifier is accepted; only `all` is special.
    pub fn parse(s: &str) -> Self {
        let s = s.trim().to_lowercase();
        if s == "all" {
            MediaType::All
        } else {
            MediaType::Platform(s)
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::All => write!(f, "all"),
            MediaType::Platform(name) => write!(f, "{}", name),
        }
    }
}

/// Media query modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaModifier {
    /// Negates the entire query.
    Not,
    /// No semantic effect; accepted for CSS compatibility.
    Only,
}

impl MediaModifier {
    /// Parses a modifier from a string.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "not" => Some(MediaModifier::Not),
            "only" => Some(MediaModifier::Only),
            _ => None,
        }
    }
}

impl fmt::Display for MediaModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaModifier::Not => write!(f, "not"),
            MediaModifier::Only => write!(f, "only"),
        }
    }
}

/// A media feature test.
///
/// Lengths are device-independent pixels; `(min-width: 768px)` and
/// `(min-width: 768)` are equivalent.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaFeature {
    /// Exact viewport width: `(width: 768px)`, within half a pixel.
    Width(f32),
    /// Minimum viewport width: `(min-width: 768px)`.
    MinWidth(f32),
    /// Maximum viewport width: `(max-width: 1024px)`.
    MaxWidth(f32),
    /// Exact viewport height, within half a pixel.
    Height(f32),
    /// Minimum viewport height.
    MinHeight(f32),
    /// Maximum viewport height.
    MaxHeight(f32),
    /// Viewport orientation: `(orientation: portrait)`.
    Orientation(Orientation),
}

impl MediaFeature {
    /// Parses a feature from its name and raw value.
    pub fn parse(name: &str, value: Option<&str>) -> Result<Self, ParseError> {
        let name = name.trim().to_lowercase();
        match name.as_str() {
            "width" => Ok(MediaFeature::Width(parse_length(&name, value)?)),
            "min-width" => Ok(MediaFeature::MinWidth(parse_length(&name, value)?)),
            "max-width" => Ok(MediaFeature::MaxWidth(parse_length(&name, value)?)),
            "height" => Ok(MediaFeature::Height(parse_length(&name, value)?)),
            "min-height" => Ok(MediaFeature::MinHeight(parse_length(&name, value)?)),
            "max-height" => Ok(MediaFeature::MaxHeight(parse_length(&name, value)?)),
            "orientation" => {
                let raw = value.ok_or_else(|| ParseError::MissingValue(name.clone()))?;
                Ok(MediaFeature::Orientation(Orientation::parse(raw)?))
            }
            _ => Err(ParseError::UnknownFeature(name)),
        }
    }

    /// Tests the feature against concrete viewport values.
    pub fn matches(&self, values: &MediaValues) -> bool {
        match self {
            MediaFeature::Width(target) => (values.width - target).abs() < 0.5,
            MediaFeature::MinWidth(target) => values.width >= *target,
            MediaFeature::MaxWidth(target) => values.width <= *target,
            MediaFeature::Height(target) => (values.height - target).abs() < 0.5,
            MediaFeature::MinHeight(target) => values.height >= *target,
            MediaFeature::MaxHeight(target) => values.height <= *target,
            MediaFeature::Orientation(orientation) => values.orientation == *orientation,
        }
    }
}

impl fmt::Display for MediaFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn px(f: &mut fmt::Formatter<'_>, name: &str, value: f32) -> fmt::Result {
            if value == value.trunc() {
                write!(f, "({}: {}px)", name, value as i64)
            } else {
                write!(f, "({}: {}px)", name, value)
            }
        }
        match self {
            MediaFeature::Width(v) => px(f, "width", *v),
            MediaFeature::MinWidth(v) => px(f, "min-width", *v),
            MediaFeature::MaxWidth(v) => px(f, "max-width", *v),
            MediaFeature::Height(v) => px(f, "height", *v),
            MediaFeature::MinHeight(v) => px(f, "min-height", *v),
            MediaFeature::MaxHeight(v) => px(f, "max-height", *v),
            MediaFeature::Orientation(o) => write!(f, "(orientation: {})", o),
        }
    }
}

/// Parses a length value with an optional `px` suffix.
fn parse_length(feature: &str, value: Option<&str>) -> Result<f32, ParseError> {
    let raw = value.ok_or_else(|| ParseError::MissingValue(feature.to_string()))?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ParseError::MissingValue(feature.to_string()));
    }
    let lower = raw.to_ascii_lowercase();
    let number = lower.strip_suffix("px").unwrap_or(&lower).trim();
    match number.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidValue {
            feature: feature.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// The viewport values a query is evaluated against.
///
/// This is the record handed to [`SelectorMatcher`](crate::SelectorMatcher)
/// implementations: the platform identifier standing in as the media type,
/// plus orientation and dimensions. Build it from a context with `From`.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaValues {
    /// Platform identifier the query's type component matches against.
    pub media_type: String,
    /// Current orientation.
    pub orientation: Orientation,
    /// Viewport width in device-independent pixels.
    pub width: f32,
    /// Viewport height in device-independent pixels.
    pub height: f32,
}

impl From<&ResponsiveContext> for MediaValues {
    fn from(context: &ResponsiveContext) -> Self {
        Self {
            media_type: context.platform.clone(),
            orientation: context.orientation,
            width: context.width,
            height: context.height,
        }
    }
}

impl Default for MediaValues {
    /// Placeholder values for syntax-only checks.
    fn default() -> Self {
        Self {
            media_type: "all".to_string(),
            orientation: Orientation::Portrait,
            width: 0.0,
            height: 0.0,
        }
    }
}

/// A parsed media query.
///
/// # Examples
///
/// ```
/// use mediasheet::{MediaQuery, MediaValues, Orientation};
///
/// let query = MediaQuery::parse("ios and (min-width: 768px)").unwrap();
/// let values = MediaValues {
///     media_type: "ios".to_string(),
///     orientation: Orientation::Landscape,
///     width: 1024.0,
///     height: 768.0,
/// };
/// assert!(query.matches(&values));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MediaQuery {
    /// Optional `not`/`only` modifier.
    pub modifier: Option<MediaModifier>,
    /// Optional type component; absent means unrestricted.
    pub media_type: Option<MediaType>,
    /// Feature tests, all of which must hold.
    pub features: Vec<MediaFeature>,
}

impl MediaQuery {
    /// Parses a single media query.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediasheet::MediaQuery;
    ///
    /// MediaQuery::parse("all").unwrap();
    /// MediaQuery::parse("(orientation: portrait)").unwrap();
    /// MediaQuery::parse("android and (min-width: 600px) and (max-width: 840px)").unwrap();
    /// assert!(MediaQuery::parse("ios or android").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the input is not a complete query in the
    /// supported grammar.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut parser = QueryParser::new(input);
        let query = parser.parse_query()?;
        parser.expect_eof()?;
        Ok(query)
    }

    /// Parses a comma-separated query list.
    ///
    /// A list matches when any of its queries matches (OR logic).
    ///
    /// # Examples
    ///
    /// ```
    /// use mediasheet::MediaQuery;
    ///
    /// let queries = MediaQuery::parse_list("ios, android and (min-width: 600px)").unwrap();
    /// assert_eq!(queries.len(), 2);
    /// ```
    pub fn parse_list(input: &str) -> Result<Vec<Self>, ParseError> {
        let mut parser = QueryParser::new(input);
        let queries = parser.parse_query_list()?;
        parser.expect_eof()?;
        Ok(queries)
    }

    /// Evaluates the query against concrete viewport values.
    ///
    /// The type must match (absent or `all` always does), every feature must
    /// hold, and a `not` modifier inverts the combined result.
    pub fn matches(&self, values: &MediaValues) -> bool {
        let type_ok = match &self.media_type {
            None | Some(MediaType::All) => true,
            Some(MediaType::Platform(name)) => name.eq_ignore_ascii_case(&values.media_type),
        };
        let features_ok = self.features.iter().all(|feature| feature.matches(values));
        let result = type_ok && features_ok;
        match self.modifier {
            Some(MediaModifier::Not) => !result,
            _ => result,
        }
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut needs_and = false;
        if let Some(modifier) = self.modifier {
            write!(f, "{} ", modifier)?;
        }
        if let Some(media_type) = &self.media_type {
            write!(f, "{}", media_type)?;
            needs_and = true;
        }
        for feature in &self.features {
            if needs_and {
                write!(f, " and ")?;
            }
            write!(f, "{}", feature)?;
            needs_and = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(media_type: &str, orientation: Orientation, width: f32, height: f32) -> MediaValues {
        MediaValues {
            media_type: media_type.to_string(),
            orientation,
            width,
            height,
        }
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_bare_all() {
        let query = MediaQuery::parse("all").unwrap();
        assert_eq!(query.media_type, Some(MediaType::All));
        assert!(query.features.is_empty());
    }

    #[test]
    fn test_parse_platform_type() {
        let query = MediaQuery::parse("ios").unwrap();
        assert_eq!(query.media_type, Some(MediaType::Platform("ios".to_string())));
    }

    #[test]
    fn test_parse_feature_only() {
        let query = MediaQuery::parse("(min-width: 768px)").unwrap();
        assert_eq!(query.media_type, None);
        assert_eq!(query.features, vec![MediaFeature::MinWidth(768.0)]);
    }

    #[test]
    fn test_parse_type_and_features() {
        let query = MediaQuery::parse("android and (min-width: 600px) and (orientation: landscape)")
            .unwrap();
        assert_eq!(
            query.media_type,
            Some(MediaType::Platform("android".to_string()))
        );
        assert_eq!(
            query.features,
            vec![
                MediaFeature::MinWidth(600.0),
                MediaFeature::Orientation(Orientation::Landscape),
            ]
        );
    }

    #[test]
    fn test_parse_unitless_length() {
        let query = MediaQuery::parse("(max-width: 1024)").unwrap();
        assert_eq!(query.features, vec![MediaFeature::MaxWidth(1024.0)]);
    }

    #[test]
    fn test_parse_fractional_length() {
        let query = MediaQuery::parse("(min-height: 667.5px)").unwrap();
        assert_eq!(query.features, vec![MediaFeature::MinHeight(667.5)]);
    }

    #[test]
    fn test_parse_modifiers() {
        let query = MediaQuery::parse("not ios").unwrap();
        assert_eq!(query.modifier, Some(MediaModifier::Not));

        let query = MediaQuery::parse("only all and (min-width: 100px)").unwrap();
        assert_eq!(query.modifier, Some(MediaModifier::Only));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let query = MediaQuery::parse("IOS AND (MIN-WIDTH: 768PX)").unwrap();
        assert_eq!(query.media_type, Some(MediaType::Platform("ios".to_string())));
        assert_eq!(query.features, vec![MediaFeature::MinWidth(768.0)]);
    }

    #[test]
    fn test_parse_whitespace_tolerance() {
        let query = MediaQuery::parse("  all   and   ( min-width :  768px )  ").unwrap();
        assert_eq!(query.features, vec![MediaFeature::MinWidth(768.0)]);
    }

    #[test]
    fn test_parse_list_comma_separated() {
        let queries = MediaQuery::parse_list("ios, android and (min-width: 600px)").unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].media_type, Some(MediaType::Platform("ios".to_string())));
    }

    // =========================================================================
    // Parse errors
    // =========================================================================

    #[test]
    fn test_parse_empty_is_error() {
        assert_eq!(MediaQuery::parse(""), Err(ParseError::EmptyQuery));
        assert_eq!(MediaQuery::parse("   "), Err(ParseError::EmptyQuery));
    }

    #[test]
    fn test_parse_unknown_feature() {
        assert_eq!(
            MediaQuery::parse("(hover: hover)"),
            Err(ParseError::UnknownFeature("hover".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(
            MediaQuery::parse("(min-width)"),
            Err(ParseError::MissingValue("min-width".to_string()))
        );
        assert_eq!(
            MediaQuery::parse("(min-width: )"),
            Err(ParseError::MissingValue("min-width".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid_length() {
        assert_eq!(
            MediaQuery::parse("(min-width: 16em)"),
            Err(ParseError::InvalidValue {
                feature: "min-width".to_string(),
                value: "16em".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_invalid_orientation() {
        assert_eq!(
            MediaQuery::parse("(orientation: sideways)"),
            Err(ParseError::InvalidOrientation("sideways".to_string()))
        );
    }

    #[test]
    fn test_parse_unclosed_feature() {
        assert_eq!(
            MediaQuery::parse("(min-width: 768px"),
            Err(ParseError::ExpectedCloseParen)
        );
    }

    #[test]
    fn test_parse_trailing_garbage() {
        assert_eq!(
            MediaQuery::parse("all blah"),
            Err(ParseError::UnexpectedToken("blah".to_string()))
        );
        // A feature after a type requires a joining "and".
        assert!(MediaQuery::parse("ios (min-width: 1px)").is_err());
    }

    #[test]
    fn test_parse_and_without_feature() {
        assert_eq!(
            MediaQuery::parse("all and print"),
            Err(ParseError::ExpectedOpenParen)
        );
    }

    // =========================================================================
    // Evaluation
    // =========================================================================

    #[test]
    fn test_all_matches_everything() {
        let query = MediaQuery::parse("all").unwrap();
        assert!(query.matches(&values("ios", Orientation::Portrait, 320.0, 568.0)));
        assert!(query.matches(&values("android", Orientation::Landscape, 1920.0, 1080.0)));
    }

    #[test]
    fn test_platform_type_matching() {
        let query = MediaQuery::parse("ios").unwrap();
        assert!(query.matches(&values("ios", Orientation::Portrait, 320.0, 568.0)));
        assert!(query.matches(&values("iOS", Orientation::Portrait, 320.0, 568.0)));
        assert!(!query.matches(&values("android", Orientation::Portrait, 320.0, 568.0)));
    }

    #[test]
    fn test_min_width_boundary() {
        let query = MediaQuery::parse("(min-width: 768px)").unwrap();
        assert!(!query.matches(&values("ios", Orientation::Portrait, 767.0, 1024.0)));
        assert!(query.matches(&values("ios", Orientation::Portrait, 768.0, 1024.0)));
        assert!(query.matches(&values("ios", Orientation::Portrait, 769.0, 1024.0)));
    }

    #[test]
    fn test_max_width_boundary() {
        let query = MediaQuery::parse("(max-width: 1024px)").unwrap();
        assert!(query.matches(&values("ios", Orientation::Portrait, 1024.0, 768.0)));
        assert!(!query.matches(&values("ios", Orientation::Portrait, 1025.0, 768.0)));
    }

    #[test]
    fn test_exact_width_tolerance() {
        let query = MediaQuery::parse("(width: 768px)").unwrap();
        assert!(query.matches(&values("ios", Orientation::Portrait, 768.25, 1024.0)));
        assert!(!query.matches(&values("ios", Orientation::Portrait, 770.0, 1024.0)));
    }

    #[test]
    fn test_height_features() {
        let query = MediaQuery::parse("(min-height: 600px) and (max-height: 900px)").unwrap();
        assert!(query.matches(&values("ios", Orientation::Portrait, 400.0, 700.0)));
        assert!(!query.matches(&values("ios", Orientation::Portrait, 400.0, 500.0)));
        assert!(!query.matches(&values("ios", Orientation::Portrait, 400.0, 1000.0)));
    }

    #[test]
    fn test_orientation_feature() {
        let query = MediaQuery::parse("(orientation: landscape)").unwrap();
        assert!(query.matches(&values("ios", Orientation::Landscape, 1024.0, 768.0)));
        assert!(!query.matches(&values("ios", Orientation::Portrait, 768.0, 1024.0)));
    }

    #[test]
    fn test_conjunction_requires_all_features() {
        let query = MediaQuery::parse("ios and (min-width: 768px) and (orientation: landscape)")
            .unwrap();
        assert!(query.matches(&values("ios", Orientation::Landscape, 1024.0, 768.0)));
        assert!(!query.matches(&values("ios", Orientation::Portrait, 1024.0, 768.0)));
        assert!(!query.matches(&values("android", Orientation::Landscape, 1024.0, 768.0)));
        assert!(!query.matches(&values("ios", Orientation::Landscape, 700.0, 500.0)));
    }

    #[test]
    fn test_not_inverts() {
        let query = MediaQuery::parse("not ios").unwrap();
        assert!(!query.matches(&values("ios", Orientation::Portrait, 320.0, 568.0)));
        assert!(query.matches(&values("android", Orientation::Portrait, 320.0, 568.0)));
    }

    #[test]
    fn test_only_is_inert() {
        let plain = MediaQuery::parse("ios").unwrap();
        let only = MediaQuery::parse("only ios").unwrap();
        let v = values("ios", Orientation::Portrait, 320.0, 568.0);
        assert_eq!(plain.matches(&v), only.matches(&v));
    }

    // =========================================================================
    // Display
    // =========================================================================

    #[test]
    fn test_display_round_trips_text() {
        for selector in [
            "all",
            "ios and (min-width: 768px)",
            "not android and (orientation: landscape)",
            "(max-height: 900px)",
        ] {
            let query = MediaQuery::parse(selector).unwrap();
            assert_eq!(query.to_string(), selector);
        }
    }

    #[test]
    fn test_media_values_from_context() {
        let ctx = ResponsiveContext::new(1024.0, 768.0, "android");
        let v = MediaValues::from(&ctx);
        assert_eq!(v.media_type, "android");
        assert_eq!(v.orientation, Orientation::Landscape);
        assert_eq!(v.width, 1024.0);
        assert_eq!(v.height, 768.0);
    }
}
