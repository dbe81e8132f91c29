//! Media query parse errors.

use thiserror::Error;

/// Error from parsing a media-query selector string.
///
/// Selector syntax is never checked when a sheet is built; a malformed
/// selector surfaces here the first time the matcher sees it (or through
/// [`StyleSheet::validate`](crate::StyleSheet::validate)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The selector (or one comma-separated query in it) is empty.
    #[error("empty media query")]
    EmptyQuery,
    /// Expected `(` to open a feature after `and`.
    #[error("expected '(' after 'and'")]
    ExpectedOpenParen,
    /// A feature was opened but never closed.
    #[error("expected ')' to close media feature")]
    ExpectedCloseParen,
    /// `(` was not followed by a feature name.
    #[error("expected feature name after '('")]
    ExpectedFeatureName,
    /// Feature name outside the supported grammar.
    #[error("unknown media feature '{0}'")]
    UnknownFeature(String),
    /// Feature declared without a value, e.g. `(min-width)`.
    #[error("missing value for media feature '{0}'")]
    MissingValue(String),
    /// Feature value could not be interpreted.
    #[error("invalid value '{value}' for media feature '{feature}'")]
    InvalidValue { feature: String, value: String },
    /// Orientation value other than `portrait`/`landscape`.
    #[error("invalid orientation '{0}' (expected 'portrait' or 'landscape')")]
    InvalidOrientation(String),
    /// Input left over after a complete query.
    #[error("unexpected token '{0}' in media query")]
    UnexpectedToken(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ParseError::EmptyQuery.to_string(), "empty media query");
        assert_eq!(
            ParseError::UnknownFeature("hover".to_string()).to_string(),
            "unknown media feature 'hover'"
        );
        assert_eq!(
            ParseError::InvalidValue {
                feature: "min-width".to_string(),
                value: "16em".to_string(),
            }
            .to_string(),
            "invalid value '16em' for media feature 'min-width'"
        );
        assert_eq!(
            ParseError::InvalidOrientation("sideways".to_string()).to_string(),
            "invalid orientation 'sideways' (expected 'portrait' or 'landscape')"
        );
        assert_eq!(
            ParseError::UnexpectedToken("blah".to_string()).to_string(),
            "unexpected token 'blah' in media query"
        );
    }
}
