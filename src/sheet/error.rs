//! Sheet-level errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::media::ParseError;

/// Errors from building, loading, or resolving a style sheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    /// A style key that the sheet does not contain.
    #[error("unknown style key '{key}'")]
    UnknownKey {
        /// The requested key.
        key: String,
    },

    /// A selector failed to parse or match, annotated with where it lives.
    #[error("style '{key}': selector '{selector}': {source}")]
    Selector {
        /// The style the selector belongs to.
        key: String,
        /// The offending selector text.
        selector: String,
        /// The underlying parse failure.
        source: ParseError,
    },

    /// A configuration document could not be interpreted.
    #[error("invalid style config: {message}")]
    Config {
        /// Deserializer message.
        message: String,
    },

    /// A configuration file could not be read.
    #[error("failed to read style config from {}: {message}", path.display())]
    Read {
        /// The path that failed.
        path: PathBuf,
        /// The I/O error text.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_messages() {
        let err = SheetError::UnknownKey {
            key: "heder".to_string(),
        };
        assert_eq!(err.to_string(), "unknown style key 'heder'");

        let err = SheetError::Selector {
            key: "title".to_string(),
            selector: "(hover: hover)".to_string(),
            source: ParseError::UnknownFeature("hover".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "style 'title': selector '(hover: hover)': unknown media feature 'hover'"
        );
    }

    #[test]
    fn test_selector_error_exposes_source() {
        let err = SheetError::Selector {
            key: "title".to_string(),
            selector: "bad((".to_string(),
            source: ParseError::ExpectedFeatureName,
        };
        let source = err.source().expect("selector errors carry a source");
        assert_eq!(source.to_string(), ParseError::ExpectedFeatureName.to_string());
    }
}
