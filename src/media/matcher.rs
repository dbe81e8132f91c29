//! Selector matching abstraction.

use crate::media::query::{MediaQuery, MediaValues};
use crate::media::ParseError;

/// Decides whether a selector applies to a set of viewport values.
///
/// The built-in [`MediaQueryMatcher`] interprets selectors as CSS-style media
/// queries, but sheets accept any implementation, so selector syntax can be
/// swapped out without touching style resolution. Closures with the matching
/// signature implement this trait directly:
///
/// ```
/// use mediasheet::{MediaValues, SelectorMatcher};
///
/// let exact = |selector: &str, values: &MediaValues| Ok(selector == values.media_type);
/// let values = MediaValues::default();
/// assert!(exact.matches("all", &values).unwrap());
/// assert!(!exact.matches("ios", &values).unwrap());
/// ```
pub trait SelectorMatcher: Send + Sync {
    /// Returns whether `selector` applies to `values`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the selector cannot be interpreted.
    fn matches(&self, selector: &str, values: &MediaValues) -> Result<bool, ParseError>;
}

impl<F> SelectorMatcher for F
where
    F: Fn(&str, &MediaValues) -> Result<bool, ParseError> + Send + Sync,
{
    fn matches(&self, selector: &str, values: &MediaValues) -> Result<bool, ParseError> {
        self(selector, values)
    }
}

/// The default matcher: selectors are media query lists.
///
/// A comma-separated list matches when any of its queries does.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryMatcher;

impl MediaQueryMatcher {
    /// Creates a media query matcher.
    pub fn new() -> Self {
        Self
    }
}

impl SelectorMatcher for MediaQueryMatcher {
    fn matches(&self, selector: &str, values: &MediaValues) -> Result<bool, ParseError> {
        let queries = MediaQuery::parse_list(selector)?;
        Ok(queries.iter().any(|query| query.matches(values)))
    }
}
