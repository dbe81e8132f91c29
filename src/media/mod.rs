//! Media query parsing and matching.
//!
//! Selectors follow a subset of the CSS media query grammar, reinterpreted
//! for app viewports: the media type position holds a platform identifier
//! instead of `screen`/`print`, and the supported features are the viewport
//! dimensions and orientation.
//!
//! - [`MediaQuery`] is a parsed query with a modifier, type, and features
//! - [`MediaFeature`] is a single feature test such as `(min-width: 768px)`
//! - [`MediaValues`] is the concrete viewport state queries are tested against
//! - [`SelectorMatcher`] abstracts matching so the syntax can be replaced
//! - [`MediaQueryMatcher`] is the default matcher built on [`MediaQuery`]
//! - [`ParseError`] covers everything that can go wrong while parsing

mod error;
mod matcher;
mod parser;
mod query;

pub use error::ParseError;
pub use matcher::{MediaQueryMatcher, SelectorMatcher};
pub use query::{
    MediaFeature, MediaModifier, MediaQuery, MediaType, MediaValues, Orientation,
};
