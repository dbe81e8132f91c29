//! Responsive style resolution with media-query selectors.
//!
//! `mediasheet` brings CSS-style media queries to environments that have no
//! CSS engine: styles are plain property maps, and each style can carry
//! conditional overrides keyed by selectors such as
//! `"ios and (min-width: 768px)"`. A sheet is built once; resolving it
//! against a viewport context merges every matching override over the base,
//! least specific first, so the most specific selector wins each property.
//!
//! # Types
//!
//! - [`StyleSheet`] / [`StyleSheetBuilder`] - build once, resolve per render
//! - [`StyleDef`] - one style's base properties plus conditional fragments
//! - [`ResponsiveContext`] - the viewport snapshot resolution runs against
//! - [`MediaQuery`] - the parsed selector form, usable on its own
//! - [`SheetConfig`] - JSON loading for declarative sheets
//! - [`StyleCompiler`] / [`SelectorMatcher`] - the two injection seams
//!
//! # Quick Start
//!
//! ```
//! use mediasheet::{style, ResponsiveContext, StyleDef, StyleSheet};
//!
//! let sheet = StyleSheet::builder()
//!     .style(
//!         "container",
//!         StyleDef::new()
//!             .prop("flexDirection", "column")
//!             .prop("padding", 16.0)
//!             .media("(min-width: 768px)", style! {
//!                 "flexDirection": "row",
//!                 "padding": 32.0,
//!             })
//!             .media("android", style! { "elevation": 2.0 })
//!             .media_fn("all", |ctx: &ResponsiveContext| style! {
//!                 "maxWidth": ctx.width,
//!             }),
//!     )
//!     .style("separator", style! { "height": 1.0 })
//!     .build();
//!
//! let tablet = sheet.resolve("container", &ResponsiveContext::ios(1024.0, 768.0))?;
//! assert_eq!(tablet.get("flexDirection").unwrap().as_text(), Some("row"));
//! assert_eq!(tablet.get("maxWidth").unwrap().as_number(), Some(1024.0));
//!
//! let phone = sheet.resolve("container", &ResponsiveContext::ios(375.0, 812.0))?;
//! assert_eq!(phone.get("flexDirection").unwrap().as_text(), Some("column"));
//! # Ok::<(), mediasheet::SheetError>(())
//! ```
//!
//! Sheets can also be declared as JSON, with overrides under an `"@media"`
//! key per style:
//!
//! ```
//! use mediasheet::{ResponsiveContext, StyleSheet};
//!
//! let sheet = StyleSheet::from_json(r#"{
//!     "title": {
//!         "fontSize": 16,
//!         "@media": {
//!             "(min-width: 768px)": { "fontSize": 24 }
//!         }
//!     }
//! }"#)?;
//!
//! let resolved = sheet.resolve("title", &ResponsiveContext::android(800.0, 1280.0))?;
//! assert_eq!(resolved.get("fontSize").unwrap().as_number(), Some(24.0));
//! # Ok::<(), mediasheet::SheetError>(())
//! ```

pub mod context;
pub mod media;
pub mod sheet;
pub mod style;

pub use context::ResponsiveContext;
pub use media::{
    MediaFeature, MediaModifier, MediaQuery, MediaQueryMatcher, MediaType, MediaValues,
    Orientation, ParseError, SelectorMatcher,
};
pub use sheet::{
    absolute_fill, compare_specificity, conjunction_count, is_catch_all, order_selectors,
    CompiledStyle, ConditionalStyle, InlineCompiler, ResolvedStyle, SheetConfig, SheetError,
    StyleCompiler, StyleDef, StyleSheet, StyleSheetBuilder, MEDIA_KEY,
};
pub use style::{DynamicFn, PropertyValue, StyleFragment, StyleMap};
