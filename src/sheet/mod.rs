//! Style sheets: definition, compilation, and resolution.
//!
//! A sheet is built once from definitions and resolved many times against
//! viewport contexts. Building compiles every base style through a
//! [`StyleCompiler`] and pre-sorts each style's conditional selectors by
//! specificity; resolving walks that order, asks a [`SelectorMatcher`] which
//! selectors apply, and merges the matching fragments over the base.
//!
//! - [`StyleSheet`] is the built, resolvable sheet
//! - [`StyleSheetBuilder`] assembles definitions, a compiler, and a matcher
//! - [`StyleDef`] is one style's base properties plus conditional fragments
//! - [`SheetConfig`] loads definitions from JSON documents
//! - [`ResolvedStyle`] and [`ConditionalStyle`] are the built per-style state
//! - [`SheetError`] covers unknown keys, bad selectors, and config failures

mod compile;
mod config;
mod def;
mod error;
mod specificity;

pub use compile::{absolute_fill, CompiledStyle, InlineCompiler, StyleCompiler};
pub use config::{SheetConfig, MEDIA_KEY};
pub use def::StyleDef;
pub use error::SheetError;
pub use specificity::{compare_specificity, conjunction_count, is_catch_all, order_selectors};

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use log::{debug, trace};

use crate::context::ResponsiveContext;
use crate::media::{MediaQueryMatcher, MediaValues, SelectorMatcher};
use crate::style::{StyleFragment, StyleMap};

/// A built style sheet.
///
/// Construction happens once through [`StyleSheet::builder`] or one of the
/// config loaders; afterwards the sheet is immutable and cheap to clone, and
/// [`resolve`](StyleSheet::resolve) can be called per render.
///
/// # Examples
///
/// ```
/// use mediasheet::{style, ResponsiveContext, StyleDef, StyleSheet};
///
/// let sheet = StyleSheet::builder()
///     .style(
///         "container",
///         StyleDef::new()
///             .prop("padding", 16.0)
///             .media("(min-width: 768px)", style! { "padding": 32.0 }),
///     )
///     .build();
///
/// let phone = sheet.resolve("container", &ResponsiveContext::ios(375.0, 812.0))?;
/// assert_eq!(phone.get("padding").unwrap().as_number(), Some(16.0));
///
/// let tablet = sheet.resolve("container", &ResponsiveContext::ios(768.0, 1024.0))?;
/// assert_eq!(tablet.get("padding").unwrap().as_number(), Some(32.0));
/// # Ok::<(), mediasheet::SheetError>(())
/// ```
#[derive(Clone)]
pub struct StyleSheet {
    entries: BTreeMap<String, ResolvedStyle>,
    compiler: Arc<dyn StyleCompiler>,
}

impl StyleSheet {
    /// Starts building a sheet.
    pub fn builder() -> StyleSheetBuilder {
        StyleSheetBuilder::new()
    }

    /// Builds a sheet from a parsed configuration with the default compiler
    /// and matcher.
    pub fn create(config: SheetConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Builds a sheet from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Config`] when the document does not parse.
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        Ok(Self::create(SheetConfig::from_json(json)?))
    }

    /// Builds a sheet from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Read`] when the file cannot be read and
    /// [`SheetError::Config`] when its contents do not parse.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SheetError> {
        Ok(Self::create(SheetConfig::from_json_file(path)?))
    }

    /// Looks up a style without resolving it.
    pub fn get(&self, key: &str) -> Option<&ResolvedStyle> {
        self.entries.get(key)
    }

    /// Resolves a style for a context.
    ///
    /// The result is the base properties with every matching conditional
    /// fragment merged on top, in ascending specificity. A style whose
    /// selectors all miss resolves to just its base.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::UnknownKey`] for a key the sheet does not
    /// contain and [`SheetError::Selector`] when a selector fails to parse.
    pub fn resolve(&self, key: &str, context: &ResponsiveContext) -> Result<StyleMap, SheetError> {
        let resolved = self.entries.get(key).ok_or_else(|| SheetError::UnknownKey {
            key: key.to_string(),
        })?;
        resolved.resolve(context)
    }

    /// The style keys in the sheet, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of styles in the sheet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sheet has no styles.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks every selector in the sheet for syntax errors.
    ///
    /// Selectors are otherwise parsed lazily during resolution; call this
    /// after loading untrusted configuration to surface bad selectors up
    /// front.
    ///
    /// # Errors
    ///
    /// Returns the first [`SheetError::Selector`] found.
    pub fn validate(&self) -> Result<(), SheetError> {
        for resolved in self.entries.values() {
            if let Some(overrides) = resolved.overrides() {
                overrides.validate()?;
            }
        }
        Ok(())
    }

    /// The thinnest visible line width reported by the sheet's compiler.
    pub fn hairline_width(&self) -> f32 {
        self.compiler.hairline_width()
    }

    /// Properties that stretch an element over its parent, from the sheet's
    /// compiler.
    pub fn absolute_fill(&self) -> StyleMap {
        self.compiler.absolute_fill()
    }
}

impl fmt::Debug for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSheet")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

/// Assembles a [`StyleSheet`].
///
/// Definitions can come from the fluent API, parsed configs, or both. The
/// compiler and matcher default to [`InlineCompiler`] and
/// [`MediaQueryMatcher`].
pub struct StyleSheetBuilder {
    defs: Vec<(String, StyleDef)>,
    compiler: Arc<dyn StyleCompiler>,
    matcher: Arc<dyn SelectorMatcher>,
}

impl StyleSheetBuilder {
    /// Creates a builder with the default compiler and matcher.
    pub fn new() -> Self {
        Self {
            defs: Vec::new(),
            compiler: Arc::new(InlineCompiler::new()),
            matcher: Arc::new(MediaQueryMatcher::new()),
        }
    }

    /// Adds a style definition.
    ///
    /// Reusing a key replaces the earlier definition while keeping its
    /// position.
    pub fn style(mut self, key: impl Into<String>, def: impl Into<StyleDef>) -> Self {
        let key = key.into();
        let def = def.into();
        match self.defs.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = def,
            None => self.defs.push((key, def)),
        }
        self
    }

    /// Adds every definition from a parsed configuration.
    pub fn config(mut self, config: SheetConfig) -> Self {
        for (key, def) in config.into_entries() {
            self = self.style(key, def);
        }
        self
    }

    /// Replaces the style compiler.
    pub fn compiler(mut self, compiler: impl StyleCompiler + 'static) -> Self {
        self.compiler = Arc::new(compiler);
        self
    }

    /// Replaces the selector matcher.
    pub fn matcher(mut self, matcher: impl SelectorMatcher + 'static) -> Self {
        self.matcher = Arc::new(matcher);
        self
    }

    /// Compiles the definitions into a sheet.
    ///
    /// All base styles are compiled in one batch and each style's selectors
    /// are sorted into application order. Selector syntax is not checked
    /// here; see [`StyleSheet::validate`].
    ///
    /// # Panics
    ///
    /// Panics if the compiler violates its contract by returning no handle
    /// for a style it was given.
    pub fn build(self) -> StyleSheet {
        let Self {
            defs,
            compiler,
            matcher,
        } = self;

        let mut bases: BTreeMap<String, StyleMap> = BTreeMap::new();
        let mut conditionals: Vec<(String, Vec<(String, StyleFragment)>)> = Vec::new();
        for (key, def) in defs {
            let (base, conditional) = def.into_parts();
            bases.insert(key.clone(), base);
            conditionals.push((key, conditional));
        }

        let mut handles = compiler.compile(bases);

        let mut entries = BTreeMap::new();
        let mut responsive = 0usize;
        for (key, mut conditional) in conditionals {
            let base = handles.remove(&key).unwrap_or_else(|| {
                panic!("style compiler returned no handle for style '{key}'")
            });
            let resolved = if conditional.is_empty() {
                ResolvedStyle::Plain(base)
            } else {
                conditional.sort_by(|(a, _), (b, _)| compare_specificity(a, b));
                responsive += 1;
                ResolvedStyle::Responsive {
                    base,
                    overrides: ConditionalStyle {
                        key: Arc::from(key.as_str()),
                        entries: conditional.into(),
                        matcher: Arc::clone(&matcher),
                    },
                }
            };
            entries.insert(key, resolved);
        }

        debug!(
            "built style sheet: {} styles ({} responsive)",
            entries.len(),
            responsive
        );
        StyleSheet { entries, compiler }
    }
}

impl Default for StyleSheetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A style after sheet construction.
#[derive(Debug, Clone)]
pub enum ResolvedStyle {
    /// A style with no conditional fragments.
    Plain(CompiledStyle),
    /// A style whose result depends on the context.
    Responsive {
        /// The compiled base.
        base: CompiledStyle,
        /// The conditional fragments in application order.
        overrides: ConditionalStyle,
    },
}

impl ResolvedStyle {
    /// The compiled base style.
    pub fn base(&self) -> &CompiledStyle {
        match self {
            ResolvedStyle::Plain(base) => base,
            ResolvedStyle::Responsive { base, .. } => base,
        }
    }

    /// The conditional overrides, when the style has any.
    pub fn overrides(&self) -> Option<&ConditionalStyle> {
        match self {
            ResolvedStyle::Plain(_) => None,
            ResolvedStyle::Responsive { overrides, .. } => Some(overrides),
        }
    }

    /// Whether the style carries conditional fragments.
    pub fn is_responsive(&self) -> bool {
        matches!(self, ResolvedStyle::Responsive { .. })
    }

    /// Resolves the style for a context.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Selector`] when a selector fails to parse.
    pub fn resolve(&self, context: &ResponsiveContext) -> Result<StyleMap, SheetError> {
        let mut merged = self.base().props().clone();
        if let Some(overrides) = self.overrides() {
            merged.merge(overrides.resolve(context)?);
        }
        Ok(merged)
    }
}

/// The conditional part of a responsive style.
///
/// Selectors are held pre-sorted by specificity so that resolution is a
/// single pass: match, evaluate, merge.
#[derive(Clone)]
pub struct ConditionalStyle {
    key: Arc<str>,
    entries: Arc<[(String, StyleFragment)]>,
    matcher: Arc<dyn SelectorMatcher>,
}

impl ConditionalStyle {
    /// The style key these overrides belong to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The selectors in application order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(selector, _)| selector.as_str())
    }

    /// Merges every matching fragment, least specific first.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Selector`] naming the style and selector when
    /// the matcher rejects a selector.
    pub fn resolve(&self, context: &ResponsiveContext) -> Result<StyleMap, SheetError> {
        let values = MediaValues::from(context);
        let mut merged = StyleMap::new();
        for (selector, fragment) in self.entries.iter() {
            let matched =
                self.matcher
                    .matches(selector, &values)
                    .map_err(|source| SheetError::Selector {
                        key: self.key.to_string(),
                        selector: selector.clone(),
                        source,
                    })?;
            if !matched {
                trace!("style '{}': selector '{}' skipped", self.key, selector);
                continue;
            }
            trace!("style '{}': selector '{}' applies", self.key, selector);
            merged.merge(fragment.evaluate(context));
        }
        Ok(merged)
    }

    /// Checks every selector against placeholder values to surface syntax
    /// errors without a real context.
    pub(crate) fn validate(&self) -> Result<(), SheetError> {
        let probe = MediaValues::default();
        for (selector, _) in self.entries.iter() {
            self.matcher
                .matches(selector, &probe)
                .map_err(|source| SheetError::Selector {
                    key: self.key.to_string(),
                    selector: selector.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}

impl fmt::Debug for ConditionalStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionalStyle")
            .field("key", &self.key)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
