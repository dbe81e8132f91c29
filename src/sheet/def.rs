//! Style definitions.

use crate::style::{StyleFragment, StyleMap};

/// A style definition: base properties plus conditional overrides.
///
/// Definitions are built fluently and handed to a
/// [`StyleSheetBuilder`](crate::StyleSheetBuilder). The base applies always;
/// each conditional fragment applies only when its selector matches the
/// resolution context.
///
/// # Examples
///
/// ```
/// use mediasheet::{style, StyleDef};
///
/// let def = StyleDef::new()
///     .prop("flexDirection", "column")
///     .prop("padding", 16.0)
///     .media("(min-width: 768px)", style! { "flexDirection": "row" });
/// assert!(def.has_conditional());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleDef {
    base: StyleMap,
    conditional: Vec<(String, StyleFragment)>,
}

impl StyleDef {
    /// Creates an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a base property.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<crate::PropertyValue>) -> Self {
        self.base.insert(name, value);
        self
    }

    /// Adds a conditional fragment under a selector.
    ///
    /// Repeating a selector replaces its fragment while keeping the
    /// selector's original position, so declaration order stays meaningful
    /// for specificity ties.
    pub fn media(mut self, selector: impl Into<String>, fragment: impl Into<StyleFragment>) -> Self {
        let selector = selector.into();
        let fragment = fragment.into();
        match self.conditional.iter_mut().find(|(s, _)| *s == selector) {
            Some(entry) => entry.1 = fragment,
            None => self.conditional.push((selector, fragment)),
        }
        self
    }

    /// Adds a conditional fragment computed from the context at resolve time.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediasheet::{style, ResponsiveContext, StyleDef};
    ///
    /// let def = StyleDef::new()
    ///     .media_fn("all", |ctx: &ResponsiveContext| style! { "width": ctx.width / 2.0 });
    /// ```
    pub fn media_fn<F>(self, selector: impl Into<String>, f: F) -> Self
    where
        F: Fn(&crate::ResponsiveContext) -> StyleMap + Send + Sync + 'static,
    {
        self.media(selector, StyleFragment::from_fn(f))
    }

    /// The unconditional base properties.
    pub fn base(&self) -> &StyleMap {
        &self.base
    }

    /// The conditional fragments in declaration order.
    pub fn conditional(&self) -> impl Iterator<Item = (&str, &StyleFragment)> {
        self.conditional.iter().map(|(s, f)| (s.as_str(), f))
    }

    /// Whether any conditional fragments are present.
    pub fn has_conditional(&self) -> bool {
        !self.conditional.is_empty()
    }

    pub(crate) fn into_parts(self) -> (StyleMap, Vec<(String, StyleFragment)>) {
        (self.base, self.conditional)
    }

    pub(crate) fn push_conditional(&mut self, selector: String, fragment: StyleFragment) {
        match self.conditional.iter_mut().find(|(s, _)| *s == selector) {
            Some(entry) => entry.1 = fragment,
            None => self.conditional.push((selector, fragment)),
        }
    }
}

impl From<StyleMap> for StyleDef {
    /// A plain map becomes an unconditional definition.
    fn from(base: StyleMap) -> Self {
        Self {
            base,
            conditional: Vec::new(),
        }
    }
}
