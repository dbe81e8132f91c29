//! Style fragments: the unit of conditional styling.

use std::fmt;
use std::sync::Arc;

use crate::context::ResponsiveContext;
use crate::style::StyleMap;

/// A function that derives a style map from the current context.
///
/// Must be pure: fragments are re-evaluated on every resolution and may be
/// called concurrently from multiple callers.
pub type DynamicFn = Arc<dyn Fn(&ResponsiveContext) -> StyleMap + Send + Sync>;

/// One unit of conditional style, attached to a selector.
///
/// A fragment is either a fixed property mapping or a function of the
/// [`ResponsiveContext`]. The two shapes are explicit variants, and every
/// consumer dispatches on the variant rather than inspecting the value.
///
/// # Example
///
/// ```rust
/// use mediasheet::{style, ResponsiveContext, StyleFragment};
///
/// let fixed = StyleFragment::from(style! { "padding": 8 });
/// let scaled = StyleFragment::from_fn(|ctx| style! { "fontSize": ctx.width / 10.0 });
///
/// let ctx = ResponsiveContext::new(1000.0, 600.0, "ios");
/// assert_eq!(scaled.evaluate(&ctx).get("fontSize"), Some(&100.into()));
/// ```
#[derive(Clone)]
pub enum StyleFragment {
    /// A fixed property mapping, used as-is.
    Static(StyleMap),
    /// A pure function of the context, invoked on every resolution.
    Dynamic(DynamicFn),
}

impl StyleFragment {
    /// Wraps a closure as a dynamic fragment.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&ResponsiveContext) -> StyleMap + Send + Sync + 'static,
    {
        StyleFragment::Dynamic(Arc::new(f))
    }

    /// Evaluates the fragment against a context.
    ///
    /// Static fragments are returned as-is; dynamic fragments are invoked
    /// with the full context. A panicking dynamic fragment propagates to the
    /// caller; fragment failures are configuration errors, and nothing here
    /// catches them.
    pub fn evaluate(&self, context: &ResponsiveContext) -> StyleMap {
        match self {
            StyleFragment::Static(map) => map.clone(),
            StyleFragment::Dynamic(f) => f(context),
        }
    }

    /// Returns true for dynamic fragments.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, StyleFragment::Dynamic(_))
    }

    /// Returns the fixed mapping, if this fragment is static.
    pub fn as_static(&self) -> Option<&StyleMap> {
        match self {
            StyleFragment::Static(map) => Some(map),
            StyleFragment::Dynamic(_) => None,
        }
    }
}

impl From<StyleMap> for StyleFragment {
    fn from(map: StyleMap) -> Self {
        StyleFragment::Static(map)
    }
}

impl fmt::Debug for StyleFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleFragment::Static(map) => f.debug_tuple("Static").field(map).finish(),
            StyleFragment::Dynamic(_) => f.write_str("Dynamic(<fn>)"),
        }
    }
}

impl PartialEq for StyleFragment {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StyleFragment::Static(a), StyleFragment::Static(b)) => a == b,
            (StyleFragment::Dynamic(a), StyleFragment::Dynamic(b)) => {
                // Same underlying allocation; closures have no deeper equality.
                std::ptr::eq(
                    Arc::as_ptr(a) as *const (),
                    Arc::as_ptr(b) as *const (),
                )
            }
            _ => false,
        }
    }
}
