//! Style compilation backends.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::style::StyleMap;

/// A handle to a compiled base style.
///
/// Sheets compile all base property maps in one batch when they are built and
/// keep the resulting handles. The numeric id is assigned by the compiler and
/// can reference an entry in an external style registry; the properties are
/// retained so resolution can layer conditional overrides on top.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledStyle {
    id: usize,
    props: Arc<StyleMap>,
}

impl CompiledStyle {
    /// Creates a handle from an id and the properties it stands for.
    pub fn new(id: usize, props: StyleMap) -> Self {
        Self {
            id,
            props: Arc::new(props),
        }
    }

    /// The compiler-assigned id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The base properties behind the handle.
    pub fn props(&self) -> &StyleMap {
        &self.props
    }
}

/// Compiles base styles into handles.
///
/// Implementations wrap whatever the rendering layer wants styles registered
/// as. The built-in [`InlineCompiler`] keeps properties inline and is enough
/// whenever no external registry exists.
pub trait StyleCompiler: Send + Sync {
    /// Compiles a batch of named base styles.
    ///
    /// Called once per sheet build with every style's base properties. The
    /// returned map must contain a handle for every input key.
    fn compile(&self, sheet: BTreeMap<String, StyleMap>) -> BTreeMap<String, CompiledStyle>;

    /// The thinnest visible line width on the target, in device-independent
    /// pixels.
    fn hairline_width(&self) -> f32 {
        1.0
    }

    /// Properties that stretch an element over its entire parent.
    fn absolute_fill(&self) -> StyleMap {
        absolute_fill()
    }
}

/// The default compiler: styles stay inline, ids count up from zero.
#[derive(Debug, Clone, Copy)]
pub struct InlineCompiler {
    scale: f32,
}

impl InlineCompiler {
    /// Creates a compiler for a display scale of 1.
    pub fn new() -> Self {
        Self { scale: 1.0 }
    }

    /// Creates a compiler for a given display scale (pixels per
    /// device-independent pixel).
    ///
    /// # Panics
    ///
    /// Panics if `scale` is not finite and positive.
    pub fn with_scale(scale: f32) -> Self {
        assert!(
            scale.is_finite() && scale > 0.0,
            "display scale must be finite and positive, got {scale}"
        );
        Self { scale }
    }
}

impl Default for InlineCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleCompiler for InlineCompiler {
    fn compile(&self, sheet: BTreeMap<String, StyleMap>) -> BTreeMap<String, CompiledStyle> {
        sheet
            .into_iter()
            .enumerate()
            .map(|(id, (key, props))| (key, CompiledStyle::new(id, props)))
            .collect()
    }

    fn hairline_width(&self) -> f32 {
        1.0 / self.scale
    }
}

/// Properties that pin an element to all four edges of its parent.
///
/// # Examples
///
/// ```
/// use mediasheet::absolute_fill;
///
/// let fill = absolute_fill();
/// assert_eq!(fill.get("position").unwrap().as_text(), Some("absolute"));
/// ```
pub fn absolute_fill() -> StyleMap {
    crate::style! {
        "position": "absolute",
        "left": 0.0,
        "right": 0.0,
        "top": 0.0,
        "bottom": 0.0,
    }
}
