//! Viewport context for style resolution.

use serde::{Deserialize, Serialize};

use crate::media::Orientation;

/// A snapshot of the viewport at resolution time.
///
/// Resolution is a pure function of this context: the same sheet and the same
/// context always produce the same styles. Callers rebuild the context when
/// the window resizes or rotates and resolve again.
///
/// # Examples
///
/// ```
/// use mediasheet::{Orientation, ResponsiveContext};
///
/// let ctx = ResponsiveContext::new(768.0, 1024.0, "ios");
/// assert_eq!(ctx.orientation, Orientation::Portrait);
///
/// let ctx = ResponsiveContext::new(1024.0, 768.0, "ios");
/// assert_eq!(ctx.orientation, Orientation::Landscape);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveContext {
    /// Viewport width in device-independent pixels.
    pub width: f32,
    /// Viewport height in device-independent pixels.
    pub height: f32,
    /// Current orientation.
    pub orientation: Orientation,
    /// Platform identifier matched against the media type position of
    /// selectors (`"ios"`, `"android"`, `"web"`, ...).
    pub platform: String,
}

impl ResponsiveContext {
    /// Creates a context, deriving orientation from the dimensions.
    ///
    /// A square viewport counts as portrait, matching the CSS `orientation`
    /// feature.
    pub fn new(width: f32, height: f32, platform: impl Into<String>) -> Self {
        let orientation = if height >= width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        };
        Self {
            width,
            height,
            orientation,
            platform: platform.into(),
        }
    }

    /// Overrides the derived orientation.
    ///
    /// Useful when the platform reports orientation independently of the
    /// window dimensions (split-screen, floating windows).
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Creates an iOS context.
    pub fn ios(width: f32, height: f32) -> Self {
        Self::new(width, height, "ios")
    }

    /// Creates an Android context.
    pub fn android(width: f32, height: f32) -> Self {
        Self::new(width, height, "android")
    }
}
