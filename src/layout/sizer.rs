//! Render surface sizing.
//!
//! The animation surface is letterboxed inside the viewport at a fixed
//! aspect ratio, unless the scroller is configured to fill the frame.

use crate::foundation::core::Size;

/// Aspect bucket for a viewport width, split at the handset breakpoint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AspectClass {
    /// Narrower than the breakpoint.
    Small,
    /// At or above the breakpoint.
    Large,
}

/// Sizing inputs that stay fixed for the lifetime of a scroller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Ratio used when breakpoint selection does not apply.
    pub width_ratio: f64,
    /// Ratio for viewports classified [`AspectClass::Small`].
    pub small_width_ratio: f64,
    /// Ratio for viewports classified [`AspectClass::Large`].
    pub large_width_ratio: f64,
    /// Whether the small breakpoint participates in ratio selection.
    pub include_small: bool,
    /// Viewport width below which a viewport is classified small.
    pub small_breakpoint_px: f64,
    /// Fill the whole viewport instead of letterboxing.
    pub full_frame: bool,
}

impl LayoutOptions {
    /// Classify a viewport width against the small breakpoint.
    pub fn classify(&self, viewport_width: f64) -> AspectClass {
        if viewport_width < self.small_breakpoint_px {
            AspectClass::Small
        } else {
            AspectClass::Large
        }
    }

    /// Width ratio for a viewport.
    ///
    /// Breakpoint selection applies only when enabled and the small ratio
    /// is usable; otherwise the base ratio wins.
    pub fn select_width_ratio(&self, viewport_width: f64) -> f64 {
        if self.include_small && self.small_width_ratio > 0.0 {
            match self.classify(viewport_width) {
                AspectClass::Small => self.small_width_ratio,
                AspectClass::Large => self.large_width_ratio,
            }
        } else {
            self.width_ratio
        }
    }
}

/// Letterbox a render surface into `viewport` at `width_ratio`.
///
/// Viewports taller than the ratio allows are width-limited, wider ones
/// are height-limited. `full_frame` skips letterboxing entirely.
pub fn render_size(viewport: Size, width_ratio: f64, full_frame: bool) -> Size {
    if full_frame {
        return viewport;
    }
    let constrained_height = viewport.width / width_ratio;
    if viewport.height > constrained_height {
        Size::new(viewport.width, constrained_height)
    } else {
        Size::new(viewport.height * width_ratio, viewport.height)
    }
}

/// Sizing state derived from one viewport measurement.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutState {
    /// Measured viewport.
    pub viewport: Size,
    /// Letterboxed animation surface.
    pub render: Size,
    /// Ratio that produced `render`.
    pub width_ratio: f64,
}

impl LayoutState {
    /// Derive the layout for a measured viewport.
    pub fn derive(options: &LayoutOptions, viewport: Size) -> Self {
        let width_ratio = options.select_width_ratio(viewport.width);
        let render = render_size(viewport, width_ratio, options.full_frame);
        Self {
            viewport,
            render,
            width_ratio,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sizer.rs"]
mod tests;
