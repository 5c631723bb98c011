//! Scroller configuration.

use std::time::Duration;

use crate::foundation::error::{ScrollyError, ScrollyResult};
use crate::layout::sizer::LayoutOptions;

/// Timeline length assumed until a player reports its own, in frames.
///
/// Also substituted when a player reports an empty timeline.
pub const DEFAULT_TOTAL_FRAMES: u64 = 300;

/// Tunables for a scroller session.
///
/// Defaults reproduce a 16:9 letterboxed story at 50 px of scroll per
/// frame, dropping to 9:16 at 20 px per frame on handset-width
/// viewports.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollerConfig {
    /// Pixels of scroll per animation frame.
    pub playback_constant: f64,
    /// Pixels of scroll per frame below the small breakpoint.
    pub small_playback_constant: f64,
    /// Aspect ratio when breakpoint selection does not apply.
    pub width_ratio: f64,
    /// Aspect ratio below the small breakpoint.
    pub small_width_ratio: f64,
    /// Aspect ratio at or above the small breakpoint.
    pub large_width_ratio: f64,
    /// Whether handset-width viewports get their own ratio and pace.
    pub include_small: bool,
    /// Viewport width separating small from large, in pixels.
    pub small_breakpoint_px: f64,
    /// Fill the viewport instead of letterboxing the surface.
    pub full_frame: bool,
    /// Description of the animation for assistive technology.
    pub aria_description: String,
    /// Asset directory forwarded to hosts that resolve media by path.
    pub directory: String,
    /// How long resizes must stay quiet before the engine reacts.
    pub resize_settle: Duration,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            playback_constant: 50.0,
            small_playback_constant: 20.0,
            width_ratio: 1.78,
            small_width_ratio: 0.5625,
            large_width_ratio: 1.78,
            include_small: true,
            small_breakpoint_px: 600.0,
            full_frame: false,
            aria_description: String::new(),
            directory: String::new(),
            resize_settle: Duration::from_millis(250),
        }
    }
}

impl ScrollerConfig {
    /// Check that every tunable is usable.
    ///
    /// Ratios and playback constants must be finite and positive; the
    /// small ratio may be zero, which disables breakpoint selection. The
    /// resize settle window must be nonzero.
    pub fn validate(&self) -> ScrollyResult<()> {
        for (name, value) in [
            ("playback_constant", self.playback_constant),
            ("small_playback_constant", self.small_playback_constant),
            ("width_ratio", self.width_ratio),
            ("large_width_ratio", self.large_width_ratio),
            ("small_breakpoint_px", self.small_breakpoint_px),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ScrollyError::validation(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if !(self.small_width_ratio.is_finite() && self.small_width_ratio >= 0.0) {
            return Err(ScrollyError::validation(format!(
                "small_width_ratio must be finite and non-negative, got {}",
                self.small_width_ratio
            )));
        }
        if self.resize_settle.is_zero() {
            return Err(ScrollyError::validation("resize_settle must be nonzero"));
        }
        Ok(())
    }

    /// Scroll pace for a viewport width.
    pub fn playback_constant_for(&self, viewport_width: f64) -> f64 {
        if self.include_small && viewport_width < self.small_breakpoint_px {
            self.small_playback_constant
        } else {
            self.playback_constant
        }
    }

    /// Sizing inputs for the layout solver.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            width_ratio: self.width_ratio,
            small_width_ratio: self.small_width_ratio,
            large_width_ratio: self.large_width_ratio,
            include_small: self.include_small,
            small_breakpoint_px: self.small_breakpoint_px,
            full_frame: self.full_frame,
        }
    }
}
