//! Scroll position to story progress.

use crate::foundation::core::{FrameIndex, clamp01};

/// Measured placement of the scroll trigger in document coordinates.
///
/// Hosts report what they actually measure, which may lag the extent the
/// engine last requested while a settle transition plays out.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriggerBounds {
    /// Distance from the document top to the trigger's top edge.
    pub top: f64,
    /// Measured trigger height.
    pub height: f64,
}

impl TriggerBounds {
    /// Bounds at `top` with `height`.
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Snapshot of the scroll-driven state of one session.
///
/// `has_completed` is write-once for the session lifetime; progress and
/// the current frame keep moving afterwards for visual fidelity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollState {
    /// Latest computed progress, in `[0, 1]`.
    pub progress: f64,
    /// Frame most recently commanded.
    pub current_frame: FrameIndex,
    /// Whether the story has completed.
    pub has_completed: bool,
    /// Trigger height the engine wants, in pixels.
    pub trigger_height_px: f64,
}

/// Progress through the story for a scroll position, in `[0, 1]`.
///
/// The story runs from the moment the trigger's top edge enters the
/// bottom of the viewport until the viewport passes its bottom edge.
/// A degenerate trigger with no scrollable range reads as not started
/// above it and finished at or below it.
pub fn scroll_progress(scroll_y: f64, bounds: TriggerBounds, viewport_height: f64) -> f64 {
    let start = bounds.top - viewport_height;
    let end = bounds.top + bounds.height;
    let range = end - start;
    if range <= 0.0 {
        return if scroll_y < start { 0.0 } else { 1.0 };
    }
    clamp01((scroll_y - start) / range)
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;
