//! Mapping narrative steps onto the scroll axis.
//!
//! Every step renders as a blurb positioned some number of pixels down
//! the scroll trigger. A step with an explicit offset lands where its
//! animation moment plays; untimed steps are spread evenly across the
//! trigger instead.

use crate::foundation::core::FRAME_RATE;
use crate::narrative::model::{Narrative, Step};

/// Minimum trigger extent, in viewport heights.
const MIN_VIEWPORT_SPANS: f64 = 3.0;

/// Conversion between animation time and scroll distance.
///
/// One frame of animation corresponds to `playback_constant` pixels of
/// scroll, so the whole timeline spans `duration_frames * playback_constant`
/// pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineScale {
    /// Length of the animation, in frames.
    pub duration_frames: f64,
    /// Frames of animation per second of explicit step offset.
    pub frame_rate: f64,
    /// Pixels of scroll per frame of animation.
    pub playback_constant: f64,
}

impl TimelineScale {
    /// Scale for an animation at the default frame rate.
    pub fn new(duration_frames: f64, playback_constant: f64) -> Self {
        Self {
            duration_frames,
            frame_rate: FRAME_RATE,
            playback_constant,
        }
    }

    /// Scroll distance covered by the full animation, in pixels.
    pub fn full_extent_px(&self) -> f64 {
        self.duration_frames * self.playback_constant
    }

    /// Trigger extent before completion settles it, in pixels.
    ///
    /// Never shorter than three viewport heights, so short animations
    /// still leave room to scroll through.
    pub fn trigger_extent_px(&self, viewport_height: f64) -> f64 {
        self.full_extent_px().max(viewport_height * MIN_VIEWPORT_SPANS)
    }

    /// Pixel offset of one step's blurb down the trigger.
    ///
    /// A step with an explicit offset lands at `seconds * frame_rate *
    /// playback_constant`. Untimed steps fall back to an even spread over
    /// the full extent, with the first blurb pulled halfway up so it sits
    /// near the opening of the story.
    pub fn blurb_offset_px(&self, index: usize, step: &Step, step_count: usize) -> f64 {
        if let Some(seconds) = step.effective_offset_seconds() {
            return seconds * self.frame_rate * self.playback_constant;
        }
        let spread = ((index as f64 + 0.5) * self.full_extent_px()) / step_count as f64;
        if index == 0 { spread / 2.0 } else { spread }
    }

    /// Offsets for every step of a narrative, in order.
    pub fn resolve_offsets(&self, narrative: &Narrative) -> Vec<f64> {
        let count = narrative.len();
        narrative
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| self.blurb_offset_px(index, step, count))
            .collect()
    }

    /// Trigger extent once the story has completed, in pixels.
    ///
    /// The trigger shrinks to the last blurb's offset plus one viewport
    /// height, trimming the dead scroll below the story. An empty
    /// narrative has nothing to settle against.
    pub fn settle_extent_px(&self, narrative: &Narrative, viewport_height: f64) -> Option<f64> {
        let count = narrative.len();
        let last = narrative.steps.last()?;
        Some(self.blurb_offset_px(count - 1, last, count) + viewport_height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/overlay.rs"]
mod tests;
