//! Progress to frame index.

use crate::foundation::core::{FrameIndex, clamp01};

/// Frame to hold for a story progress value.
///
/// Progress maps linearly over `[0, total_frames - 1]` and truncates
/// down, so the last frame is reached only at full progress. A player
/// reporting no frames pins frame zero.
pub fn frame_for_progress(progress: f64, total_frames: u64) -> FrameIndex {
    if total_frames == 0 {
        return FrameIndex(0);
    }
    let p = clamp01(progress);
    FrameIndex((p * (total_frames - 1) as f64).floor() as u64)
}

#[cfg(test)]
#[path = "../../tests/unit/driver/frame.rs"]
mod tests;
