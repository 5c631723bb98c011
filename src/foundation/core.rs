pub use kurbo::Size;

/// Discrete animation frame position (0-based).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Fixed frame rate of the driven animation, in frames per second.
///
/// Overlay offsets convert authored seconds to frames with this rate; the
/// external player is expected to have been exported at the same rate.
pub const FRAME_RATE: f64 = 30.0;

/// Clamp a progress-like value into `[0, 1]`, mapping NaN to `0`.
pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// A viewport is measurable once both dimensions are strictly positive.
pub(crate) fn is_measurable(viewport: Size) -> bool {
    viewport.width > 0.0 && viewport.height > 0.0
}
