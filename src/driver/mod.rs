//! Driving an external frame player from story progress.

/// Progress to frame index.
pub mod frame;
/// Player capability and the recording double.
pub mod player;
