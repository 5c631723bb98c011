//! Frame player capability.

use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::core::FrameIndex;

/// An animation player the engine can seek and park.
///
/// The engine never plays the animation; it holds a frame and moves that
/// hold as the reader scrolls. Implementations wrap whatever actually
/// renders frames.
pub trait FramePlayer {
    /// Number of frames in the loaded animation.
    ///
    /// `None` until the player has loaded a timeline. A report of zero
    /// is treated the same as `None`; the engine substitutes its default
    /// length for both.
    fn total_frames(&self) -> Option<u64>;

    /// Jump to `frame` and stay there.
    fn seek_and_hold(&mut self, frame: FrameIndex);
}

/// Player that renders nothing and records every seek.
///
/// Clones share one log, so a session can own one handle while the test
/// or dry run inspects another.
#[derive(Clone, Debug, Default)]
pub struct RecordingPlayer {
    total_frames: Option<u64>,
    seeks: Rc<RefCell<Vec<FrameIndex>>>,
}

impl RecordingPlayer {
    /// Player with a loaded timeline of `total_frames`.
    pub fn new(total_frames: u64) -> Self {
        Self {
            total_frames: Some(total_frames),
            seeks: Rc::default(),
        }
    }

    /// Player that has not loaded a timeline yet.
    pub fn unloaded() -> Self {
        Self::default()
    }

    /// Every seek so far, oldest first.
    pub fn seeks(&self) -> Vec<FrameIndex> {
        self.seeks.borrow().clone()
    }

    /// Frame currently held, if any seek has happened.
    pub fn held_frame(&self) -> Option<FrameIndex> {
        self.seeks.borrow().last().copied()
    }
}

impl FramePlayer for RecordingPlayer {
    fn total_frames(&self) -> Option<u64> {
        self.total_frames
    }

    fn seek_and_hold(&mut self, frame: FrameIndex) {
        self.seeks.borrow_mut().push(frame);
    }
}
