//! Scroll measurement and progress.

/// Trigger bounds, progress math, and the scroll-state snapshot.
pub mod tracker;
