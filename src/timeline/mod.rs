//! Projection of the animation timeline onto scroll distance.

/// Blurb offsets and trigger extents.
pub mod overlay;
