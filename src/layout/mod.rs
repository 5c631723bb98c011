//! Viewport-driven sizing of the animation surface.

/// Aspect selection and letterboxing.
pub mod sizer;
