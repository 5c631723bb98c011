//! Renderable outputs of a session.

/// Static HTML page emitter.
pub mod html;
/// Scene snapshot types.
pub mod scene;
