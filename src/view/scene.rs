//! Scene snapshot of a scroller session.
//!
//! A scene is everything an embedding needs to lay the story out: the
//! hidden description, the fixed animation surface, and the scroll
//! trigger with its positioned blurbs. It is plain data; hosts apply it
//! however they render.

/// Renderable snapshot of one session at one moment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Text description for assistive technology, visually hidden.
    pub aria_description: String,
    /// The fixed, centered animation surface.
    pub surface: SurfaceView,
    /// The scroll trigger, absent until the session is ready.
    pub trigger: Option<TriggerView>,
}

/// The letterboxed animation surface.
///
/// When no player is attached the embedding shows a placeholder block of
/// the same dimensions, keeping the page geometry stable.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceView {
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels.
    pub height: f64,
    /// Whether a player is attached to the surface.
    pub has_animation: bool,
    /// Whether the story has completed.
    pub completed: bool,
}

/// The scroll trigger region.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TriggerView {
    /// Requested trigger height in pixels.
    pub height: f64,
    /// Whether the height is settling through its completion transition.
    pub settling: bool,
    /// Positioned overlay blurbs, in step order.
    pub blurbs: Vec<Blurb>,
}

/// One overlay blurb, absolutely positioned down the trigger.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Blurb {
    /// Offset from the trigger top, in pixels.
    pub top: f64,
    /// Rendered markup of the step text.
    pub markup: String,
}
