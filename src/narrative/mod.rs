//! Narrative content: the ordered step sequence and its markup rendering.

/// Markdown-to-markup capability and the pulldown-cmark default.
pub mod markup;
/// Step and narrative data model.
pub mod model;
