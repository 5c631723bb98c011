use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{ScrollyError, ScrollyResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One time-coded text overlay along the scroll timeline.
///
/// Steps are authored in timeline order; their position in the sequence is
/// their fallback placement when no explicit timing is supplied.
pub struct Step {
    /// Markdown source of the overlay text.
    pub text: String,
    /// Authored timeline position in animation seconds.
    ///
    /// Absent or non-finite values fall back to the index-based spread
    /// placement; a malformed offset is never an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_seconds: Option<f64>,
}

impl Step {
    /// Build a step with an explicit timeline offset.
    pub fn timed(text: impl Into<String>, offset_seconds: f64) -> Self {
        Self {
            text: text.into(),
            offset_seconds: Some(offset_seconds),
        }
    }

    /// Build a step placed by the index-based spread.
    pub fn untimed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            offset_seconds: None,
        }
    }

    /// Authored offset if present and finite, else `None`.
    pub fn effective_offset_seconds(&self) -> Option<f64> {
        self.offset_seconds.filter(|s| s.is_finite())
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// The ordered step sequence of one scrollytelling page.
///
/// A narrative is a pure data model: built programmatically, or loaded from
/// JSON at the CLI boundary. Insertion order is timeline order and the
/// sequence is immutable once handed to the engine.
pub struct Narrative {
    /// Steps in timeline order.
    pub steps: Vec<Step>,
}

impl Narrative {
    /// Narrative with the given steps.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Built-in six-step sample narrative used when the caller supplies none.
    pub fn sample() -> Self {
        Self::new(vec![
            Step::timed(
                "# The Ascent Begins\n\nFollow the expedition as it leaves the valley floor \
                 and climbs into thinner air.",
                0.0,
            ),
            Step::timed(
                "## Base Camp\n\nSupplies are weighed twice. Anything that cannot justify \
                 its own grams stays behind.",
                1.2,
            ),
            Step::timed(
                "### The Route\n\n- **North ridge** for the early pitches\n- **Traverse** \
                 under the serac field\n- **Summit couloir** before the wind turns",
                2.0,
            ),
            Step::timed(
                "## The Icefall\n\nLadders bridge the crevasses. The team moves at dawn \
                 while the ice still holds its overnight silence.",
                2.3,
            ),
            Step::timed(
                "### Camps\n\n1. Camp one at the glacier's shoulder\n2. Camp two beneath \
                 the headwall\n3. Camp three at the ridge line",
                2.9,
            ),
            Step::timed(
                "## The Summit\n\n*The last hundred meters take an hour.*\n\nThen there is \
                 nothing above but sky.",
                3.4,
            ),
        ])
    }

    /// Parse a narrative from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollyResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ScrollyError::serde(format!("parse narrative JSON: {e}")))
    }

    /// Parse a narrative from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScrollyResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollyError::serde(format!("open narrative JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the narrative has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for Narrative {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/narrative/model.rs"]
mod tests;
