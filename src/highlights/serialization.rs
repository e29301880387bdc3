use serde::ser::Error as _;
use serde_json::{Map, Value};

use super::{HighlightError, HighlightTag};

pub type HighlightMap = Map<String, Value>;

/// Converts a highlight into an ordered field map for transport.
///
/// Every field is always present. `related_actions` is always a list, and
/// actions carry everything except their ingestion timestamp.
pub fn highlight_to_map(highlight: &HighlightTag) -> Result<HighlightMap, HighlightError> {
    match serde_json::to_value(highlight)? {
        Value::Object(map) => Ok(map),
        other => Err(HighlightError::Serialization(serde_json::Error::custom(
            format!("expected an object, got {}", other),
        ))),
    }
}

pub fn highlights_to_maps(
    highlights: &[HighlightTag],
) -> Result<Vec<HighlightMap>, HighlightError> {
    highlights.iter().map(highlight_to_map).collect()
}
