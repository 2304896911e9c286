//! Definitions of the tag record produced by the tokenizer.

use crate::{sm::command::mixin::SourceRangeMixin, util::StrExtension};

/// Markers carrying a note chart. They may legitimately appear once per chart, so they are never
/// deduplicated.
pub const CHART_MARKERS: [&str; 2] = ["NOTES", "NOTES2"];

/// One `#MARKER:value:value...;` unit of the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SongTag {
    /// The upper-cased marker.
    pub marker: String,
    /// The `:`-separated values in order, trimmed.
    pub values: Vec<String>,
}

/// A tag with the byte span it was read from.
pub type TagWithRange = SourceRangeMixin<SongTag>;

impl SongTag {
    /// Creates a tag from a marker and raw values as scanned.
    ///
    /// The marker is upper-cased and every value is trimmed. A `;` terminates the tag, so the value
    /// containing it is cut there and any later value is dropped.
    #[must_use]
    pub fn from_raw(raw_marker: &str, raw_values: Vec<String>) -> Self {
        let marker = raw_marker.until_terminator().to_uppercase();
        let mut values = Vec::with_capacity(raw_values.len());
        for raw in raw_values {
            let terminated = raw.contains(';');
            values.push(raw.until_terminator().to_string());
            if terminated {
                break;
            }
        }
        Self { marker, values }
    }

    /// Returns whether `marker` is one of [`CHART_MARKERS`].
    #[must_use]
    pub fn is_chart_marker(marker: &str) -> bool {
        CHART_MARKERS.contains(&marker)
    }

    /// Returns whether this tag carries a note chart.
    #[must_use]
    pub fn is_chart(&self) -> bool {
        Self::is_chart_marker(&self.marker)
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}
