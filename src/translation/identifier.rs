/*!
 * Occurrence-indexed identifiers.
 *
 * Every translated token occurrence is named `base_n[_type]`:
 * - `base` is the translated text, lower-cased when it is latin script
 * - `n` is one plus the number of earlier case-insensitive occurrences of
 *   the same text in the target-language stream
 * - `_type` marks tokens in type-annotation position
 *
 * The forward pass computes `n` over the text it is producing, the backward
 * pass over the text it is reading. Both use `OccurrenceCounter`, so the same
 * stream yields the same identifiers in both directions.
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::text::{Script, classify};

/// Suffix appended to identifiers in type-annotation position
pub const TYPE_SUFFIX: &str = "_type";

/// Linear per-term occurrence counter
#[derive(Debug, Default, Clone)]
pub struct OccurrenceCounter {
    counts: HashMap<String, usize>,
}

impl OccurrenceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occurrence number the next sighting of `term` would receive
    pub fn peek(&self, term: &str) -> usize {
        self.counts.get(&term.to_lowercase()).copied().unwrap_or(0) + 1
    }

    /// Record a sighting of `term` and return its occurrence number
    pub fn next(&mut self, term: &str) -> usize {
        let count = self.counts.entry(term.to_lowercase()).or_insert(0);
        *count += 1;
        *count
    }
}

/// Identifier base for a translated text
pub fn identifier_base(translated: &str) -> String {
    match classify(translated) {
        Script::Latin => translated.to_lowercase(),
        _ => translated.to_string(),
    }
}

/// Build `base_n` or `base_n_type`
pub fn build_identifier(translated: &str, occurrence: usize, annotated: bool) -> String {
    let base = identifier_base(translated);
    if annotated {
        format!("{}_{}{}", base, occurrence, TYPE_SUFFIX)
    } else {
        format!("{}_{}", base, occurrence)
    }
}

/// Both identifier variants for one occurrence, most likely first
pub fn candidate_identifiers(translated: &str, occurrence: usize, annotated: bool) -> [String; 2] {
    [
        build_identifier(translated, occurrence, annotated),
        build_identifier(translated, occurrence, !annotated),
    ]
}

/// Decides whether a token sits in type-annotation position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAnnotationPolicy {
    /// How many characters before the token are inspected
    #[serde(default = "default_lookback_chars")]
    pub lookback_chars: usize,

    /// Markers that introduce a type, e.g. `:` or `->`
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,
}

fn default_lookback_chars() -> usize {
    10
}

fn default_markers() -> Vec<String> {
    vec![":".to_string(), "->".to_string()]
}

impl Default for TypeAnnotationPolicy {
    fn default() -> Self {
        Self {
            lookback_chars: default_lookback_chars(),
            markers: default_markers(),
        }
    }
}

impl TypeAnnotationPolicy {
    /// Whether the text right before a token ends with a marker, ignoring
    /// trailing whitespace inside the look-back window
    pub fn is_annotation_position(&self, prefix: &str) -> bool {
        if self.lookback_chars == 0 || self.markers.is_empty() {
            return false;
        }

        let window_start = prefix
            .char_indices()
            .rev()
            .nth(self.lookback_chars - 1)
            .map_or(0, |(idx, _)| idx);
        let window = prefix[window_start..].trim_end();

        self.markers
            .iter()
            .any(|marker| !marker.is_empty() && window.ends_with(marker.as_str()))
    }
}
