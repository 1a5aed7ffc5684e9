use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::AliasMap;

/// Category of a normalized marker key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// At least one alias appears in the key
    Performer,
    /// Purely structural label (chorus, skit, 2x, ...)
    Ignore,
    /// Unrecognized label
    Skip,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Performer => "performer",
            Classification::Ignore => "ignore",
            Classification::Skip => "skip",
        };
        f.write_str(name)
    }
}

/// Mode governing content lines until the next marker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "performer")]
pub enum AttributionMode {
    #[default]
    None,
    Performer(String),
    Ignore,
    Skip,
}

impl AttributionMode {
    /// The performer owning content lines in this mode, if any
    pub fn performer(&self) -> Option<&str> {
        match self {
            AttributionMode::Performer(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

/// Canonical performer -> attributed lines in transcript order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PerformerChunks {
    chunks: BTreeMap<String, Vec<String>>,
}

impl PerformerChunks {
    /// Seed an empty line list for every canonical performer
    pub fn seeded(aliases: &AliasMap) -> Self {
        let chunks = aliases
            .canonical_names()
            .map(|name| (name.to_string(), Vec::new()))
            .collect();
        Self { chunks }
    }

    pub fn push(&mut self, performer: &str, line: impl Into<String>) {
        self.chunks
            .entry(performer.to_string())
            .or_default()
            .push(line.into());
    }

    pub fn lines(&self, performer: &str) -> Option<&[String]> {
        self.chunks.get(performer).map(Vec::as_slice)
    }

    pub fn performers(&self) -> impl Iterator<Item = &str> {
        self.chunks.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.chunks
            .iter()
            .map(|(name, lines)| (name.as_str(), lines.as_slice()))
    }

    /// Total attributed lines across all performers
    pub fn total_lines(&self) -> usize {
        self.chunks.values().map(Vec::len).sum()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Two adjacent lines from the same verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePair {
    pub prompt: String,
    pub completion: String,
}

impl LinePair {
    pub fn new(prompt: impl Into<String>, completion: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            completion: completion.into(),
        }
    }
}

/// How a single marker line was interpreted during the sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerRecord {
    /// Zero-based line index in the transcript
    pub line_index: usize,
    /// The marker line as it appeared
    pub raw: String,
    /// Normalized key
    pub key: String,
    pub classification: Classification,
    /// Canonical performers matched by the key
    pub matches: Vec<String>,
    /// Mode entered after the marker
    pub mode: AttributionMode,
}

/// Output of the attribution sweep
#[derive(Debug, Clone, Default)]
pub struct AttributionResult {
    pub chunks: PerformerChunks,
    pub markers: Vec<MarkerRecord>,
}

impl AttributionResult {
    /// Number of markers with the given classification
    pub fn count(&self, classification: Classification) -> usize {
        self.markers
            .iter()
            .filter(|m| m.classification == classification)
            .count()
    }

    /// Markers whose key matched several performers
    pub fn multi_performer_markers(&self) -> impl Iterator<Item = &MarkerRecord> {
        self.markers.iter().filter(|m| m.matches.len() > 1)
    }

    /// Distinct unrecognized keys, in first-seen order
    pub fn unrecognized_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for marker in &self.markers {
            if marker.classification == Classification::Skip && !keys.contains(&marker.key.as_str()) {
                keys.push(&marker.key);
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_chunks_include_every_performer() {
        let aliases: AliasMap = [("rza", vec!["rza"]), ("gza", vec!["gza"])]
            .into_iter()
            .collect();
        let chunks = PerformerChunks::seeded(&aliases);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks.lines("rza"), Some(&[][..]));
        assert_eq!(chunks.total_lines(), 0);
    }

    #[test]
    fn test_mode_performer() {
        assert_eq!(AttributionMode::Performer("rza".into()).performer(), Some("rza"));
        assert_eq!(AttributionMode::Skip.performer(), None);
        assert_eq!(AttributionMode::default(), AttributionMode::None);
    }

    #[test]
    fn test_classification_serializes_snake_case() {
        let json = serde_json::to_string(&Classification::Performer).unwrap();
        assert_eq!(json, "\"performer\"");
        assert_eq!(Classification::Skip.to_string(), "skip");
    }
}
