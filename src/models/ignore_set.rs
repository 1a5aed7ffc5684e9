use std::collections::HashSet;

use crate::stages::{normalize_key, NormalizerConfig};

/// Structural marker vocabulary that never indicates a performer
const DEFAULT_IGNORE_WORDS: &[&str] = &[
    "all", "both", "everybody", "group", "crowd", "chorus", "hook", "refrain", "verse", "intro",
    "outro", "bridge", "pre", "post", "interlude", "skit", "sample", "samples", "break", "breakdown",
    "instrumental", "beat", "scratches", "scratching", "talking", "spoken", "speaking", "singing",
    "sung", "ad", "libs", "adlibs", "repeat", "x2", "x3", "x4", "2x", "3x", "4x", "1", "2", "3", "4",
    "5", "6", "7", "8", "9", "end", "fade", "and", "with", "the",
];

/// Normalized structural labels (e.g. "chorus", "skit", "2x")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    words: HashSet<String>,
}

impl IgnoreSet {
    /// Build a set from raw words, normalizing each with the default normalizer
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(words, &NormalizerConfig::default())
    }

    pub fn with_config<I, S>(words: I, config: &NormalizerConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize_key(w.as_ref(), config))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Add more words on top of an existing vocabulary
    pub fn extend<I, S>(&mut self, words: I, config: &NormalizerConfig)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| normalize_key(w.as_ref(), config))
                .filter(|w| !w.is_empty()),
        );
    }

    /// Exact membership of an already-normalized string
    pub fn contains(&self, normalized: &str) -> bool {
        self.words.contains(normalized)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORE_WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary() {
        let set = IgnoreSet::default();
        assert!(set.contains("chorus"));
        assert!(set.contains("skit"));
        assert!(set.contains("2x"));
        assert!(!set.contains("rza"));
    }

    #[test]
    fn test_entries_are_normalized() {
        let set = IgnoreSet::new(["[Pre-Chorus]", "  SKIT: "]);
        assert!(set.contains("pre chorus"));
        assert!(set.contains("skit"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_extend() {
        let mut set = IgnoreSet::new(["chorus"]);
        set.extend(["Announcer", ""], &NormalizerConfig::default());
        assert!(set.contains("announcer"));
        assert_eq!(set.len(), 2);
    }
}
