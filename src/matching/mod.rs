pub mod aliases;
pub mod classifier;

pub use aliases::*;
pub use classifier::*;

use crate::models::{AliasMap, IgnoreSet};
use crate::stages::NormalizerConfig;

/// Everything needed to interpret a marker key
///
/// Passed explicitly into the classifier and the sweep; there is no
/// process-wide vocabulary.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub normalizer: NormalizerConfig,
    pub aliases: AliasMap,
    pub ignore: IgnoreSet,
}

impl MatchConfig {
    /// Default normalizer and ignore vocabulary with the given alias table
    pub fn new(aliases: AliasMap) -> Self {
        Self {
            normalizer: NormalizerConfig::default(),
            aliases,
            ignore: IgnoreSet::default(),
        }
    }

    pub fn with_normalizer(mut self, normalizer: NormalizerConfig) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_ignore(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }
}
