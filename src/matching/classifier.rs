use crate::models::{AliasMap, Classification, IgnoreSet};
use crate::stages::{normalize_key, NormalizerConfig};

use super::{contains_any_alias, MatchConfig};

/// Classify a marker key as performer, ignore, or skip
///
/// Rules in priority order:
/// 1. Any alias present as a whole word -> performer (even alongside
///    structural words, so "chorus rza" is a performer key)
/// 2. Whole key in the ignore set -> ignore
/// 3. Every token in the ignore set -> ignore ("chorus 2x")
/// 4. Otherwise -> skip
pub fn classify_key(
    key: &str,
    aliases: &AliasMap,
    ignore: &IgnoreSet,
    config: &NormalizerConfig,
) -> Classification {
    let normalized = normalize_key(key, config);

    if contains_any_alias(&normalized, aliases, config) {
        return Classification::Performer;
    }

    if ignore.contains(&normalized) {
        return Classification::Ignore;
    }

    // An empty key has no tokens and is never considered structural
    let mut tokens = normalized.split_whitespace().peekable();
    if tokens.peek().is_some() && tokens.all(|t| ignore.contains(t)) {
        return Classification::Ignore;
    }

    Classification::Skip
}

/// Classify using a bundled match configuration
pub fn classify(key: &str, config: &MatchConfig) -> Classification {
    classify_key(key, &config.aliases, &config.ignore, &config.normalizer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MatchConfig {
        let aliases: AliasMap = [
            ("rza", vec!["rza", "bobby digital"]),
            ("gza", vec!["gza", "the genius"]),
        ]
        .into_iter()
        .collect();
        MatchConfig::new(aliases)
    }

    #[test]
    fn test_performer_keys() {
        let config = config();
        assert_eq!(classify("[rza]", &config), Classification::Performer);
        assert_eq!(classify("[Bobby Digital]", &config), Classification::Performer);
        assert_eq!(classify("[rza gza]", &config), Classification::Performer);
    }

    #[test]
    fn test_performer_wins_over_ignore() {
        let config = config();
        assert_eq!(classify("[chorus]", &config), Classification::Ignore);
        assert_eq!(classify("[chorus: rza]", &config), Classification::Performer);
        assert_eq!(classify("[intro - the genius]", &config), Classification::Performer);
    }

    #[test]
    fn test_ignore_keys() {
        let config = config();
        assert_eq!(classify("[skit]", &config), Classification::Ignore);
        assert_eq!(classify("[Chorus 2x]", &config), Classification::Ignore);
        assert_eq!(classify("[verse 1]", &config), Classification::Ignore);
    }

    #[test]
    fn test_skip_keys() {
        let config = config();
        assert_eq!(classify("[mister rogers]", &config), Classification::Skip);
        assert_eq!(classify("[chorus rzaxyz]", &config), Classification::Skip);
        assert_eq!(classify("[ : ]", &config), Classification::Skip);
    }

    #[test]
    fn test_alternate_vocabulary() {
        let config = config().with_ignore(IgnoreSet::new(["announcer"]));
        assert_eq!(classify("[announcer]", &config), Classification::Ignore);
        assert_eq!(classify("[chorus]", &config), Classification::Skip);
    }
}
