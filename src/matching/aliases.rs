use std::collections::BTreeSet;

use crate::error::{LyricsError, Result};
use crate::models::AliasMap;
use crate::stages::{normalize_key, NormalizerConfig};

use super::MatchConfig;

/// Canonical name whose alias normalizes to exactly `normalized_key`
///
/// Whole-string comparison; the first canonical in map order wins when an
/// alias is shared.
pub fn resolve_canonical<'a>(
    normalized_key: &str,
    aliases: &'a AliasMap,
    config: &NormalizerConfig,
) -> Option<&'a str> {
    if normalized_key.is_empty() {
        return None;
    }

    aliases
        .iter()
        .find(|(_, list)| list.iter().any(|a| normalize_key(a, config) == normalized_key))
        .map(|(canonical, _)| canonical)
}

/// Every canonical performer referenced by a key
///
/// Union of two strategies:
/// - an alias appearing as a whole word (or phrase) inside the key, which
///   covers multi-word aliases like "bobby digital"
/// - each whitespace token resolved exactly, which covers space-joined lists
///   like "rza gza odb"
pub fn find_all_canonical_matches(
    normalized_key: &str,
    aliases: &AliasMap,
    config: &NormalizerConfig,
) -> BTreeSet<String> {
    let mut matches = BTreeSet::new();

    for (canonical, list) in aliases.iter() {
        if list
            .iter()
            .any(|a| contains_phrase(normalized_key, &normalize_key(a, config)))
        {
            matches.insert(canonical.to_string());
        }
    }

    for token in normalized_key.split_whitespace() {
        if let Some(canonical) = resolve_canonical(token, aliases, config) {
            matches.insert(canonical.to_string());
        }
    }

    matches
}

/// Whether any alias appears as a whole word inside the key
pub fn contains_any_alias(normalized_key: &str, aliases: &AliasMap, config: &NormalizerConfig) -> bool {
    aliases
        .iter()
        .flat_map(|(_, list)| list.iter())
        .any(|a| contains_phrase(normalized_key, &normalize_key(a, config)))
}

/// Boundary-padded substring test: "rza" is in "chorus rza" but not "rzaxyz"
pub(crate) fn contains_phrase(normalized_key: &str, normalized_alias: &str) -> bool {
    if normalized_alias.is_empty() {
        return false;
    }
    let key = format!(" {} ", normalized_key);
    let alias = format!(" {} ", normalized_alias);
    key.contains(&alias)
}

/// Resolve a user-supplied performer or alias to its canonical name
pub fn resolve_performer_arg(arg: &str, config: &MatchConfig) -> Result<String> {
    let key = normalize_key(arg, &config.normalizer);
    resolve_canonical(&key, &config.aliases, &config.normalizer)
        .map(str::to_string)
        .ok_or_else(|| LyricsError::PerformerNotFound(arg.to_string()))
}
