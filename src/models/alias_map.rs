use std::collections::BTreeMap;

use serde::Serialize;

/// Alias table bundled with the crate (Wu-Tang Clan roster)
const BUNDLED_ALIASES: &str = include_str!("../../data/performer_aliases.json");

/// Canonical performer name -> ordered list of aliases
///
/// Every canonical name is expected to appear in its own alias list; `insert`
/// enforces that. Aliases are not required to be unique across performers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasMap {
    performers: BTreeMap<String, Vec<String>>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an alias table from a JSON object of `{ canonical: [aliases] }`
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(raw.into_iter().collect())
    }

    /// The alias table shipped in `data/performer_aliases.json`
    pub fn bundled() -> serde_json::Result<Self> {
        Self::from_json(BUNDLED_ALIASES)
    }

    /// Add a performer, prepending the canonical name to its aliases if missing
    pub fn insert<I, S>(&mut self, canonical: impl Into<String>, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let canonical = canonical.into();
        let mut aliases: Vec<String> = aliases.into_iter().map(Into::into).collect();
        if !aliases.iter().any(|a| *a == canonical) {
            aliases.insert(0, canonical.clone());
        }
        self.performers.insert(canonical, aliases);
    }

    /// Canonical names in iteration order
    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.performers.keys().map(String::as_str)
    }

    /// Aliases registered for a canonical name
    pub fn aliases(&self, canonical: &str) -> Option<&[String]> {
        self.performers.get(canonical).map(Vec::as_slice)
    }

    /// All `(canonical, aliases)` entries in iteration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.performers
            .iter()
            .map(|(name, aliases)| (name.as_str(), aliases.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.performers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.performers.is_empty()
    }
}

impl<C, I, S> FromIterator<(C, I)> for AliasMap
where
    C: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (C, I)>>(iter: T) -> Self {
        let mut map = AliasMap::new();
        for (canonical, aliases) in iter {
            map.insert(canonical, aliases);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_adds_self_alias() {
        let mut map = AliasMap::new();
        map.insert("rza", ["bobby digital"]);

        assert_eq!(
            map.aliases("rza").unwrap(),
            &["rza".to_string(), "bobby digital".to_string()]
        );
    }

    #[test]
    fn test_from_json() {
        let map = AliasMap::from_json(r#"{"gza": ["gza", "the genius"], "rza": ["bobby digital"]}"#)
            .unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.canonical_names().collect::<Vec<_>>(), vec!["gza", "rza"]);
        assert_eq!(map.aliases("rza").unwrap().len(), 2);
        assert_eq!(map.aliases("gza").unwrap().len(), 2);
    }

    #[test]
    fn test_from_json_rejects_bad_shape() {
        assert!(AliasMap::from_json(r#"{"rza": "rza"}"#).is_err());
        assert!(AliasMap::from_json("not json").is_err());
    }

    #[test]
    fn test_bundled_table() {
        let map = AliasMap::bundled().unwrap();

        assert_eq!(map.len(), 10);
        for name in map.canonical_names() {
            assert!(map.aliases(name).unwrap().iter().any(|a| a == name));
        }
        assert!(map.aliases("ol' dirty bastard").unwrap().contains(&"odb".to_string()));
    }
}
