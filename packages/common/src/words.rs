use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single placeholder definition, as stored in the word list file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    pub key: String,
    pub value: String,
}

impl WordEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Read-only snapshot of the word list, keyed for lookup.
///
/// Keys are matched verbatim: case-sensitive and untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordMap {
    words: HashMap<String, String>,
}

impl WordMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from stored entries. A later duplicate key wins.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a WordEntry>) -> Self {
        let words = entries
            .into_iter()
            .map(|entry| (entry.key.clone(), entry.value.clone()))
            .collect();
        Self { words }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.words.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.words.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.words.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in lexicographic key order, for listing to a human
    pub fn entries_sorted(&self) -> Vec<WordEntry> {
        let mut entries: Vec<WordEntry> = self
            .words
            .iter()
            .map(|(key, value)| WordEntry::new(key.as_str(), value.as_str()))
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for WordMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_verbatim() {
        let map: WordMap = [("hero", "Aria Vance")].into_iter().collect();

        assert_eq!(map.get("hero"), Some("Aria Vance"));
        assert_eq!(map.get("Hero"), None);
        assert_eq!(map.get(" hero"), None);
        assert!(map.contains_key("hero"));
        assert!(!map.contains_key("HERO"));
    }

    #[test]
    fn test_entries_sorted_by_key() {
        let map: WordMap = [("zeta", "1"), ("alpha", "2"), ("Mid", "3")]
            .into_iter()
            .collect();

        let keys: Vec<String> = map.entries_sorted().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["Mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_from_entries_last_duplicate_wins() {
        let entries = vec![WordEntry::new("a", "first"), WordEntry::new("a", "second")];
        let map = WordMap::from_entries(&entries);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some("second"));
    }

    #[test]
    fn test_entry_json_shape() {
        let entry: WordEntry = serde_json::from_str(r#"{"key": "k", "value": "v"}"#).unwrap();
        assert_eq!(entry, WordEntry::new("k", "v"));
    }
}
