//! Ranked occurrence counts

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// Ordered `(key, count)` pairs.
///
/// A table built by [`FrequencyTable::tally`] is ranked by count, highest
/// first, with ties kept in first-seen order. Tables built with
/// [`FrequencyTable::from_entries`] keep whatever order they were given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable<K> {
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    /// Count every key and rank the result
    pub fn tally<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut entries: Vec<(K, usize)> = Vec::new();

        for key in keys {
            match index.get(&key) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    index.insert(key.clone(), entries.len());
                    entries.push((key, 1));
                }
            }
        }

        // sort_by is stable: equal counts stay in insertion order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    /// Count for a key, if present
    pub fn get(&self, key: &K) -> Option<usize> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K> FrequencyTable<K> {
    pub fn from_entries(entries: Vec<(K, usize)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(K, usize)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn first(&self) -> Option<&(K, usize)> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[(K, usize)] {
        &self.entries
    }

    /// Drop the leading `n` entries
    pub fn skip(mut self, n: usize) -> Self {
        let n = n.min(self.entries.len());
        self.entries.drain(..n);
        self
    }

    /// Keep at most `limit` entries
    pub fn truncate(mut self, limit: usize) -> Self {
        self.entries.truncate(limit);
        self
    }
}

impl<K> IntoIterator for FrequencyTable<K> {
    type Item = (K, usize);
    type IntoIter = std::vec::IntoIter<(K, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
