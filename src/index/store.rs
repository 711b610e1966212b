use std::collections::HashMap;

use crate::core::key::JoinKey;

use super::entry::{EntryState, IndexEntry};

/// Reference rows keyed by [`JoinKey`], kept in file order.
///
/// Lookups go through a hash map into a vector of entries, so unmatched rows
/// can be reported in the order their keys first appeared in the table.
#[derive(Debug, Default)]
pub struct ReferenceIndex {
    entries: Vec<IndexEntry>,
    key_to_entry: HashMap<JoinKey, usize>,
}

impl ReferenceIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row under `key`.
    ///
    /// A row with a key that is already present replaces the earlier row in
    /// place and the earlier row is lost. Returns `true` when that happened.
    pub fn insert(&mut self, key: JoinKey, line: String) -> bool {
        if let Some(&idx) = self.key_to_entry.get(&key) {
            self.entries[idx] = IndexEntry::new(line);
            return true;
        }
        self.key_to_entry.insert(key, self.entries.len());
        self.entries.push(IndexEntry::new(line));
        false
    }

    /// Claim the row for `key` if it has not been matched yet.
    ///
    /// Returns the reference line and marks the entry consumed. Returns `None`
    /// for unknown keys and for keys that were already consumed.
    pub fn consume(&mut self, key: &JoinKey) -> Option<&str> {
        let idx = *self.key_to_entry.get(key)?;
        let entry = &mut self.entries[idx];
        if !entry.is_pending() {
            return None;
        }
        entry.state = EntryState::Consumed;
        Some(&entry.line)
    }

    /// Entries that were never consumed, in file order
    pub fn pending(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter().filter(|e| e.is_pending())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> JoinKey {
        JoinKey(s.to_string())
    }

    fn pending_lines(index: &ReferenceIndex) -> Vec<&str> {
        index.pending().map(|e| e.line.as_str()).collect()
    }

    #[test]
    fn test_insert_and_consume() {
        let mut index = ReferenceIndex::new();
        assert!(!index.insert(key("1:100:A:G"), "row1".to_string()));
        assert!(!index.insert(key("2:200:C:T"), "row2".to_string()));

        assert_eq!(index.len(), 2);
        assert_eq!(index.consume(&key("1:100:A:G")), Some("row1"));
        assert_eq!(index.consume(&key("3:300:G:C")), None);
    }

    #[test]
    fn test_duplicate_key_overwrites_in_place() {
        let mut index = ReferenceIndex::new();
        index.insert(key("a"), "first".to_string());
        index.insert(key("b"), "other".to_string());
        assert!(index.insert(key("a"), "second".to_string()));

        assert_eq!(index.len(), 2);
        assert_eq!(pending_lines(&index), vec!["second", "other"]);
    }

    #[test]
    fn test_consume_once() {
        let mut index = ReferenceIndex::new();
        index.insert(key("a"), "row".to_string());

        assert_eq!(index.consume(&key("a")), Some("row"));
        assert_eq!(index.consume(&key("a")), None);
        assert_eq!(index.consume(&key("missing")), None);
        assert_eq!(index.entries[0].state, EntryState::Consumed);
    }

    #[test]
    fn test_empty_line_is_still_pending() {
        // Consumption is tracked by state, not by clearing the stored text
        let mut index = ReferenceIndex::new();
        index.insert(key("a"), String::new());
        assert_eq!(index.pending().count(), 1);
        assert_eq!(index.consume(&key("a")), Some(""));
        assert_eq!(index.pending().count(), 0);
    }

    #[test]
    fn test_pending_in_file_order() {
        let mut index = ReferenceIndex::new();
        for (k, line) in [("c", "row c"), ("a", "row a"), ("b", "row b")] {
            index.insert(key(k), line.to_string());
        }
        index.consume(&key("a"));

        assert_eq!(pending_lines(&index), vec!["row c", "row b"]);
    }
}
