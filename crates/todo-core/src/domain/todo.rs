//! Todo Entity
//!
//! A single to-do entry and the identifiers that key it.

use serde::{Deserialize, Serialize};
use ulid::{Generator, Ulid};

use super::category::Category;

/// Opaque item identifier.
///
/// New ids are ULIDs; data saved by older builds uses millisecond
/// timestamps, which are accepted unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creation time in Unix milliseconds: the ULID timestamp, or the
    /// value itself for legacy timestamp ids
    pub fn created_at_ms(&self) -> Option<u64> {
        if let Ok(ms) = self.0.parse::<u64>() {
            return Some(ms);
        }
        Ulid::from_string(&self.0).ok().map(|ulid| ulid.timestamp_ms())
    }

    /// Sort key ordering ids of either kind by creation time.
    /// Ids carrying no time sort last.
    pub fn creation_key(&self) -> (u64, &str) {
        (self.created_at_ms().unwrap_or(u64::MAX), &self.0)
    }
}

impl From<Ulid> for ItemId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid.to_string())
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monotonic id source: ids minted in the same millisecond still differ
pub struct IdGenerator {
    inner: Generator,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            inner: Generator::new(),
        }
    }

    pub fn next_id(&mut self) -> ItemId {
        match self.inner.generate() {
            Ok(ulid) => ulid.into(),
            // Random part overflowed within one millisecond
            Err(_) => Ulid::new().into(),
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}

/// A to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: ItemId,
    pub text: String,
    pub category: Category,
    pub done: bool,
}

impl TodoItem {
    pub fn new(id: ItemId, text: String, category: Category) -> Self {
        Self {
            id,
            text,
            category,
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_item_creation() {
        let item = TodoItem::new(ItemId::from("1"), "Buy milk".to_string(), Category::Work);
        assert_eq!(item.text, "Buy milk");
        assert!(!item.done);
    }

    #[test]
    fn test_generated_ids_are_unique_and_ordered() {
        let mut ids = IdGenerator::new();
        let generated: Vec<ItemId> = (0..1000).map(|_| ids.next_id()).collect();

        let unique: HashSet<_> = generated.iter().collect();
        assert_eq!(unique.len(), generated.len());

        let mut sorted = generated.clone();
        sorted.sort();
        assert_eq!(sorted, generated);
    }

    #[test]
    fn test_creation_key_spans_both_id_kinds() {
        let legacy = ItemId::from("1666170000000");
        let mut ids = IdGenerator::new();
        let fresh = ids.next_id();

        assert_eq!(legacy.created_at_ms(), Some(1_666_170_000_000));
        assert!(fresh.created_at_ms().is_some());
        // Plain string order puts the ULID first; creation order does not
        assert!(fresh < legacy);
        assert!(legacy.creation_key() < fresh.creation_key());
        assert!(fresh.creation_key() < ItemId::from("not-an-id").creation_key());
    }

    #[test]
    fn test_legacy_timestamp_id_is_kept() {
        let id: ItemId = serde_json::from_str("\"1666170000000\"").unwrap();
        assert_eq!(id.as_str(), "1666170000000");
    }
}
