//! # Inventory Record Store
//!
//! Authoritative in-memory mapping from item code to [`PartRecord`].
//!
//! ## Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       InventoryStore                                │
//! │                                                                     │
//! │  Vec<PartRecord>, unique by item_code, insertion order preserved    │
//! │                                                                     │
//! │  get(code)      ──► Option<&PartRecord>                             │
//! │  get_mut(code)  ──► Option<&mut PartRecord>   (engine only)         │
//! │  upsert(record) ──► replace in place, or append                     │
//! │  list()         ──► Vec<PartRecord>           (cloned snapshot)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A plain `Vec` with linear lookup is deliberate: the parts room tracks a
//! few hundred rotatable spares at most, insertion order doubles as the
//! default display order, and `upsert` must keep a replaced record in its
//! original position.
//!
//! ## Concurrency
//! None here. The store assumes a single in-process caller; the facade
//! crate serializes access with a mutex. A production backend would need
//! per-record compare-and-swap or serialized access - that is an external
//! requirement, not reproduced in this scope.

use crate::types::PartRecord;

/// In-memory, insertion-ordered part record store.
///
/// Process-lifetime only: seeded at startup, discarded on shutdown.
/// Records are never deleted within the engine's scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    records: Vec<PartRecord>,
}

impl InventoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InventoryStore {
            records: Vec::new(),
        }
    }

    /// Creates a store pre-populated with `records`, preserving their order.
    ///
    /// Later duplicates replace earlier ones via [`InventoryStore::upsert`],
    /// so the uniqueness guarantee holds even for sloppy seed data.
    pub fn with_records(records: impl IntoIterator<Item = PartRecord>) -> Self {
        let mut store = InventoryStore::new();
        for record in records {
            store.upsert(record);
        }
        store
    }

    /// Looks up a record by item code.
    pub fn get(&self, item_code: &str) -> Option<&PartRecord> {
        self.records.iter().find(|r| r.item_code == item_code)
    }

    /// Mutable lookup, used by the transaction engine.
    pub fn get_mut(&mut self, item_code: &str) -> Option<&mut PartRecord> {
        self.records.iter_mut().find(|r| r.item_code == item_code)
    }

    /// Inserts a record, or replaces the existing record with the same item
    /// code **in place** (original insertion position kept).
    pub fn upsert(&mut self, record: PartRecord) {
        match self.get_mut(&record.item_code) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Returns a cloned snapshot of all records in insertion order.
    ///
    /// Callers get owned data: mutating the returned vector does not affect
    /// the store.
    pub fn list(&self) -> Vec<PartRecord> {
        self.records.clone()
    }

    /// Read-only iteration for projections that don't need ownership.
    pub fn iter(&self) -> impl Iterator<Item = &PartRecord> {
        self.records.iter()
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, qty: u32) -> PartRecord {
        PartRecord::new(code, format!("Part {}", code), "Penting", "A-01-01", qty)
    }

    #[test]
    fn test_get_and_len() {
        let store = InventoryStore::with_records([record("RP-1", 3), record("RP-2", 0)]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("RP-1").unwrap().qty, 3);
        assert!(store.get("NOPE").is_none());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut store = InventoryStore::with_records([record("RP-1", 3), record("RP-2", 5)]);

        let mut replacement = record("RP-1", 9);
        replacement.location = "B-09-09".to_string();
        store.upsert(replacement);

        // Still two records, and RP-1 kept its original position.
        assert_eq!(store.len(), 2);
        let listed = store.list();
        assert_eq!(listed[0].item_code, "RP-1");
        assert_eq!(listed[0].qty, 9);
        assert_eq!(listed[0].location, "B-09-09");
        assert_eq!(listed[1].item_code, "RP-2");
    }

    #[test]
    fn test_upsert_appends_new_codes_in_order() {
        let mut store = InventoryStore::new();
        store.upsert(record("RP-2", 1));
        store.upsert(record("RP-1", 1));
        let codes: Vec<_> = store.list().into_iter().map(|r| r.item_code).collect();
        assert_eq!(codes, vec!["RP-2", "RP-1"]);
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let store = InventoryStore::with_records([record("RP-1", 3)]);
        let mut listed = store.list();
        listed[0].qty = 999;
        listed.clear();
        assert_eq!(store.get("RP-1").unwrap().qty, 3);
        assert_eq!(store.len(), 1);
    }
}
