//! # Inventory State
//!
//! Shared ownership of the in-memory record store.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. The service facade is cloned into whatever runtime hosts it
//! 2. Only one operation may mutate the store at a time
//! 3. Each engine operation completes fully under a single lock
//!    acquisition, so its effects are entirely visible before the caller
//!    proceeds (the only ordering guarantee this demo makes)
//!
//! There is no optimistic-concurrency token and no per-record locking: the
//! scope assumes a single in-process caller. A real backend would need
//! per-record compare-and-swap or serialized access.

use std::sync::{Arc, Mutex};

use rotasi_core::InventoryStore;

/// Shared, mutex-guarded inventory store.
///
/// ## Why Not RwLock?
/// Operations are quick and most of them mutate. A RwLock would add
/// complexity with minimal benefit at this scale.
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    store: Arc<Mutex<InventoryStore>>,
}

impl InventoryState {
    /// Creates state holding an empty store.
    pub fn new() -> Self {
        InventoryState {
            store: Arc::new(Mutex::new(InventoryStore::new())),
        }
    }

    /// Creates state holding the given store (tests seed fresh instances
    /// this way for determinism).
    pub fn with_store(store: InventoryStore) -> Self {
        InventoryState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let records = state.read(|store| store.list());
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InventoryStore) -> R,
    {
        let store = self.store.lock().expect("inventory mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let result = state.write(|store| engine::checkout(store, "RP-1", 1));
    /// ```
    pub fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InventoryStore) -> R,
    {
        let mut store = self.store.lock().expect("inventory mutex poisoned");
        f(&mut store)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rotasi_core::PartRecord;

    #[test]
    fn test_writes_are_visible_to_reads() {
        let state = InventoryState::new();
        state.write(|store| {
            store.upsert(PartRecord::new("RP-1", "Gear", "Penting", "A-01-01", 3));
        });
        assert_eq!(state.read(|store| store.len()), 1);
        assert_eq!(state.read(|store| store.get("RP-1").unwrap().qty), 3);
    }

    #[test]
    fn test_clones_share_the_same_store() {
        let state = InventoryState::new();
        let handle = state.clone();
        handle.write(|store| {
            store.upsert(PartRecord::new("RP-1", "Gear", "Penting", "A-01-01", 3));
        });
        assert_eq!(state.read(|store| store.len()), 1);
    }
}
