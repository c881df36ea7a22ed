//! # Summary Projection
//!
//! Dashboard aggregates derived from the current store snapshot.
//!
//! Pure derivation, recomputed on demand: the projector holds no state of
//! its own and is simply re-run whenever the store changes. At parts-room
//! scale a full pass over the records is cheaper than keeping incremental
//! counters honest.

use crate::store::InventoryStore;
use crate::types::{InventorySummary, ItemStatus};
use crate::LOW_STOCK_THRESHOLD;

/// Computes the dashboard KPI numbers for the given store.
///
/// - `total`: record count
/// - `total_qty`: sum of on-hand quantity
/// - `on_loan`: records labeled `Dipinjam`
/// - `low_stock`: records with `qty <= LOW_STOCK_THRESHOLD`
///
/// A record can count toward both `on_loan` and `low_stock`; the KPIs are
/// independent tallies, not a partition.
pub fn summarize(store: &InventoryStore) -> InventorySummary {
    InventorySummary {
        total: store.len() as u32,
        total_qty: store.iter().map(|r| r.qty).sum(),
        on_loan: store.iter().filter(|r| r.status == ItemStatus::Dipinjam).count() as u32,
        low_stock: store.iter().filter(|r| r.qty <= LOW_STOCK_THRESHOLD).count() as u32,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PartRecord;

    #[test]
    fn test_summary_over_known_quantities() {
        let mut on_loan = PartRecord::new("RP-2", "Gear", "Penting", "A-02-01", 0);
        on_loan.qty_out = 2;
        on_loan.status = ItemStatus::Dipinjam;

        let store = InventoryStore::with_records([
            PartRecord::new("RP-1", "Compressor", "Penting", "A-01-01", 3),
            on_loan,
            PartRecord::new("RP-3", "Shaft", "Consumable", "B-01-03", 12),
        ]);

        let summary = summarize(&store);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.total_qty, 15);
        assert_eq!(summary.on_loan, 1);
        // qty 0 is low stock, qty 3 is not.
        assert_eq!(summary.low_stock, 1);
    }

    #[test]
    fn test_low_stock_threshold_is_inclusive() {
        let store = InventoryStore::with_records([
            PartRecord::new("RP-1", "A", "Penting", "A-01-01", 2),
            PartRecord::new("RP-2", "B", "Penting", "A-01-02", 3),
        ]);
        assert_eq!(summarize(&store).low_stock, 1);
    }

    #[test]
    fn test_empty_store_summary_is_all_zero() {
        let summary = summarize(&InventoryStore::new());
        assert_eq!(
            summary,
            InventorySummary {
                total: 0,
                total_qty: 0,
                on_loan: 0,
                low_stock: 0,
            }
        );
    }
}
