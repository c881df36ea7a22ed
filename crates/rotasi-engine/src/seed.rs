//! # Seed Data
//!
//! The fixed demo data set the store starts from. Three rotatable spares in
//! the states the UI needs to exercise: partly loaned, fully loaned with an
//! empty shelf, and untouched consumable stock.

use rotasi_core::{InventoryStore, ItemStatus, PartRecord};

/// Returns the demo seed records, in display order.
///
/// Barcode URLs are derived from the item codes (never hand-written), and
/// loan counters/status are adjusted after construction because
/// `PartRecord::new` always starts with nothing checked out.
pub fn seed_records() -> Vec<PartRecord> {
    let mut compressor = PartRecord::new(
        "RP-20251118-1a2b",
        "COMP-FTR-AC Compressor-24V",
        "Penting",
        "A-01-01",
        3,
    );
    compressor.qty_out = 1;

    let mut gear = PartRecord::new(
        "RP-20251118-3c4d",
        "GEAR-FVM-Gear PTO-Left",
        "Penting",
        "A-02-01",
        0,
    );
    gear.qty_out = 2;
    gear.status = ItemStatus::Dipinjam;

    let shaft = PartRecord::new(
        "RP-20251118-5e6f",
        "SHAFT-FRR-Propeller Shaft-Long",
        "Consumable",
        "B-01-03",
        12,
    );

    vec![compressor, gear, shaft]
}

/// Builds a freshly seeded store.
pub fn seed_store() -> InventoryStore {
    InventoryStore::with_records(seed_records())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let store = seed_store();
        assert_eq!(store.len(), 3);

        let gear = store.get("RP-20251118-3c4d").unwrap();
        assert_eq!(gear.qty, 0);
        assert_eq!(gear.qty_out, 2);
        assert_eq!(gear.status, ItemStatus::Dipinjam);

        let compressor = store.get("RP-20251118-1a2b").unwrap();
        assert_eq!(compressor.status, ItemStatus::Tersedia);
        assert_eq!(
            compressor.barcode_url,
            "https://barcode.tec-it.com/barcode.ashx?data=RP-20251118-1a2b&code=Code128"
        );
    }
}
