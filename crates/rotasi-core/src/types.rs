//! # Domain Types
//!
//! Core domain types used throughout Rotasi Parts.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌─────────────────────┐  │
//! │  │   PartRecord   │   │    AuditRow    │   │   AuditLogEntry     │  │
//! │  │  ────────────  │   │  ────────────  │   │  ─────────────────  │  │
//! │  │  item_code     │   │  ItemCode      │   │  itemCode           │  │
//! │  │  qty / qty_out │   │  ActualQty     │   │  old (None = new)   │  │
//! │  │  status        │   │  Location?     │   │  new                │  │
//! │  └────────────────┘   └────────────────┘   └─────────────────────┘  │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────────┐                        │
//! │  │   ItemStatus   │   │  InventorySummary  │                        │
//! │  │  ────────────  │   │  ────────────────  │                        │
//! │  │  Tersedia      │   │  total / total_qty │                        │
//! │  │  Dipinjam      │   │  on_loan           │                        │
//! │  │  Kosong        │   │  low_stock         │                        │
//! │  └────────────────┘   └────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A part record is keyed by its human-facing `item_code` (e.g.
//! `RP-20251118-1a2b`), which is stable for the record's lifetime and is the
//! key used in checkout/return/audit requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::barcode::barcode_url;

// =============================================================================
// Item Status
// =============================================================================

/// Availability label for a part record.
///
/// The labels are the Indonesian terms the parts room uses on the floor and
/// on printed tags, so they serialize verbatim.
///
/// ## Denormalization
/// Status is **derived**: the transaction engine recomputes it after every
/// mutating operation. It is never authoritative on its own and never set
/// directly by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ItemStatus {
    /// Available on the shelf.
    Tersedia,
    /// On loan to a dealer. Set unconditionally by checkout, even when
    /// stock remains on the shelf.
    Dipinjam,
    /// Empty: the physical count found nothing on hand.
    Kosong,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemStatus::Tersedia => "Tersedia",
            ItemStatus::Dipinjam => "Dipinjam",
            ItemStatus::Kosong => "Kosong",
        };
        write!(f, "{}", label)
    }
}

// =============================================================================
// Part Record
// =============================================================================

/// One row of rotatable spare-part inventory.
///
/// ## Quantity Bookkeeping
/// `qty` (on hand) and `qty_out` (currently checked out) are **independent
/// counters**, not two halves of a fixed pool:
///
/// ```text
/// checkout(n):  qty -= n   AND   qty_out += n     (two separate updates)
/// return(n):    qty += n   AND   qty_out -|- n    (saturating at zero)
/// audit sync:   qty  = counted value, qty_out untouched
/// ```
///
/// Audit sync overwriting `qty` without touching `qty_out` means the two
/// can drift apart; that is the deliberate bookkeeping model (the audit
/// reconciles shelf count, not loan paperwork).
///
/// Both counters are `u32`, so they are non-negative by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PartRecord {
    /// Human-facing business key, stable for the record's lifetime.
    pub item_code: String,

    /// Display name shown in the inventory table.
    pub item_name: String,

    /// Part category (e.g. "Penting", "Consumable").
    pub category: String,

    /// Free-form rack code (e.g. "A-01-01").
    pub location: String,

    /// Current on-hand quantity. Canonical truth for availability.
    pub qty: u32,

    /// Quantity currently checked out to dealers.
    pub qty_out: u32,

    /// Derived availability label, recomputed by every mutating operation.
    pub status: ItemStatus,

    /// External label-image reference, a pure function of `item_code`.
    pub barcode_url: String,
}

impl PartRecord {
    /// Creates a fresh record with no quantity checked out.
    ///
    /// Status is derived from the initial quantity and the barcode URL from
    /// the item code, so a new record is internally consistent.
    pub fn new(
        item_code: impl Into<String>,
        item_name: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
        qty: u32,
    ) -> Self {
        let item_code = item_code.into();
        let barcode_url = barcode_url(&item_code);
        PartRecord {
            item_code,
            item_name: item_name.into(),
            category: category.into(),
            location: location.into(),
            qty,
            qty_out: 0,
            status: if qty > 0 {
                ItemStatus::Tersedia
            } else {
                ItemStatus::Kosong
            },
            barcode_url,
        }
    }
}

// =============================================================================
// Audit Row
// =============================================================================

/// One parsed line of an uploaded physical-count CSV.
///
/// Transient: produced by [`crate::audit::parse_audit_csv`], consumed once
/// by bulk audit sync, never persisted.
///
/// ## Field Naming
/// Serialized field names match the CSV header (`ItemCode,ActualQty,Location`)
/// so an audit row round-trips unchanged through the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "PascalCase")]
pub struct AuditRow {
    /// Business key of the counted part. Garbage in, garbage out: a blank
    /// code is passed through, not rejected.
    pub item_code: String,

    /// Counted quantity, kept as text. The engine coerces it with
    /// [`crate::audit::parse_qty_or_zero`] (unparseable → 0).
    pub actual_qty: String,

    /// Rack code, `None` when the line had fewer than three fields.
    pub location: Option<String>,
}

// =============================================================================
// Audit Log Entry
// =============================================================================

/// Per-row outcome of a bulk audit sync, returned to the caller in input
/// order. `old` is `None` when the row created a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub item_code: String,
    pub old: Option<u32>,
    pub new: u32,
}

// =============================================================================
// Inventory Summary
// =============================================================================

/// Dashboard aggregates derived from the current store snapshot.
///
/// Recomputed on demand by [`crate::summary::summarize`], never maintained
/// incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    /// Number of part records.
    pub total: u32,

    /// Sum of on-hand quantity across all records.
    pub total_qty: u32,

    /// Records currently labeled [`ItemStatus::Dipinjam`].
    pub on_loan: u32,

    /// Records at or below [`crate::LOW_STOCK_THRESHOLD`] on hand.
    pub low_stock: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&ItemStatus::Dipinjam).unwrap();
        assert_eq!(json, "\"Dipinjam\"");
        assert_eq!(ItemStatus::Kosong.to_string(), "Kosong");
    }

    #[test]
    fn test_new_record_derives_status_and_barcode() {
        let rec = PartRecord::new("RP-1", "Gear PTO Left", "Penting", "A-02-01", 0);
        assert_eq!(rec.status, ItemStatus::Kosong);
        assert_eq!(rec.qty_out, 0);
        assert!(rec.barcode_url.contains("data=RP-1"));

        let rec = PartRecord::new("RP-2", "Gear PTO Right", "Penting", "A-02-02", 4);
        assert_eq!(rec.status, ItemStatus::Tersedia);
    }

    #[test]
    fn test_part_record_serializes_camel_case() {
        let rec = PartRecord::new("RP-1", "Gear", "Penting", "A-02-01", 1);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["itemCode"], "RP-1");
        assert_eq!(json["qtyOut"], 0);
        assert!(json["barcodeUrl"].as_str().unwrap().starts_with("https://"));
    }

    #[test]
    fn test_audit_row_field_names_match_csv_header() {
        let row = AuditRow {
            item_code: "RP-1".to_string(),
            actual_qty: "5".to_string(),
            location: Some("A-01-01".to_string()),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["ItemCode"], "RP-1");
        assert_eq!(json["ActualQty"], "5");
        assert_eq!(json["Location"], "A-01-01");
    }

    #[test]
    fn test_audit_log_entry_old_none_marks_created() {
        let entry = AuditLogEntry {
            item_code: "RP-9".to_string(),
            old: None,
            new: 7,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json["old"].is_null());
        assert_eq!(json["new"], 7);
    }
}
