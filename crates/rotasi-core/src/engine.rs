//! # Transaction Engine
//!
//! The three operations that may mutate the record store: checkout,
//! return, and bulk audit sync.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Transaction Engine Rules                         │
//! │                                                                     │
//! │  checkout(code, n)                                                  │
//! │    require record exists, n <= qty                                  │
//! │    qty -= n;  qty_out += n;  status = Dipinjam   (unconditionally)  │
//! │                                                                     │
//! │  return(code, n)                                                    │
//! │    require record exists                                            │
//! │    qty += n;  qty_out -|- n (saturating at 0)                       │
//! │    status = Tersedia  only if resulting qty > 0, else unchanged     │
//! │                                                                     │
//! │  bulk_audit_sync(rows)                                              │
//! │    per row, in order, committed independently:                      │
//! │      known code   ──► qty = counted (overwrite), status re-derived, │
//! │                       location from row when non-empty              │
//! │      unknown code ──► create record (qty_out = 0, "Unknown" fills)  │
//! │    qty_out is never touched by audit sync                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Atomicity
//! Checkout and return validate before mutating, so a failed operation
//! leaves the store byte-identical. Audit sync has no failure path at all:
//! each row is applied as it is read, with no rollback across rows.
//!
//! Two deliberately non-"smart" rules are preserved from the system this
//! engine reconciles with, rather than corrected:
//! - checkout labels the record `Dipinjam` even when stock remains on hand;
//! - a return that still leaves `qty == 0` keeps the record's prior status
//!   (no transition to `Kosong` here).

use crate::audit::parse_qty_or_zero;
use crate::error::{CoreError, CoreResult};
use crate::store::InventoryStore;
use crate::types::{AuditLogEntry, AuditRow, ItemStatus, PartRecord};
use crate::{UNKNOWN_CATEGORY, UNKNOWN_LOCATION};

// =============================================================================
// Checkout
// =============================================================================

/// Loans `qty` pieces of an item out.
///
/// Decrements on-hand, increments the checked-out counter and labels the
/// record [`ItemStatus::Dipinjam`]. The two counters are independent
/// bookkeeping, not a transfer within a fixed pool.
///
/// The dealer receiving the parts is handled one layer up: it belongs to
/// the transaction ledger (an external collaborator), not to the record.
///
/// ## Returns
/// A clone of the updated record, or
/// - [`CoreError::ItemNotFound`] for an unknown code,
/// - [`CoreError::InsufficientStock`] when `qty` exceeds on-hand stock,
///
/// with the store left untouched on failure.
pub fn checkout(store: &mut InventoryStore, item_code: &str, qty: u32) -> CoreResult<PartRecord> {
    let record = store
        .get_mut(item_code)
        .ok_or_else(|| CoreError::ItemNotFound(item_code.to_string()))?;

    if qty > record.qty {
        return Err(CoreError::InsufficientStock {
            item_code: item_code.to_string(),
            available: record.qty,
            requested: qty,
        });
    }

    record.qty -= qty;
    record.qty_out = record.qty_out.saturating_add(qty);
    record.status = ItemStatus::Dipinjam;

    Ok(record.clone())
}

// =============================================================================
// Return
// =============================================================================

/// Takes `qty` pieces of an item back in.
///
/// Increments on-hand and decrements the checked-out counter, clamped at
/// zero: returning more than was ever checked out is accepted and simply
/// zeroes `qty_out` (lenient policy, no upper bound on the returned
/// amount). The record becomes [`ItemStatus::Tersedia`] only when the
/// resulting on-hand quantity is positive; otherwise the prior status is
/// kept as-is.
///
/// ## Returns
/// A clone of the updated record, or [`CoreError::ItemNotFound`] with the
/// store untouched.
pub fn return_item(store: &mut InventoryStore, item_code: &str, qty: u32) -> CoreResult<PartRecord> {
    let record = store
        .get_mut(item_code)
        .ok_or_else(|| CoreError::ItemNotFound(item_code.to_string()))?;

    record.qty = record.qty.saturating_add(qty);
    record.qty_out = record.qty_out.saturating_sub(qty);
    if record.qty > 0 {
        record.status = ItemStatus::Tersedia;
    }

    Ok(record.clone())
}

// =============================================================================
// Bulk Audit Sync
// =============================================================================

/// Reconciles on-hand quantities against a physical count.
///
/// Rows are processed strictly in input order and each row commits
/// independently - there is no all-or-nothing transaction across rows and
/// no row-level error channel. An unparseable counted quantity degrades to
/// zero (see [`parse_qty_or_zero`]) instead of failing the row.
///
/// The counted value **overwrites** `qty` (idempotent, not additive);
/// `qty_out` is never touched, because the audit reconciles shelf count,
/// not loan bookkeeping. Rows for unknown item codes create a new record
/// on the spot with `"Unknown"` placeholder fields.
///
/// ## Returns
/// One [`AuditLogEntry`] per row, in input order; `old` is `None` for rows
/// that created a record.
pub fn bulk_audit_sync(store: &mut InventoryStore, rows: &[AuditRow]) -> Vec<AuditLogEntry> {
    rows.iter().map(|row| apply_audit_row(store, row)).collect()
}

/// Applies a single audit row to the store.
fn apply_audit_row(store: &mut InventoryStore, row: &AuditRow) -> AuditLogEntry {
    let counted = parse_qty_or_zero(&row.actual_qty);
    // An empty location field means "not recounted", same as a missing one.
    let location = row
        .location
        .as_deref()
        .filter(|loc| !loc.is_empty());

    match store.get_mut(&row.item_code) {
        Some(record) => {
            let old = record.qty;
            record.qty = counted;
            if let Some(loc) = location {
                record.location = loc.to_string();
            }
            record.status = if counted > 0 {
                ItemStatus::Tersedia
            } else {
                ItemStatus::Kosong
            };
            AuditLogEntry {
                item_code: row.item_code.clone(),
                old: Some(old),
                new: counted,
            }
        }
        None => {
            // First sighting of this code: the count is the whole truth.
            // PartRecord::new derives status and barcode URL and starts
            // with nothing checked out.
            store.upsert(PartRecord::new(
                row.item_code.clone(),
                row.item_code.clone(),
                UNKNOWN_CATEGORY,
                location.unwrap_or(UNKNOWN_LOCATION),
                counted,
            ));
            AuditLogEntry {
                item_code: row.item_code.clone(),
                old: None,
                new: counted,
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
