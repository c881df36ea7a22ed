//! # Inventory Service
//!
//! Async operations for the frontend.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Service Flow                           │
//! │                                                                     │
//! │  UI Action                 Operation              Store Change      │
//! │  ─────────                 ─────────              ────────────      │
//! │                                                                     │
//! │  Open inventory ─────────► fetch_inventory() ───► (read only)       │
//! │                                                                     │
//! │  Checkout modal ─────────► checkout(req) ───────► qty--, qty_out++  │
//! │                                                                     │
//! │  Return modal ───────────► return_item(req) ────► qty++, qty_out--  │
//! │                                                                     │
//! │  Upload audit CSV ───────► sync_audit_csv() ────► qty overwritten   │
//! │                                                    per row          │
//! │  Dashboard KPIs ─────────► summary() ───────────► (read only)       │
//! │                                                                     │
//! │  Every operation: sleep(latency) ► lock store ► apply ► unlock      │
//! │  The lock is never held across an await point.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tracing::{debug, info, warn};

use rotasi_core::{
    engine, parse_audit_csv, summarize, AuditLogEntry, AuditRow, InventorySummary, PartRecord,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ApiError;
use crate::seed::seed_store;
use crate::state::InventoryState;

// =============================================================================
// Request DTOs
// =============================================================================

/// Checkout request from the UI's transaction modal.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub item_code: String,
    pub qty: u32,
    /// Dealer receiving the parts. Belongs to the transaction ledger (an
    /// external collaborator) and is logged, not persisted on the record.
    pub dealer: String,
}

/// Return request from the UI's transaction modal.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub item_code: String,
    pub qty: u32,
}

// =============================================================================
// Simulated Latency
// =============================================================================

/// Per-operation artificial delay.
///
/// The demo stands in for a remote backend; the delays let the UI exercise
/// its loading states. Purely a UX affordance - no ordering or atomicity
/// meaning. Tests use [`Latency::none`].
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    pub fetch: Duration,
    pub checkout: Duration,
    pub return_item: Duration,
    pub audit: Duration,
}

impl Latency {
    /// The demo profile: roughly what a small document-store backend does.
    pub fn demo() -> Self {
        Latency {
            fetch: Duration::from_millis(200),
            checkout: Duration::from_millis(300),
            return_item: Duration::from_millis(200),
            audit: Duration::from_millis(400),
        }
    }

    /// Zero delay everywhere.
    pub fn none() -> Self {
        Latency {
            fetch: Duration::ZERO,
            checkout: Duration::ZERO,
            return_item: Duration::ZERO,
            audit: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Latency::demo()
    }
}

// =============================================================================
// Inventory Service
// =============================================================================

/// The engine surface consumed by the presentation layer.
///
/// Cheap to clone; clones share the same store.
#[derive(Debug, Clone)]
pub struct InventoryService {
    state: InventoryState,
    latency: Latency,
}

impl InventoryService {
    /// Creates a service over existing state.
    pub fn new(state: InventoryState) -> Self {
        InventoryService {
            state,
            latency: Latency::default(),
        }
    }

    /// Creates a service over a freshly seeded demo store.
    pub fn demo() -> Self {
        InventoryService::new(InventoryState::with_store(seed_store()))
    }

    /// Replaces the latency profile (builder style).
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Returns the full inventory snapshot in display order.
    pub async fn fetch_inventory(&self) -> Vec<PartRecord> {
        debug!("fetch_inventory");
        self.simulate(self.latency.fetch).await;
        let records = self.state.read(|store| store.list());
        info!(count = records.len(), "fetch_inventory complete");
        records
    }

    /// Loans parts out to a dealer.
    ///
    /// ## Returns
    /// The updated record, or [`ApiError`] (`NOT_FOUND` /
    /// `INSUFFICIENT_STOCK`) with the store untouched.
    pub async fn checkout(&self, req: CheckoutRequest) -> Result<PartRecord, ApiError> {
        debug!(item_code = %req.item_code, qty = req.qty, "checkout");
        self.simulate(self.latency.checkout).await;

        let result = self
            .state
            .write(|store| engine::checkout(store, &req.item_code, req.qty));

        match result {
            Ok(record) => {
                // The dealer association goes to the transaction ledger via
                // the log stream; the record itself never stores it.
                info!(
                    item_code = %record.item_code,
                    qty = req.qty,
                    dealer = %req.dealer,
                    remaining = record.qty,
                    "checkout complete"
                );
                Ok(record)
            }
            Err(err) => {
                warn!(item_code = %req.item_code, %err, "checkout rejected");
                Err(err.into())
            }
        }
    }

    /// Takes loaned parts back in.
    ///
    /// ## Returns
    /// The updated record, or [`ApiError`] (`NOT_FOUND`) with the store
    /// untouched.
    pub async fn return_item(&self, req: ReturnRequest) -> Result<PartRecord, ApiError> {
        debug!(item_code = %req.item_code, qty = req.qty, "return_item");
        self.simulate(self.latency.return_item).await;

        let result = self
            .state
            .write(|store| engine::return_item(store, &req.item_code, req.qty));

        match result {
            Ok(record) => {
                info!(
                    item_code = %record.item_code,
                    qty = req.qty,
                    on_hand = record.qty,
                    "return complete"
                );
                Ok(record)
            }
            Err(err) => {
                warn!(item_code = %req.item_code, %err, "return rejected");
                Err(err.into())
            }
        }
    }

    /// Reconciles the store against already-parsed audit rows.
    ///
    /// Infallible by design: row-level problems degrade (unparseable counts
    /// become zero) instead of failing the batch. Returns the per-row log
    /// in input order.
    pub async fn bulk_audit_sync(&self, rows: Vec<AuditRow>) -> Vec<AuditLogEntry> {
        debug!(rows = rows.len(), "bulk_audit_sync");
        self.simulate(self.latency.audit).await;

        let log = self.state.write(|store| engine::bulk_audit_sync(store, &rows));

        let created = log.iter().filter(|e| e.old.is_none()).count();
        info!(rows = log.len(), created, "bulk_audit_sync complete");
        log
    }

    /// Parses uploaded audit CSV text and reconciles the store against it.
    ///
    /// Convenience wrapper combining [`parse_audit_csv`] and
    /// [`InventoryService::bulk_audit_sync`] for the upload flow.
    pub async fn sync_audit_csv(&self, text: &str) -> Vec<AuditLogEntry> {
        self.bulk_audit_sync(parse_audit_csv(text)).await
    }

    /// Recomputes the dashboard KPI numbers.
    pub async fn summary(&self) -> InventorySummary {
        self.simulate(self.latency.fetch).await;
        self.state.read(summarize)
    }

    /// Sleeps for the configured interval, skipping the timer entirely at
    /// zero so tests stay synchronous-fast.
    async fn simulate(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
