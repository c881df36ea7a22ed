//! # Demo Flow Runner
//!
//! Developer binary that walks the whole engine surface once against the
//! seeded store, with structured logging enabled. Useful for eyeballing the
//! behavior the UI will see without wiring up a frontend.
//!
//! ## Usage
//! ```bash
//! cargo run -p rotasi-engine --bin demo
//!
//! # More detail:
//! RUST_LOG=debug cargo run -p rotasi-engine --bin demo
//! ```

use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use rotasi_engine::{CheckoutRequest, InventoryService, ReturnRequest};

const AUDIT_CSV: &str = "\
ItemCode,ActualQty,Location
RP-20251118-1a2b,5,A-09-01
RP-20251118-5e6f,0,
RP-NEW-0001,7,C-03-02
";

#[tokio::main]
async fn main() {
    init_tracing();

    let service = InventoryService::demo();

    let records = service.fetch_inventory().await;
    for record in &records {
        info!(
            item_code = %record.item_code,
            qty = record.qty,
            qty_out = record.qty_out,
            status = %record.status,
            "seeded"
        );
    }

    // A checkout that succeeds...
    match service
        .checkout(CheckoutRequest {
            item_code: "RP-20251118-1a2b".to_string(),
            qty: 1,
            dealer: "Dealer A".to_string(),
        })
        .await
    {
        Ok(record) => info!(qty = record.qty, qty_out = record.qty_out, "checked out"),
        Err(err) => error!(%err, "checkout failed"),
    }

    // ...and one the engine must reject without touching the store.
    if let Err(err) = service
        .checkout(CheckoutRequest {
            item_code: "RP-20251118-1a2b".to_string(),
            qty: 99,
            dealer: "Dealer A".to_string(),
        })
        .await
    {
        info!(code = ?err.code, message = %err.message, "over-request rejected as expected");
    }

    match service
        .return_item(ReturnRequest {
            item_code: "RP-20251118-3c4d".to_string(),
            qty: 2,
        })
        .await
    {
        Ok(record) => info!(qty = record.qty, status = %record.status, "returned"),
        Err(err) => error!(%err, "return failed"),
    }

    let log = service.sync_audit_csv(AUDIT_CSV).await;
    for entry in &log {
        info!(item_code = %entry.item_code, old = ?entry.old, new = entry.new, "audit row");
    }

    let summary = service.summary().await;
    info!(
        total = summary.total,
        total_qty = summary.total_qty,
        on_loan = summary.on_loan,
        low_stock = summary.low_stock,
        "dashboard summary"
    );
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rotasi=trace` - Show trace for rotasi crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,rotasi=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
