//! # rotasi-core: Pure Business Logic for Rotasi Parts
//!
//! This crate is the **heart** of the rotatable spare-part inventory system.
//! It contains the record store, the transaction engine (checkout / return /
//! bulk audit sync), the audit CSV parser and the dashboard summary
//! projection as pure logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Rotasi Parts Architecture                       │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 Web Frontend (out of scope)                   │  │
//! │  │   Inventory table ──► Checkout/Return modal ──► Audit upload  │  │
//! │  └────────────────────────────┬──────────────────────────────────┘  │
//! │                               │                                     │
//! │  ┌────────────────────────────▼──────────────────────────────────┐  │
//! │  │              rotasi-engine (async service facade)             │  │
//! │  │     fetch_inventory, checkout, return_item, audit sync        │  │
//! │  └────────────────────────────┬──────────────────────────────────┘  │
//! │                               │                                     │
//! │  ┌────────────────────────────▼──────────────────────────────────┐  │
//! │  │               ★ rotasi-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │  │
//! │  │  │  types  │ │  store  │ │ engine  │ │  audit  │ │ summary │  │  │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO NETWORK • NO RENDERING • PURE FUNCTIONS         │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PartRecord, ItemStatus, AuditRow, ...)
//! - [`error`] - Domain error types
//! - [`store`] - In-memory, insertion-ordered record store
//! - [`engine`] - Checkout / return / bulk audit sync transaction rules
//! - [`audit`] - Audit CSV parsing and lenient numeric coercion
//! - [`summary`] - Dashboard aggregates derived from the store
//! - [`barcode`] - Barcode label URL derivation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation mutates only the store it is given
//! 2. **No I/O**: Network, file system, rendering are FORBIDDEN here
//! 3. **Unsigned Quantities**: `qty` and `qty_out` are `u32`, so the
//!    non-negativity invariants hold by construction
//! 4. **Explicit Errors**: Failed operations return typed errors and leave
//!    the store untouched
//!
//! ## Example Usage
//!
//! ```rust
//! use rotasi_core::engine;
//! use rotasi_core::store::InventoryStore;
//! use rotasi_core::types::{ItemStatus, PartRecord};
//!
//! let mut store = InventoryStore::new();
//! store.upsert(PartRecord::new("RP-1", "AC Compressor 24V", "Penting", "A-01-01", 3));
//!
//! let updated = engine::checkout(&mut store, "RP-1", 1).unwrap();
//! assert_eq!(updated.qty, 2);
//! assert_eq!(updated.qty_out, 1);
//! assert_eq!(updated.status, ItemStatus::Dipinjam);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod audit;
pub mod barcode;
pub mod engine;
pub mod error;
pub mod store;
pub mod summary;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rotasi_core::PartRecord` instead of
// `use rotasi_core::types::PartRecord`

pub use audit::{parse_audit_csv, parse_qty_or_zero};
pub use barcode::barcode_url;
pub use error::{CoreError, CoreResult};
pub use store::InventoryStore;
pub use summary::summarize;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Low-stock threshold used by the dashboard summary (`qty <= 2`).
///
/// ## Business Reason
/// Rotatable spares are slow movers; two pieces on the shelf is the point
/// where the parts room starts chasing returns. Fixed for now, can become
/// per-category configuration later.
pub const LOW_STOCK_THRESHOLD: u32 = 2;

/// Category assigned to records created implicitly by bulk audit sync.
///
/// An audit row for an unknown item code still has to land somewhere; the
/// parts room re-classifies these after the physical count.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Location assigned to audit-created records whose row carries no location.
pub const UNKNOWN_LOCATION: &str = "Unknown";
