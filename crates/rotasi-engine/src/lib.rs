//! # rotasi-engine: Async Service Facade
//!
//! The surface the web frontend calls. Everything here is a thin
//! orchestration layer over [`rotasi_core`]: shared state, simulated
//! backend latency, structured logging and serializable errors.
//!
//! ## Module Organization
//! ```text
//! rotasi_engine/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── state.rs        ◄─── Shared Arc<Mutex<InventoryStore>> wrapper
//! ├── service.rs      ◄─── Async operations + latency + tracing
//! ├── error.rs        ◄─── ApiError for the frontend boundary
//! ├── seed.rs         ◄─── Demo seed data set
//! └── bin/demo.rs     ◄─── Dev binary: scripted end-to-end flow
//! ```
//!
//! ## Why Simulated Latency?
//! The demo stands in for a future document-store/workflow backend. Every
//! operation sleeps for a configurable interval before touching the store
//! so the UI exercises its loading states; the delay carries **no**
//! ordering or atomicity meaning - each operation's effects are fully
//! applied before its result is returned.
//!
//! ## Example Usage
//! ```rust
//! use rotasi_engine::{CheckoutRequest, InventoryService};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let service = InventoryService::demo().with_latency(rotasi_engine::Latency::none());
//!
//! let updated = service
//!     .checkout(CheckoutRequest {
//!         item_code: "RP-20251118-1a2b".to_string(),
//!         qty: 1,
//!         dealer: "Dealer A".to_string(),
//!     })
//!     .await
//!     .unwrap();
//! assert_eq!(updated.qty, 2);
//! # }
//! ```

pub mod error;
pub mod seed;
pub mod service;
pub mod state;

pub use error::{ApiError, ErrorCode};
pub use seed::seed_records;
pub use service::{CheckoutRequest, InventoryService, Latency, ReturnRequest};
pub use state::InventoryState;
