//! # Error Types
//!
//! Domain-specific error types for rotasi-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  rotasi-core errors (this file)                                     │
//! │  └── CoreError       - Transaction engine failures                  │
//! │                                                                     │
//! │  rotasi-engine errors (facade crate)                                │
//! │  └── ApiError        - What the frontend sees (serialized)          │
//! │                                                                     │
//! │  Flow: CoreError → ApiError → Frontend                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item code, counts)
//! 3. Errors are enum variants, never String
//! 4. Every failure is operation-scoped and recoverable; the store is left
//!    untouched when an operation fails

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Transaction engine failures.
///
/// Both variants are local, recoverable errors surfaced verbatim to the
/// caller/UI. Neither corrupts the store: checkout and return either fully
/// apply or change nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The operation referenced an item code with no matching record.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Checkout requested more than the current on-hand quantity.
    #[error("insufficient stock for {item_code}: available {available}, requested {requested}")]
    InsufficientStock {
        item_code: String,
        available: u32,
        requested: u32,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound("NOPE".to_string());
        assert_eq!(err.to_string(), "item not found: NOPE");

        let err = CoreError::InsufficientStock {
            item_code: "RP-20251118-1a2b".to_string(),
            available: 3,
            requested: 99,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for RP-20251118-1a2b: available 3, requested 99"
        );
    }
}
