//! # API Error Type
//!
//! Unified error type for the frontend boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Error Flow in Rotasi Parts                         │
//! │                                                                     │
//! │  rotasi-core                rotasi-engine            Frontend       │
//! │  ───────────                ─────────────            ────────       │
//! │                                                                     │
//! │  CoreError::ItemNotFound ──► ApiError {                             │
//! │  CoreError::Insufficient─┐     code: "NOT_FOUND" |                  │
//! │    Stock                 └─►         "INSUFFICIENT_STOCK",          │
//! │                                message: "human readable"            │
//! │                              } ────────────────────► toast / modal  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both failures are operation-scoped and recoverable; the store is never
//! left half-mutated, so the UI can simply show the message and re-render
//! from the next fetch.

use serde::Serialize;

use rotasi_core::CoreError;

/// API error returned from facade operations.
///
/// ## Serialization
/// This is what the frontend receives when an operation fails:
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "insufficient stock for RP-20251118-1a2b: available 3, requested 99"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable error message for display.
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await engine.checkout({ itemCode, qty, dealer });
/// } catch (e) {
///   if (e.code === 'INSUFFICIENT_STOCK') highlightQtyField(e.message);
///   else showNotification(e.message);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The referenced item code has no matching record.
    NotFound,

    /// Checkout requested more than the current on-hand quantity.
    InsufficientStock,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }
}

/// Converts core errors to API errors. The core message already carries the
/// item code and counts, so it is surfaced verbatim.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match err {
            CoreError::ItemNotFound(_) => ErrorCode::NotFound,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let api: ApiError = CoreError::ItemNotFound("NOPE".to_string()).into();
        assert_eq!(api.code, ErrorCode::NotFound);
        assert_eq!(api.message, "item not found: NOPE");

        let api: ApiError = CoreError::InsufficientStock {
            item_code: "RP-1".to_string(),
            available: 3,
            requested: 99,
        }
        .into();
        assert_eq!(api.code, ErrorCode::InsufficientStock);
    }

    #[test]
    fn test_serialized_shape_for_frontend() {
        let api = ApiError::new(ErrorCode::InsufficientStock, "insufficient stock for RP-1");
        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["code"], "INSUFFICIENT_STOCK");
        assert_eq!(json["message"], "insufficient stock for RP-1");
    }
}
