//! # Barcode Label References
//!
//! Label images are rendered by an external barcode service; this crate
//! never touches image bytes. The frontend requests the image straight from
//! the URL derived here and prints it.
//!
//! ## Usage
//! ```rust
//! use rotasi_core::barcode::barcode_url;
//!
//! let url = barcode_url("RP-20251118-1a2b");
//! assert_eq!(
//!     url,
//!     "https://barcode.tec-it.com/barcode.ashx?data=RP-20251118-1a2b&code=Code128"
//! );
//! ```

use url::form_urlencoded;

/// Endpoint of the external barcode rendering service.
pub const BARCODE_ENDPOINT: &str = "https://barcode.tec-it.com/barcode.ashx";

/// Symbology requested from the rendering service. Code 128 handles the
/// full ASCII range of item codes and prints compactly on rack labels.
const BARCODE_SYMBOLOGY: &str = "Code128";

/// Derives the label-image URL for an item code.
///
/// Pure and deterministic: the same code always yields the same URL, so the
/// value can be stored denormalized on a record or recomputed at will. The
/// item code is query-encoded, so codes with reserved characters still form
/// a valid URL.
pub fn barcode_url(item_code: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("data", item_code)
        .append_pair("code", BARCODE_SYMBOLOGY)
        .finish();
    format!("{}?{}", BARCODE_ENDPOINT, query)
}

// =============================================================================
// Unit Tests
// =============================================================================
