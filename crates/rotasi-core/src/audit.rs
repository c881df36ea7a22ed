//! # Audit CSV Ingestion
//!
//! Parses an uploaded physical-count file into [`AuditRow`]s for bulk audit
//! sync.
//!
//! ## Wire Format
//! ```text
//! ItemCode,ActualQty,Location          ◄── header, discarded unconditionally
//! RP-20251118-1a2b,5,A-01-01
//! RP-20251118-3c4d,0,
//! RP-NEW-0001,12,B-01-03
//! ```
//!
//! Comma-delimited, exactly three positional fields, each trimmed of
//! surrounding whitespace. There is **no quoting or escaping**: a value
//! containing a comma misparses, by design. Lines with fewer than three
//! fields still yield a row (missing location becomes `None`); a missing
//! quantity becomes the empty string and later coerces to zero. The parser
//! itself never fails - malformed rows are garbage in, garbage out, and
//! numeric problems are deferred to [`parse_qty_or_zero`].

use crate::types::AuditRow;

/// Parses raw audit CSV text into rows, preserving line order.
///
/// The first line is assumed to be the header and is discarded without
/// validation. Surrounding whitespace (including a trailing newline and any
/// `\r` left by Windows line endings) is trimmed away.
///
/// ## Example
/// ```rust
/// use rotasi_core::audit::parse_audit_csv;
///
/// let rows = parse_audit_csv("ItemCode,ActualQty,Location\nRP-1,5,A-01-01");
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].item_code, "RP-1");
/// assert_eq!(rows[0].actual_qty, "5");
/// assert_eq!(rows[0].location.as_deref(), Some("A-01-01"));
/// ```
pub fn parse_audit_csv(text: &str) -> Vec<AuditRow> {
    text.trim()
        .lines()
        .skip(1)
        .map(parse_audit_line)
        .collect()
}

/// Splits one data line into its three positional fields.
fn parse_audit_line(line: &str) -> AuditRow {
    let mut fields = line.split(',').map(str::trim);
    AuditRow {
        item_code: fields.next().unwrap_or_default().to_string(),
        actual_qty: fields.next().unwrap_or_default().to_string(),
        location: fields.next().map(str::to_string),
    }
}

/// Lenient numeric coercion for counted quantities.
///
/// Anything that is not a canonical non-negative integer - empty, text,
/// negative, fractional - degrades to `0` rather than failing the row. This
/// matches the engine's lenient audit policy and, as a side effect, keeps
/// the `qty >= 0` invariant unconditionally.
///
/// ## Example
/// ```rust
/// use rotasi_core::audit::parse_qty_or_zero;
///
/// assert_eq!(parse_qty_or_zero("12"), 12);
/// assert_eq!(parse_qty_or_zero(""), 0);
/// assert_eq!(parse_qty_or_zero("abc"), 0);
/// assert_eq!(parse_qty_or_zero("-3"), 0);
/// ```
pub fn parse_qty_or_zero(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_single_row() {
        let rows = parse_audit_csv("ItemCode,ActualQty,Location\nRP-1,5,A-01-01");
        assert_eq!(
            rows,
            vec![AuditRow {
                item_code: "RP-1".to_string(),
                actual_qty: "5".to_string(),
                location: Some("A-01-01".to_string()),
            }]
        );
    }

    #[test]
    fn test_header_discarded_without_validation() {
        // Whatever the first line says, it is skipped.
        let rows = parse_audit_csv("this is not a header\nRP-1,5,A-01-01");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item_code, "RP-1");
    }

    #[test]
    fn test_fields_are_trimmed_and_order_preserved() {
        let rows = parse_audit_csv("ItemCode,ActualQty,Location\n RP-2 , 7 , B-01-03 \nRP-1,1,A-01-01");
        assert_eq!(rows[0].item_code, "RP-2");
        assert_eq!(rows[0].actual_qty, "7");
        assert_eq!(rows[0].location.as_deref(), Some("B-01-03"));
        assert_eq!(rows[1].item_code, "RP-1");
    }

    #[test]
    fn test_short_line_yields_missing_location() {
        let rows = parse_audit_csv("h\nRP-1,5");
        assert_eq!(rows[0].location, None);

        // Present-but-empty third field is Some(""), not None; the engine's
        // emptiness check decides whether to apply it.
        let rows = parse_audit_csv("h\nRP-1,5,");
        assert_eq!(rows[0].location.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_quantity_becomes_empty_string() {
        let rows = parse_audit_csv("h\nRP-1");
        assert_eq!(rows[0].actual_qty, "");
        assert_eq!(parse_qty_or_zero(&rows[0].actual_qty), 0);
    }

    #[test]
    fn test_crlf_input() {
        let rows = parse_audit_csv("ItemCode,ActualQty,Location\r\nRP-1,5,A-01-01\r\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].location.as_deref(), Some("A-01-01"));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        // No quoting support: a comma inside a value shifts everything.
        let rows = parse_audit_csv("h\nRP-1,5,A-01-01,garbage");
        assert_eq!(rows[0].location.as_deref(), Some("A-01-01"));
    }

    #[test]
    fn test_parse_qty_or_zero_defaults() {
        assert_eq!(parse_qty_or_zero("0"), 0);
        assert_eq!(parse_qty_or_zero(" 42 "), 42);
        assert_eq!(parse_qty_or_zero("5x"), 0);
        assert_eq!(parse_qty_or_zero("4.5"), 0);
        assert_eq!(parse_qty_or_zero("-1"), 0);
    }
}
