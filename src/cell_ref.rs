//! Utilities for reading column positions out of Excel-style cell references.

/// Highest column a worksheet can hold (`XFD`), 0-indexed.
pub const MAX_COLUMN: u32 = 16_383;

/// Parse the column letters of a reference like `"C7"` into a 0-indexed column.
///
/// Only the leading run of ASCII letters counts; `$` anchors are skipped.
/// Returns `None` when the reference has no column letters or names a column
/// past [`MAX_COLUMN`].
pub fn parse_column_bytes(ref_bytes: &[u8]) -> Option<u32> {
    let mut col: u32 = 0;
    let mut saw_col = false;

    for &b in ref_bytes {
        if b == b'$' {
            continue;
        }
        if !b.is_ascii_alphabetic() {
            break;
        }
        let upper = b.to_ascii_uppercase();
        col = col
            .saturating_mul(26)
            .saturating_add(u32::from(upper - b'A') + 1);
        saw_col = true;
    }

    if !saw_col {
        return None;
    }

    Some(col - 1).filter(|&c| c <= MAX_COLUMN)
}
