//! Two-column partitioning of the line sequence
//!
//! Pure function of the current song and the optional user-chosen split
//! line; no state of its own.

use crate::models::Line;

/// Partition lines into left/right display columns.
///
/// `None` splits automatically at `ceil(n / 2)` (left gets the bigger
/// half). `Some(i)` puts `lines[0..=i]` on the left and the remainder on
/// the right; toggling the same index off (back to `None`) is handled by
/// the caller.
pub fn split_columns(lines: &[Line], split_index: Option<usize>) -> (&[Line], &[Line]) {
    let at = match split_index {
        Some(i) => (i + 1).min(lines.len()),
        None => lines.len().div_ceil(2),
    };
    lines.split_at(at)
}
