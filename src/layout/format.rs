//! Format information placement (EC level + mask pattern, BCH protected).

use crate::encoder::tables;
use crate::models::{Canvas, ECLevel, MaskPattern, PatternKind};

/// Both 15-cell copies of the format string, as (bit index, row, col).
///
/// Copy one wraps around the top-left finder; copy two is split under the
/// top-right finder (bits 0-7) and right of the bottom-left finder
/// (bits 8-14). The dark module is handled separately.
fn format_positions(size: usize) -> impl Iterator<Item = (usize, usize, usize)> {
    let mut cells = Vec::with_capacity(30);
    for i in 0..6 {
        cells.push((i, i, 8));
    }
    cells.push((6, 7, 8));
    cells.push((7, 8, 8));
    cells.push((8, 8, 7));
    for i in 9..15 {
        cells.push((i, 8, 14 - i));
    }

    for i in 0..8 {
        cells.push((i, 8, size - 1 - i));
    }
    for i in 8..15 {
        cells.push((i, size - 15 + i, 8));
    }
    cells.into_iter()
}

/// Mark the format cells and the dark module so the zig-zag walk skips them.
/// Values are placeholders until [`write_format_info`] runs for the chosen
/// mask.
pub(crate) fn reserve_format_cells(canvas: &mut Canvas) {
    let size = canvas.size();
    for (_, row, col) in format_positions(size) {
        canvas.set(row, col, PatternKind::Format, false);
    }
    // The module above the bottom-left finder separator is always dark
    canvas.set(size - 8, 8, PatternKind::Format, true);
}

/// Write the table-provided format string for (level, mask) into both
/// reserved copies. The string carries its own BCH mask; the data mask
/// function is never applied here.
pub fn write_format_info(canvas: &mut Canvas, level: ECLevel, mask: MaskPattern) {
    let bits = tables::format_info(level, mask);
    let size = canvas.size();
    for (i, row, col) in format_positions(size) {
        canvas.set(row, col, PatternKind::Format, (bits >> i) & 1 == 1);
    }
    canvas.set(size - 8, 8, PatternKind::Format, true);
}
