//! Zig-zag placement of the interleaved codeword stream.

use crate::encoder::bitstream::BitStream;
use crate::models::{Canvas, MaskPattern, PatternKind};

/// Walk the standard column-pair traversal and deposit message bits into
/// every free module, applying `mask` on the way.
///
/// Column pairs run right to left; the walk shifts one column left of the
/// vertical timing column. Direction alternates per pair starting
/// bottom-to-top, and within a row the right column is visited before the
/// left. Once the stream is exhausted the remaining modules (the version's
/// remainder bits) are filled with masked zero bits.
pub fn place_message(canvas: &mut Canvas, stream: &BitStream, mask: MaskPattern) {
    let size = canvas.size();
    let mut index = 0usize;
    let mut right = size as i32 - 1;
    let mut upward = true;

    while right >= 1 {
        if right == 6 {
            right = 5;
        }
        for vert in 0..size {
            let row = if upward { size - 1 - vert } else { vert };
            for j in 0..2 {
                let col = (right - j) as usize;
                if canvas.at(row, col).kind != PatternKind::Unknown {
                    continue;
                }
                let bit = stream.bit_at(index).unwrap_or(0);
                index += 1;
                let dark = (bit == 1) ^ mask.is_masked(row, col);
                canvas.set(row, col, PatternKind::Data, dark);
            }
        }
        upward = !upward;
        right -= 2;
    }

    debug_assert_eq!(index, canvas.version().raw_data_modules());
}
