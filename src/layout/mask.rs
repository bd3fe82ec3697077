//! Mask application and the four-rule penalty score used to pick one.

use crate::models::{Canvas, MaskPattern, PatternKind};

const PENALTY_ADJACENT: u32 = 3;
const PENALTY_BLOCK: u32 = 3;
const PENALTY_FINDER_LIKE: u32 = 40;
const PENALTY_BALANCE_STEP: u32 = 10;

/// XOR `mask` into every data module. Function patterns are untouched.
/// Applying the same mask twice restores the canvas.
pub fn apply_mask(canvas: &mut Canvas, mask: MaskPattern) {
    let size = canvas.size();
    for row in 0..size {
        for col in 0..size {
            let cell = canvas.at(row, col);
            if cell.kind == PatternKind::Data && mask.is_masked(row, col) {
                canvas.set(row, col, PatternKind::Data, !cell.dark);
            }
        }
    }
}

/// Total penalty of a finished canvas: same-color runs, 2x2 blocks,
/// finder-lookalike sequences and dark/light imbalance.
pub fn penalty(canvas: &Canvas) -> u32 {
    penalty_runs(canvas) + penalty_blocks(canvas) + penalty_finder_like(canvas)
        + penalty_balance(canvas)
}

/// Rule 1: every run of 5+ same-colored modules in a row or column scores
/// its length minus 2.
fn penalty_runs(canvas: &Canvas) -> u32 {
    let size = canvas.size();
    let mut result = 0;
    for a in 0..size {
        result += line_run_penalty(size, |b| canvas.at(a, b).dark);
        result += line_run_penalty(size, |b| canvas.at(b, a).dark);
    }
    result
}

fn line_run_penalty(size: usize, dark_at: impl Fn(usize) -> bool) -> u32 {
    let mut result = 0;
    let mut run_len = 1;
    for b in 1..=size {
        if b < size && dark_at(b) == dark_at(b - 1) {
            run_len += 1;
        } else {
            if run_len >= 5 {
                result += run_len as u32 - 2;
            }
            run_len = 1;
        }
    }
    result
}

/// Rule 2: every 2x2 block of one color scores 3; overlapping windows are
/// counted independently.
fn penalty_blocks(canvas: &Canvas) -> u32 {
    let size = canvas.size();
    let mut result = 0;
    for row in 0..size - 1 {
        for col in 0..size - 1 {
            let color = canvas.at(row, col).dark;
            if color == canvas.at(row, col + 1).dark
                && color == canvas.at(row + 1, col).dark
                && color == canvas.at(row + 1, col + 1).dark
            {
                result += PENALTY_BLOCK;
            }
        }
    }
    result
}

/// Rule 3: the sequence dark-light-dark-dark-dark-light-dark preceded or
/// followed by four light modules scores 40, horizontally and vertically.
fn penalty_finder_like(canvas: &Canvas) -> u32 {
    const PATTERN: [bool; 7] = [true, false, true, true, true, false, true];
    let size = canvas.size();
    let mut result = 0;

    for a in 0..size {
        for start in 0..=(size - PATTERN.len()) {
            let row_hit = PATTERN
                .iter()
                .enumerate()
                .all(|(i, &dark)| canvas.at(a, start + i).dark == dark);
            if row_hit && has_light_flank(size, start, |b| canvas.at(a, b).dark) {
                result += PENALTY_FINDER_LIKE;
            }
            let col_hit = PATTERN
                .iter()
                .enumerate()
                .all(|(i, &dark)| canvas.at(start + i, a).dark == dark);
            if col_hit && has_light_flank(size, start, |b| canvas.at(b, a).dark) {
                result += PENALTY_FINDER_LIKE;
            }
        }
    }
    result
}

fn has_light_flank(size: usize, start: usize, dark_at: impl Fn(usize) -> bool) -> bool {
    let before = start >= 4 && (start - 4..start).all(|b| !dark_at(b));
    let after = start + 11 <= size && (start + 7..start + 11).all(|b| !dark_at(b));
    before || after
}

/// Rule 4: 10 points per 5% step the dark-module share deviates from 50%.
fn penalty_balance(canvas: &Canvas) -> u32 {
    let total = canvas.size() * canvas.size();
    let percent = canvas.dark_count() * 100 / total;
    let deviation = percent.abs_diff(50) as u32;
    PENALTY_BALANCE_STEP * (deviation / 5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Version;

    /// Canvas where every module is Data with the given color
    fn uniform(size_version: u8, dark: bool) -> Canvas {
        let mut canvas = Canvas::new(Version::new(size_version).unwrap());
        for row in 0..canvas.size() {
            for col in 0..canvas.size() {
                canvas.set(row, col, PatternKind::Data, dark);
            }
        }
        canvas
    }

    fn paint_row(canvas: &mut Canvas, row: usize, pattern: &[u8]) {
        for (col, &v) in pattern.iter().enumerate() {
            canvas.set(row, col, PatternKind::Data, v == 1);
        }
    }

    #[test]
    fn test_apply_mask_is_involution() {
        let mut canvas = Canvas::new(Version::new(2).unwrap());
        crate::layout::function_patterns::place_function_patterns(&mut canvas);
        let stream = crate::encoder::bitstream::BitStream::from_bytes(vec![0xC3; 44]);
        crate::layout::placer::place_message(&mut canvas, &stream, MaskPattern::Pattern0);

        let before = canvas.clone();
        for mask in MaskPattern::ALL {
            apply_mask(&mut canvas, mask);
            apply_mask(&mut canvas, mask);
            for row in 0..canvas.size() {
                for col in 0..canvas.size() {
                    assert_eq!(canvas.at(row, col), before.at(row, col));
                }
            }
        }
    }

    #[test]
    fn test_run_penalty() {
        // 5 in a row scores 3, each extra module one more
        assert_eq!(line_run_penalty(5, |_| true), 3);
        assert_eq!(line_run_penalty(7, |_| true), 5);
        // Alternating colors score nothing
        assert_eq!(line_run_penalty(10, |b| b % 2 == 0), 0);
        // 4 is below the threshold
        assert_eq!(line_run_penalty(4, |_| false), 0);
    }

    #[test]
    fn test_block_penalty_counts_overlaps() {
        // A 3x3 uniform area contains four overlapping 2x2 windows
        let mut canvas = uniform(1, false);
        for row in 0..3 {
            for col in 0..3 {
                canvas.set(row, col, PatternKind::Data, true);
            }
        }
        // Rows 0-2 x cols 0-2 give 4 dark windows; the rest of the canvas is
        // uniformly light: (20*20 - 4 - misc) windows... easier to compare
        // against the all-light baseline.
        let baseline = penalty_blocks(&uniform(1, false));
        let with_square = penalty_blocks(&canvas);
        // Nine windows touch the square: the four fully inside stay uniform
        // (now dark), the five straddling its border become mixed.
        assert_eq!(baseline, 20 * 20 * 3);
        assert_eq!(with_square, baseline - 5 * 3);
    }

    #[test]
    fn test_finder_like_penalty() {
        let mut canvas = uniform(1, false);
        // Light canvas: place the 1011101 sequence at row 10 with light runs
        // on both sides
        paint_row(&mut canvas, 10, &[0, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0]);
        let hits = penalty_finder_like(&canvas);
        // Column scan sees no pattern; the row scores once
        assert_eq!(hits, PENALTY_FINDER_LIKE);
    }

    #[test]
    fn test_finder_like_requires_light_flank() {
        let mut canvas = uniform(1, true);
        // Dark canvas: the pattern exists but is flanked by dark modules
        paint_row(&mut canvas, 10, &[1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 1]);
        assert_eq!(penalty_finder_like(&canvas), 0);
    }

    #[test]
    fn test_balance_penalty() {
        // All dark: |100 - 50| / 5 = 10 steps
        assert_eq!(penalty_balance(&uniform(1, true)), 100);
        assert_eq!(penalty_balance(&uniform(1, false)), 100);
        // Half dark: no penalty
        let mut canvas = uniform(1, false);
        let size = canvas.size();
        let mut darkened = 0;
        'outer: for row in 0..size {
            for col in 0..size {
                if darkened * 2 >= size * size {
                    break 'outer;
                }
                canvas.set(row, col, PatternKind::Data, true);
                darkened += 1;
            }
        }
        assert_eq!(penalty_balance(&canvas), 0);
    }
}
