//! Placement of finder, separator, alignment, timing and reserved regions.

use log::debug;

use crate::encoder::tables;
use crate::models::{Canvas, PatternKind};

/// Finder pattern side length in modules
const FINDER_SIZE: usize = 7;

/// Lay every function pattern onto a fresh canvas. Afterwards the remaining
/// Unknown cells are exactly the data modules of the version.
pub fn place_function_patterns(canvas: &mut Canvas) {
    place_finders(canvas);
    place_alignment_patterns(canvas);
    place_timing_patterns(canvas);
    super::format::reserve_format_cells(canvas);
    place_version_info(canvas);
}

/// The three 7x7 corner locators plus their one-module light separators
fn place_finders(canvas: &mut Canvas) {
    let size = canvas.size();
    let corners = [(0, 0), (0, size - FINDER_SIZE), (size - FINDER_SIZE, 0)];
    for (row, col) in corners {
        place_finder(canvas, row, col);
    }
}

fn place_finder(canvas: &mut Canvas, row: usize, col: usize) {
    for dr in 0..FINDER_SIZE {
        for dc in 0..FINDER_SIZE {
            // Concentric rings: dark border, light ring, dark 3x3 core
            let dist = dr.abs_diff(3).max(dc.abs_diff(3));
            canvas.set(row + dr, col + dc, PatternKind::Finder, dist != 2);
        }
    }

    // Light separator on the sides facing the symbol interior
    let lo_r = row as i32 - 1;
    let lo_c = col as i32 - 1;
    let hi_r = (row + FINDER_SIZE) as i32;
    let hi_c = (col + FINDER_SIZE) as i32;
    for r in lo_r..=hi_r {
        for c in lo_c..=hi_c {
            let on_border = r == lo_r || r == hi_r || c == lo_c || c == hi_c;
            if on_border && canvas.is_inside(r, c) {
                canvas.set(r as usize, c as usize, PatternKind::Separator, false);
            }
        }
    }
}

/// 5x5 locators centered on the version's coordinate grid. Any candidate
/// whose bounding box touches a finder or separator is skipped entirely.
fn place_alignment_patterns(canvas: &mut Canvas) {
    let centers = tables::alignment_centers(canvas.version());
    for &row in centers {
        for &col in centers {
            if overlaps_finder(canvas, row, col) {
                debug!("skip alignment pattern at ({}, {})", row, col);
                continue;
            }
            for dr in 0..5 {
                for dc in 0..5 {
                    // Dark border and center, light middle ring
                    let dist = dr.max(dc).max(4 - dr).max(4 - dc) - 2;
                    canvas.set(
                        row - 2 + dr,
                        col - 2 + dc,
                        PatternKind::Alignment,
                        dist != 1,
                    );
                }
            }
        }
    }
}

fn overlaps_finder(canvas: &Canvas, row: usize, col: usize) -> bool {
    for dr in -2i32..=2 {
        for dc in -2i32..=2 {
            let (r, c) = (row as i32 + dr, col as i32 + dc);
            if canvas.is_inside(r, c) {
                let kind = canvas.at(r as usize, c as usize).kind;
                if kind == PatternKind::Finder || kind == PatternKind::Separator {
                    return true;
                }
            }
        }
    }
    false
}

/// Alternating lines in row 6 and column 6, dark on even coordinates.
/// Cells already claimed by finders, separators or alignment patterns keep
/// their marking.
fn place_timing_patterns(canvas: &mut Canvas) {
    let size = canvas.size();
    for a in 0..size {
        let dark = a % 2 == 0;
        if canvas.at(6, a).kind == PatternKind::Unknown {
            canvas.set(6, a, PatternKind::Timing, dark);
        }
        if canvas.at(a, 6).kind == PatternKind::Unknown {
            canvas.set(a, 6, PatternKind::Timing, dark);
        }
    }
}

/// Two 6x3 strips of the 18-bit version string for versions 7+, placed above
/// the bottom-left finder and left of the top-right finder.
fn place_version_info(canvas: &mut Canvas) {
    let version = canvas.version();
    if version.value() < 7 {
        return;
    }
    let size = canvas.size();
    let info = tables::version_info(version);
    for i in 0..18 {
        let dark = (info >> i) & 1 == 1;
        let long = size - 11 + i % 3;
        let short = i / 3;
        canvas.set(short, long, PatternKind::Version, dark);
        canvas.set(long, short, PatternKind::Version, dark);
    }
}
