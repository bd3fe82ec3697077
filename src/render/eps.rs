//! EPS 3.0 renderer: one rectfill per dark module, y axis flipped.

use std::io::{self, Write};

use crate::models::Canvas;
use crate::render::RenderOptions;

/// Write the symbol as an EPS document with one rectfill per dark module
pub fn write_eps<W: Write>(
    writer: &mut W,
    canvas: &Canvas,
    options: &RenderOptions,
) -> io::Result<()> {
    let side = canvas.size() as i64;
    let indent = i64::from(options.indent);
    let scale = i64::from(options.scale);
    let (llx, lly) = (-indent * scale, -indent * scale);
    let (urx, ury) = ((side + indent) * scale, (side + indent) * scale);

    writeln!(writer, "%!PS-Adobe-3.0 EPSF-3.0")?;
    writeln!(writer, "%%BoundingBox: {} {} {} {}", llx, lly, urx, ury)?;
    writeln!(writer, "%%Title: QR code")?;
    writeln!(writer, "%%EndComments")?;

    if scale != 1 {
        writeln!(writer, "{} {} scale", scale, scale)?;
    }
    writeln!(writer, "1.0 1.0 1.0 setrgbcolor")?;
    writeln!(
        writer,
        "{} {} {} {} rectfill",
        -indent,
        -indent,
        side + 2 * indent,
        side + 2 * indent
    )?;

    writeln!(writer, "0.0 0.0 0.0 setrgbcolor")?;
    for row in 0..canvas.size() {
        for col in 0..canvas.size() {
            if canvas.at(row, col).dark {
                writeln!(writer, "{} {} 1 1 rectfill", col, side - 1 - row as i64)?;
            }
        }
    }

    writeln!(writer, "%%EOF")?;
    Ok(())
}
