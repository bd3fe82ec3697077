//! SVG 1.1 renderer: one path of unit squares for the dark modules.

use std::io::{self, Write};

use crate::models::Canvas;
use crate::render::RenderOptions;

/// Write the symbol as an SVG document with one square per dark module
pub fn write_svg<W: Write>(
    writer: &mut W,
    canvas: &Canvas,
    options: &RenderOptions,
) -> io::Result<()> {
    let modules = canvas.size() + 2 * options.indent as usize;
    let pixels = modules * options.scale as usize;

    writeln!(writer, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        writer,
        "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \
         \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">"
    )?;
    writeln!(
        writer,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" \
         width=\"{pixels}\" height=\"{pixels}\" \
         viewBox=\"0 0 {modules} {modules}\" stroke=\"none\">"
    )?;
    writeln!(writer, "<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>")?;

    write!(writer, "<path d=\"")?;
    let indent = options.indent as usize;
    let mut first = true;
    for row in 0..canvas.size() {
        for col in 0..canvas.size() {
            if !canvas.at(row, col).dark {
                continue;
            }
            if !first {
                write!(writer, " ")?;
            }
            first = false;
            write!(writer, "M{},{}h1v1h-1z", col + indent, row + indent)?;
        }
    }
    writeln!(writer, "\" fill=\"#000000\"/>")?;
    writeln!(writer, "</svg>")?;
    Ok(())
}
