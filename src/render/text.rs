//! Terminal renderer: dark modules as '#', light and quiet zone as spaces.

use std::io::{self, Write};

use crate::models::Canvas;
use crate::render::RenderOptions;

/// Write the symbol as lines of '#' and spaces
pub fn write_text<W: Write>(
    writer: &mut W,
    canvas: &Canvas,
    options: &RenderOptions,
) -> io::Result<()> {
    let size = options.scaled_size(canvas);
    for row in 0..size {
        let r = options.module_at(row);
        for col in 0..size {
            let c = options.module_at(col);
            let glyph = if canvas.is_inside(r, c) && canvas.at(r as usize, c as usize).dark {
                b'#'
            } else {
                b' '
            };
            writer.write_all(&[glyph])?;
        }
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PatternKind, Version};

    #[test]
    fn test_single_dark_module_scaled() {
        let mut canvas = Canvas::new(Version::new(1).unwrap());
        canvas.set(0, 0, PatternKind::Data, true);
        let options = RenderOptions {
            scale: 2,
            indent: 1,
        };

        let mut out = Vec::new();
        write_text(&mut out, &canvas, &options).unwrap();
        let lines: Vec<&str> = std::str::from_utf8(&out).unwrap().lines().collect();

        let size = options.scaled_size(&canvas);
        assert_eq!(lines.len(), size);
        assert!(lines.iter().all(|l| l.len() == size));
        // Quiet zone rows stay blank; the module occupies a 2x2 block after
        // one indent module
        assert!(lines[0].chars().all(|c| c == ' '));
        assert_eq!(&lines[2][2..4], "##");
        assert_eq!(&lines[3][2..4], "##");
        assert_eq!(&lines[4][2..4], "  ");
    }
}
