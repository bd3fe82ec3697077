//! PPM (P1, plain two-value) renderer.

use std::io::{self, Write};

use crate::models::Canvas;
use crate::render::RenderOptions;

/// Write the symbol as a plain PPM bitmap, dark modules as '1'
pub fn write_ppm<W: Write>(
    writer: &mut W,
    canvas: &Canvas,
    options: &RenderOptions,
) -> io::Result<()> {
    let size = options.scaled_size(canvas);
    writeln!(writer, "P1")?;
    writeln!(writer, "{} {}", size, size)?;

    for row in 0..size {
        let r = options.module_at(row);
        for col in 0..size {
            let c = options.module_at(col);
            let digit = if canvas.is_inside(r, c) && canvas.at(r as usize, c as usize).dark {
                b'1'
            } else {
                b'0'
            };
            writer.write_all(&[digit])?;
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
    fn test_header_and_body_shape() {
        let mut canvas = Canvas::new(Version::new(1).unwrap());
        canvas.set(10, 10, PatternKind::Data, true);
        let options = RenderOptions {
            scale: 1,
            indent: 4,
        };

        let mut out = Vec::new();
        write_ppm(&mut out, &canvas, &options).unwrap();
        let text = std::str::from_utf8(&out).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("P1"));
        assert_eq!(lines.next(), Some("29 29"));
        let body: Vec<&str> = lines.collect();
        assert_eq!(body.len(), 29);
        assert!(body.iter().all(|l| l.len() == 29));
        // The dark module lands at indent + 10
        assert_eq!(&body[14][14..15], "1");
        // Quiet zone is light
        assert!(body[0].chars().all(|c| c == '0'));
    }
}
