//! Canvas renderers.
//!
//! Renderers only read the finished [`Canvas`] through its public matrix
//! interface. The output format is selected by file extension, or `console`
//! for the terminal renderer.

pub mod eps;
pub mod png;
pub mod ppm;
pub mod svg;
pub mod text;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::EncodeError;
use crate::models::Canvas;

/// Scale and quiet-zone settings shared by all renderers
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Output pixels (or characters) per module, >= 1
    pub scale: u32,
    /// Light quiet-zone width in modules, added on all four sides
    pub indent: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            indent: 4,
        }
    }
}

impl RenderOptions {
    /// Rendered side length: modules plus the quiet zone, scaled
    pub fn scaled_size(&self, canvas: &Canvas) -> usize {
        (canvas.size() + 2 * self.indent as usize) * self.scale as usize
    }

    /// Map an output coordinate back to a module coordinate
    pub(crate) fn module_at(&self, pixel: usize) -> i32 {
        (pixel / self.scale as usize) as i32 - self.indent as i32
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Terminal text via stdout
    Console,
    /// Plain two-value PPM (P1)
    Ppm,
    /// SVG 1.1 single-path vector
    Svg,
    /// Encapsulated PostScript 3.0
    Eps,
    /// Grayscale PNG via the `image` crate
    Png,
}

impl OutputFormat {
    /// Select the format for an `--output` argument: the literal `console`
    /// or a path with a known extension.
    pub fn from_target(target: &str) -> Result<Self, EncodeError> {
        if target == "console" {
            return Ok(OutputFormat::Console);
        }
        let extension = Path::new(target)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("ppm") => Ok(OutputFormat::Ppm),
            Some("svg") => Ok(OutputFormat::Svg),
            Some("eps") => Ok(OutputFormat::Eps),
            Some("png") => Ok(OutputFormat::Png),
            _ => Err(EncodeError::InvalidArgument(format!(
                "cannot infer output format from {:?} (expected console or a \
                 .ppm/.svg/.eps/.png path)",
                target
            ))),
        }
    }
}

/// Render `canvas` to `target` (a path or `console`)
pub fn render(canvas: &Canvas, target: &str, options: &RenderOptions) -> Result<(), EncodeError> {
    match OutputFormat::from_target(target)? {
        OutputFormat::Console => {
            let stdout = io::stdout();
            text::write_text(&mut stdout.lock(), canvas, options)?;
        }
        OutputFormat::Ppm => write_file(target, |w| ppm::write_ppm(w, canvas, options))?,
        OutputFormat::Svg => write_file(target, |w| svg::write_svg(w, canvas, options))?,
        OutputFormat::Eps => write_file(target, |w| eps::write_eps(w, canvas, options))?,
        OutputFormat::Png => png::save_png(canvas, target, options)?,
    }
    Ok(())
}

fn write_file(
    path: &str,
    write: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<(), EncodeError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer)?;
    writer.flush()?;
    Ok(())
}
