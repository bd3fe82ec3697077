//! PNG renderer backed by the `image` crate: grayscale, dark = 0, light = 255.

use image::{ImageBuffer, Luma};

use crate::error::EncodeError;
use crate::models::Canvas;
use crate::render::RenderOptions;

/// Build the grayscale pixel buffer for `canvas`
pub fn to_image(canvas: &Canvas, options: &RenderOptions) -> ImageBuffer<Luma<u8>, Vec<u8>> {
    let size = options.scaled_size(canvas) as u32;
    ImageBuffer::from_fn(size, size, |x, y| {
        let r = options.module_at(y as usize);
        let c = options.module_at(x as usize);
        if canvas.is_inside(r, c) && canvas.at(r as usize, c as usize).dark {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    })
}

/// Render `canvas` into a PNG file at `path`
pub fn save_png(canvas: &Canvas, path: &str, options: &RenderOptions) -> Result<(), EncodeError> {
    let image = to_image(canvas, options);
    image.save(path)?;
    Ok(())
}
