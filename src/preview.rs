//! Best-effort PNG preview of the packed result.
//!
//! Expands packed indices back to 8-bit gray through the palette, bounds
//! the longest side to 2048 pixels with nearest-neighbor sampling (high-dpi
//! pages are far too large for a browser canvas), and encodes a grayscale
//! PNG. Purely for inspection: the pipeline swallows failures here and the
//! primary encode still returns.

use thiserror::Error;

use crate::container::Palette;
use crate::pack::PackedImage;

/// Longest preview edge in pixels.
pub const MAX_PREVIEW_EDGE: u32 = 2048;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Render a grayscale PNG rendition of the packed image.
pub fn render(packed: &PackedImage, palette: &Palette) -> Result<Vec<u8>, PreviewError> {
    let (out_w, out_h) = preview_dimensions(packed.width(), packed.height());

    let mut gray = Vec::with_capacity(out_w as usize * out_h as usize);
    for y in 0..out_h {
        let src_y = y as u64 * packed.height() as u64 / out_h as u64;
        for x in 0..out_w {
            let src_x = x as u64 * packed.width() as u64 / out_w as u64;
            let index = packed.index_at(src_x as u32, src_y as u32);
            gray.push(palette.level(index as usize));
        }
    }

    let mut bytes = Vec::new();
    let mut encoder = png::Encoder::new(&mut bytes, out_w, out_h);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&gray)?;
    writer.finish()?;
    Ok(bytes)
}

/// Output dimensions: unchanged when within bounds, otherwise scaled so the
/// longest side is exactly [`MAX_PREVIEW_EDGE`], never below 1 pixel.
fn preview_dimensions(width: u32, height: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= MAX_PREVIEW_EDGE {
        return (width, height);
    }
    let scale = |edge: u32| ((edge as u64 * MAX_PREVIEW_EDGE as u64 / longest as u64) as u32).max(1);
    (scale(width), scale(height))
}
