//! Sepia tone mapping.

use crate::error::RasterError;
use crate::raster::{Channel, ColorRaster};

/// Rows produce red, green and blue; columns weight the source red, green and blue.
pub const SEPIA_MATRIX: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Map a single `[r, g, b]` sample triple through the sepia matrix.
///
/// Each output is clamped to `[0, max]` and then rounded half up.
#[inline]
pub fn sepia_pixel(rgb: [u16; 3], max: u16) -> [u16; 3] {
    let [r, g, b] = rgb.map(f32::from);
    let max = max as f32;
    SEPIA_MATRIX.map(|[wr, wg, wb]| {
        let v = (wr * r + wg * g + wb * b).clamp(0.0, max);
        (v + 0.5) as u16
    })
}

/// Apply the sepia matrix to every pixel.
///
/// # Errors
///
/// `AllocationFailure` if the output cannot be allocated.
pub fn apply_sepia(image: &ColorRaster) -> Result<ColorRaster, RasterError> {
    let max = image.max_value();
    let mut output = ColorRaster::new(image.width(), image.height(), max as u32)?;

    for y in 0..image.height() {
        for x in 0..image.width() {
            let [r, g, b] = sepia_pixel(image.pixel(x, y), max);
            output.set_pixel(x, y, [r as u32, g as u32, b as u32]);
        }
    }

    Ok(output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
