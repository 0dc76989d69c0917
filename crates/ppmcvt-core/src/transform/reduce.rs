//! Color-to-bitonal and color-to-grayscale reduction.
//!
//! Both reductions average the three channels of each pixel. The bitmap
//! reduction works purely in integers; the grayscale reduction follows the
//! single-precision float path so results match existing converters bit for
//! bit, including their truncation.

use super::params::GrayMax;
use crate::error::RasterError;
use crate::raster::{BitRaster, Channel, ColorRaster, GrayRaster};

/// Reduce a color raster to a bit raster.
///
/// Each pixel's channel average (integer division) is compared against
/// `max / 2` (integer division). An average at or above the threshold
/// becomes 1, anything below becomes 0.
///
/// # Errors
///
/// `AllocationFailure` if the output cannot be allocated.
pub fn to_bitmap(image: &ColorRaster) -> Result<BitRaster, RasterError> {
    let mut output = BitRaster::new(image.width(), image.height())?;
    let threshold = image.max_value() as u32 / 2;

    for y in 0..image.height() {
        let red = image.plane(Channel::Red).row(y);
        let green = image.plane(Channel::Green).row(y);
        let blue = image.plane(Channel::Blue).row(y);

        for x in 0..image.width() {
            let i = x as usize;
            let avg = (red[i] as u32 + green[i] as u32 + blue[i] as u32) / 3;
            output.set(x, y, avg >= threshold);
        }
    }

    Ok(output)
}

/// Reduce a color raster to a grayscale raster with max `max_gray`.
///
/// Per pixel: the channel mean as a real number, scaled by
/// `max_gray / max`, truncated toward zero and clamped to `max_gray`.
///
/// # Errors
///
/// - `InvalidParameter` if `max_gray` is outside 1..65536 (checked first)
/// - `AllocationFailure` if the output cannot be allocated
pub fn to_grayscale(image: &ColorRaster, max_gray: u32) -> Result<GrayRaster, RasterError> {
    let max_gray = GrayMax::new(max_gray)?.get();
    let mut output = GrayRaster::new(image.width(), image.height(), max_gray)?;
    let max = image.max_value() as f32;
    let target = max_gray as f32;

    for y in 0..image.height() {
        let red = image.plane(Channel::Red).row(y);
        let green = image.plane(Channel::Green).row(y);
        let blue = image.plane(Channel::Blue).row(y);

        for x in 0..image.width() {
            let i = x as usize;
            let sum = red[i] as u32 + green[i] as u32 + blue[i] as u32;
            let avg = sum as f32 / 3.0;
            // Float overshoot can land just above the target; clamp the top only.
            let gray = ((avg / max) * target) as u32;
            output.set(x, y, gray.min(max_gray));
        }
    }

    Ok(output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
