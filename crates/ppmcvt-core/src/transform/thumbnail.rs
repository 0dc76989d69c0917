//! Nearest-neighbor thumbnails and tiled thumbnail mosaics.
//!
//! # Geometry
//!
//! A scale `S` thumbnail of a `W x H` raster is `floor(W / S) x floor(H / S)`.
//! Output pixel `(x, y)` takes source pixel `(x * S, y * S)`; remainder rows
//! and columns of the source are dropped.
//!
//! A tile mosaic keeps the source dimensions and places `S x S` copies of the
//! thumbnail at `(tx * thumb_w, ty * thumb_h)`. Cells beyond the raster bounds
//! are skipped and the uncovered right/bottom border stays zero.

use super::params::Scale;
use crate::error::RasterError;
use crate::raster::{Channel, ColorRaster};

/// Downsample by an integer factor using nearest-neighbor sampling.
///
/// # Errors
///
/// - `InvalidParameter` if `scale` is outside 1..=8 (checked first)
/// - `AllocationFailure` if the output cannot be allocated
pub fn thumbnail(image: &ColorRaster, scale: u32) -> Result<ColorRaster, RasterError> {
    let scale = Scale::new(scale)?.get();
    let thumb_w = image.width() / scale;
    let thumb_h = image.height() / scale;
    let mut output = ColorRaster::new(thumb_w, thumb_h, image.max_value() as u32)?;

    for channel in Channel::ALL {
        let src = image.plane(channel);
        let dst = output.plane_mut(channel);
        for y in 0..thumb_h {
            let src_row = src.row(y * scale);
            for (x, sample) in dst.row_mut(y).iter_mut().enumerate() {
                *sample = src_row[x * scale as usize];
            }
        }
    }

    Ok(output)
}

/// Tile `scale x scale` copies of the scale thumbnail over a raster of the
/// input's size.
///
/// # Errors
///
/// - `InvalidParameter` if `scale` is outside 1..=8 (checked first)
/// - `AllocationFailure` if either the thumbnail or the output cannot be allocated
pub fn tile_thumbnails(image: &ColorRaster, scale: u32) -> Result<ColorRaster, RasterError> {
    let thumb = thumbnail(image, scale)?;
    let (width, height) = (image.width(), image.height());
    let mut output = ColorRaster::new(width, height, image.max_value() as u32)?;
    let (thumb_w, thumb_h) = (thumb.width(), thumb.height());

    for channel in Channel::ALL {
        let src = thumb.plane(channel);
        let dst = output.plane_mut(channel);
        for ty in 0..scale {
            for tx in 0..scale {
                let dest_x = tx * thumb_w;
                if dest_x >= width {
                    continue;
                }
                // Clip the tile against the right edge
                let span = thumb_w.min(width - dest_x) as usize;
                for y in 0..thumb_h {
                    let dest_y = ty * thumb_h + y;
                    if dest_y >= height {
                        break;
                    }
                    let dest_x = dest_x as usize;
                    dst.row_mut(dest_y)[dest_x..dest_x + span].copy_from_slice(&src.row(y)[..span]);
                }
            }
        }
    }

    Ok(output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
