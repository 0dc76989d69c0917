//! Horizontal mirroring.

use crate::error::RasterError;
use crate::raster::{Channel, ColorRaster};

/// Mirror every row left to right.
///
/// Column `x` of the output holds column `width - 1 - x` of the input, for
/// every channel. With an odd width the center column maps to itself.
/// Mirroring twice reproduces the input.
///
/// # Errors
///
/// `AllocationFailure` if the output cannot be allocated.
pub fn mirror_horizontal(image: &ColorRaster) -> Result<ColorRaster, RasterError> {
    let mut output = ColorRaster::new(image.width(), image.height(), image.max_value() as u32)?;
    let width = image.width() as usize;

    for channel in Channel::ALL {
        let src = image.plane(channel);
        let dst = output.plane_mut(channel);
        for y in 0..image.height() {
            let src_row = src.row(y);
            let dst_row = dst.row_mut(y);
            for x in 0..width / 2 {
                let mirror_x = width - 1 - x;
                let (left, right) = (src_row[x], src_row[mirror_x]);
                dst_row[x] = right;
                dst_row[mirror_x] = left;
            }
            if width % 2 == 1 {
                let mid = width / 2;
                dst_row[mid] = src_row[mid];
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> ColorRaster {
        let mut image = ColorRaster::new(width, height, 1000).unwrap();
        for y in 0..height {
            for x in 0..width {
                let v = y * width + x;
                image.set_pixel(x, y, [v, v + 100, v + 200]);
            }
        }
        image
    }

    #[test]
    fn test_mirror_even_width() {
        let image = numbered(4, 1);
        let result = mirror_horizontal(&image).unwrap();
        assert_eq!(result.plane(Channel::Red).row(0), &[3, 2, 1, 0]);
        assert_eq!(result.plane(Channel::Blue).row(0), &[203, 202, 201, 200]);
    }

    #[test]
    fn test_mirror_odd_width_keeps_center() {
        let image = numbered(5, 2);
        let result = mirror_horizontal(&image).unwrap();
        assert_eq!(result.plane(Channel::Green).row(1), &[109, 108, 107, 106, 105]);
        assert_eq!(result.pixel(2, 0), image.pixel(2, 0));
    }

    #[test]
    fn test_mirror_single_pixel() {
        let image = numbered(1, 1);
        assert_eq!(mirror_horizontal(&image).unwrap(), image);
    }

    #[test]
    fn test_mirror_involution_7x5() {
        let image = numbered(7, 5);
        let twice = mirror_horizontal(&mirror_horizontal(&image).unwrap()).unwrap();
        assert_eq!(twice, image);
    }

    #[test]
    fn test_mirror_degenerate() {
        let image = ColorRaster::new(0, 3, 255).unwrap();
        let result = mirror_horizontal(&image).unwrap();
        assert_eq!(result.width(), 0);
        assert_eq!(result.height(), 3);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn raster_strategy() -> impl Strategy<Value = ColorRaster> {
        (1u32..=24, 1u32..=24, 1u32..=65535).prop_flat_map(|(width, height, max)| {
            let len = (width * height) as usize;
            let pixels = prop::collection::vec(prop::array::uniform3(0u16..=65535), len);
            pixels.prop_map(move |samples| {
                let mut image = ColorRaster::new(width, height, max).unwrap();
                for (i, rgb) in samples.iter().enumerate() {
                    let (x, y) = (i as u32 % width, i as u32 / width);
                    image.set_pixel(x, y, rgb.map(u32::from));
                }
                image
            })
        })
    }

    proptest! {
        /// Property: mirroring twice is the identity for every width parity.
        #[test]
        fn prop_mirror_involution(image in raster_strategy()) {
            let once = mirror_horizontal(&image).unwrap();
            let twice = mirror_horizontal(&once).unwrap();
            prop_assert_eq!(twice, image);
        }

        /// Property: every output sample comes from the reflected column.
        #[test]
        fn prop_mirror_reflects_columns(image in raster_strategy()) {
            let result = mirror_horizontal(&image).unwrap();
            let width = image.width();
            for y in 0..image.height() {
                for x in 0..width {
                    prop_assert_eq!(result.pixel(x, y), image.pixel(width - 1 - x, y));
                }
            }
        }
    }
}
