//! Channel isolation and removal.

use crate::error::RasterError;
use crate::raster::{Channel, ColorRaster};

/// Keep only `channel`; the other two planes are zero everywhere.
///
/// # Errors
///
/// `AllocationFailure` if the output cannot be allocated.
pub fn isolate_channel(image: &ColorRaster, channel: Channel) -> Result<ColorRaster, RasterError> {
    copy_channels(image, |c| c == channel)
}

/// Zero `channel` and keep the other two planes unchanged.
///
/// # Errors
///
/// `AllocationFailure` if the output cannot be allocated.
pub fn remove_channel(image: &ColorRaster, channel: Channel) -> Result<ColorRaster, RasterError> {
    copy_channels(image, |c| c != channel)
}

/// Copy the planes for which `keep` holds into a zeroed raster of the same shape.
fn copy_channels(
    image: &ColorRaster,
    keep: impl Fn(Channel) -> bool,
) -> Result<ColorRaster, RasterError> {
    let mut output = ColorRaster::new(image.width(), image.height(), image.max_value() as u32)?;

    for channel in Channel::ALL.into_iter().filter(|&c| keep(c)) {
        let src = image.plane(channel);
        let dst = output.plane_mut(channel);
        for y in 0..image.height() {
            dst.row_mut(y).copy_from_slice(src.row(y));
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> ColorRaster {
        let mut image = ColorRaster::new(width, height, 255).unwrap();
        for y in 0..height {
            for x in 0..width {
                let v = (y * width + x) % 256;
                image.set_pixel(x, y, [v, 255 - v, (v * 7) % 256]);
            }
        }
        image
    }

    #[test]
    fn test_isolate_each_channel() {
        let image = gradient(6, 4);
        for channel in Channel::ALL {
            let result = isolate_channel(&image, channel).unwrap();
            assert_eq!(result.max_value(), 255);
            for other in Channel::ALL {
                if other == channel {
                    assert_eq!(result.plane(other), image.plane(other));
                } else {
                    assert!(result.plane(other).is_zero());
                }
            }
        }
    }

    #[test]
    fn test_isolate_is_idempotent() {
        let image = gradient(5, 5);
        let once = isolate_channel(&image, Channel::Red).unwrap();
        let twice = isolate_channel(&once, Channel::Red).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_channel() {
        let image = gradient(3, 3);
        let result = remove_channel(&image, Channel::Green).unwrap();
        assert_eq!(result.plane(Channel::Red), image.plane(Channel::Red));
        assert!(result.plane(Channel::Green).is_zero());
        assert_eq!(result.plane(Channel::Blue), image.plane(Channel::Blue));
    }

    #[test]
    fn test_input_untouched() {
        let image = gradient(4, 2);
        let before = image.clone();
        let _ = isolate_channel(&image, Channel::Blue).unwrap();
        let _ = remove_channel(&image, Channel::Blue).unwrap();
        assert_eq!(image, before);
    }
}
