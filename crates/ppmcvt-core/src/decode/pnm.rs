//! PNM decoding via the `image` crate.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use image::codecs::pnm::PnmDecoder;
use image::DynamicImage;
use thiserror::Error;

use crate::error::RasterError;
use crate::raster::ColorRaster;

/// Errors that can occur while decoding an input image.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a valid or supported image.
    #[error("Invalid or unsupported image: {0}")]
    InvalidFormat(#[from] image::ImageError),

    /// The decoded samples could not be placed into a raster.
    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Decode a Netpbm image from bytes.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a valid image,
/// or `DecodeError::Raster` if the raster cannot be allocated.
pub fn decode_color(bytes: &[u8]) -> Result<ColorRaster, DecodeError> {
    decode_pnm(PnmDecoder::new(Cursor::new(bytes))?)
}

/// Read and decode a Netpbm image from `path`.
pub fn read_color(path: impl AsRef<Path>) -> Result<ColorRaster, DecodeError> {
    let file = BufReader::new(File::open(path)?);
    decode_pnm(PnmDecoder::new(file)?)
}

fn decode_pnm<R: Read>(decoder: PnmDecoder<R>) -> Result<ColorRaster, DecodeError> {
    let max = decoder.header().maximal_sample();
    let img = DynamicImage::from_decoder(decoder)?;
    let (width, height) = (img.width(), img.height());

    let planes = if is_wide(&img) {
        let restore = |v: u16| restore_sample(v, max, 65535);
        deinterleave(img.into_rgb16().as_raw(), restore)
    } else {
        let restore = |v: u8| restore_sample(u16::from(v), max, 255);
        deinterleave(img.into_rgb8().as_raw(), restore)
    };

    Ok(ColorRaster::from_planes(width, height, max, planes)?)
}

fn is_wide(img: &DynamicImage) -> bool {
    let color = img.color();
    color.bytes_per_pixel() / color.channel_count() > 1
}

/// Undo the codec's stretch of `0..=max` onto `0..=full`.
///
/// The codec maps `v` to `round(v * full / max)` in `f32`. That map is
/// injective for `max <= full`, so the nearest preimage is exact; the
/// neighbors are checked to absorb `f32` rounding at ties.
fn restore_sample(sample: u16, max: u32, full: u32) -> u16 {
    if max == full {
        return sample;
    }
    let sample = u32::from(sample);
    let factor = full as f32 / max as f32;
    let stretch = |v: u32| (v as f32 * factor).round() as u32;

    let guess = ((sample * max + full / 2) / full).min(max);
    let restored = [guess, guess.saturating_sub(1), guess + 1]
        .into_iter()
        .filter(|&v| v <= max)
        .find(|&v| stretch(v) == sample)
        .unwrap_or(guess);
    restored as u16
}

/// Split interleaved RGB samples into three planes.
fn deinterleave<T: Copy>(samples: &[T], sample: impl Fn(T) -> u16) -> [Vec<u16>; 3] {
    let len = samples.len() / 3;
    let mut planes = [
        Vec::with_capacity(len),
        Vec::with_capacity(len),
        Vec::with_capacity(len),
    ];
    for rgb in samples.chunks_exact(3) {
        for (plane, &value) in planes.iter_mut().zip(rgb) {
            plane.push(sample(value));
        }
    }
    planes
}
