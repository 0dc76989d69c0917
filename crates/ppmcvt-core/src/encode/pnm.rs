//! PNM encoding via the `image` crate.

use std::io::Write;
use std::path::Path;

use image::codecs::pnm::{
    BitmapHeader, GraymapHeader, PixmapHeader, PnmEncoder, PnmHeader, SampleEncoding,
};
use image::{ExtendedColorType, ImageError};
use thiserror::Error;

use crate::raster::{BitRaster, Channel, ColorRaster, GrayRaster};
use crate::select::Output;

/// Errors that can occur while encoding an output raster.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNM encoding failed
    #[error("PNM encoding failed: {0}")]
    EncodingFailed(String),

    /// The output file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn check_dimensions(width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    Ok(())
}

fn codec_error(e: ImageError) -> EncodeError {
    EncodeError::EncodingFailed(e.to_string())
}

/// Encode 8-bit samples under a fixed header.
fn encode_narrow(
    header: PnmHeader,
    samples: &[u8],
    width: u32,
    height: u32,
    color: ExtendedColorType,
) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Vec::new();
    PnmEncoder::new(&mut buffer)
        .with_header(header)
        .encode(samples, width, height, color)
        .map_err(codec_error)?;
    Ok(buffer)
}

/// Encode a color raster as binary PPM with the raster's own maxval.
///
/// # Errors
///
/// `InvalidDimensions` for a degenerate raster, `EncodingFailed` if the
/// codec rejects the data.
pub fn encode_color(raster: &ColorRaster) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (raster.width(), raster.height());
    check_dimensions(width, height)?;

    let max = raster.max_value();
    let header = PnmHeader::from(PixmapHeader {
        encoding: SampleEncoding::Binary,
        height,
        width,
        maxval: u32::from(max),
    });
    let samples = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| Channel::ALL.map(|c| raster.get(c, x, y)));

    if max <= 255 {
        let raw: Vec<u8> = samples.map(|v| v as u8).collect();
        return encode_narrow(header, &raw, width, height, ExtendedColorType::Rgb8);
    }

    // The codec's pixmap path is 8-bit only; deeper samples go big-endian
    // after its header.
    let mut buffer = Vec::new();
    header.write(&mut buffer)?;
    for v in samples {
        buffer.write_all(&v.to_be_bytes())?;
    }
    Ok(buffer)
}

/// Encode a grayscale raster as binary PGM with the raster's own maxval.
pub fn encode_gray(raster: &GrayRaster) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (raster.width(), raster.height());
    check_dimensions(width, height)?;

    let max = raster.max_value();
    let header = PnmHeader::from(GraymapHeader {
        encoding: SampleEncoding::Binary,
        height,
        width,
        maxwhite: u32::from(max),
    });
    let samples = raster.plane().as_slice();

    if max <= 255 {
        let raw: Vec<u8> = samples.iter().map(|&v| v as u8).collect();
        return encode_narrow(header, &raw, width, height, ExtendedColorType::L8);
    }

    let mut buffer = Vec::new();
    PnmEncoder::new(&mut buffer)
        .with_header(header)
        .encode(samples, width, height, ExtendedColorType::L16)
        .map_err(codec_error)?;
    Ok(buffer)
}

/// Encode a bit raster as binary PBM.
///
/// The codec writes luma 0 as black, so set bits become 0 and clear bits 1.
pub fn encode_bit(raster: &BitRaster) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (raster.width(), raster.height());
    check_dimensions(width, height)?;

    let header = PnmHeader::from(BitmapHeader {
        encoding: SampleEncoding::Binary,
        height,
        width,
    });
    let raw: Vec<u8> = raster
        .plane()
        .as_slice()
        .iter()
        .map(|&bit| u8::from(bit == 0))
        .collect();

    encode_narrow(header, &raw, width, height, ExtendedColorType::L8)
}

/// Encode whichever raster kind a transform produced.
pub fn encode_output(output: &Output) -> Result<Vec<u8>, EncodeError> {
    match output {
        Output::Color(raster) => encode_color(raster),
        Output::Gray(raster) => encode_gray(raster),
        Output::Bit(raster) => encode_bit(raster),
    }
}

/// Encode `output` and write it to `path`.
pub fn write_output(output: &Output, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    let bytes = encode_output(output)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_color_ppm() {
        let mut raster = ColorRaster::new(1, 1, 255).unwrap();
        raster.set_pixel(0, 0, [1, 2, 3]);
        let bytes = encode_color(&raster).unwrap();
        assert!(bytes.starts_with(b"P6"));
        assert!(bytes.ends_with(&[1, 2, 3]));
    }

    #[test]
    fn test_encode_color_sixteen_bit() {
        let mut raster = ColorRaster::new(1, 1, 1000).unwrap();
        raster.set_pixel(0, 0, [1000, 0, 999]);
        let bytes = encode_color(&raster).unwrap();
        assert!(bytes.starts_with(b"P6\n1 1 1000\n"));
        assert!(bytes.ends_with(&[0x03, 0xE8, 0x00, 0x00, 0x03, 0xE7]));
    }

    #[test]
    fn test_encode_color_keeps_maxval() {
        let mut raster = ColorRaster::new(1, 1, 101).unwrap();
        raster.set_pixel(0, 0, [50, 0, 101]);
        let bytes = encode_color(&raster).unwrap();
        assert!(bytes.starts_with(b"P6\n1 1 101\n"));
        assert!(bytes.ends_with(&[50, 0, 101]));
    }

    #[test]
    fn test_encode_gray_keeps_maxval() {
        let mut raster = GrayRaster::new(2, 1, 15).unwrap();
        raster.set(0, 0, 5);
        raster.set(1, 0, 15);
        let bytes = encode_gray(&raster).unwrap();
        assert!(bytes.starts_with(b"P5\n2 1 15\n"));
        assert!(bytes.ends_with(&[5, 15]));
    }

    #[test]
    fn test_grayscale_output_written_at_requested_max() {
        let mut color = ColorRaster::new(1, 1, 255).unwrap();
        color.set_pixel(0, 0, [85, 85, 85]);
        let output = crate::Transform::grayscale(15).unwrap().apply(&color).unwrap();
        let bytes = encode_output(&output).unwrap();
        // (85 / 255) * 15 = 5, not rescaled back up to 85
        assert!(bytes.starts_with(b"P5\n1 1 15\n"));
        assert_eq!(bytes.last(), Some(&5));
    }

    #[test]
    fn test_encode_gray_sixteen_bit() {
        let mut raster = GrayRaster::new(2, 1, 4095).unwrap();
        raster.set(0, 0, 4095);
        raster.set(1, 0, 256);
        let bytes = encode_gray(&raster).unwrap();
        assert!(bytes.starts_with(b"P5\n2 1 4095\n"));
        assert!(bytes.ends_with(&[0x0F, 0xFF, 0x01, 0x00]));
    }

    #[test]
    fn test_encode_bit_pbm() {
        let mut raster = BitRaster::new(8, 1).unwrap();
        raster.set(0, 0, true);
        raster.set(7, 0, true);
        let bytes = encode_bit(&raster).unwrap();
        assert!(bytes.starts_with(b"P4"));
        assert_eq!(bytes.last(), Some(&0b1000_0001));
    }

    #[test]
    fn test_encode_rejects_degenerate() {
        let raster = ColorRaster::new(0, 4, 255).unwrap();
        assert!(matches!(
            encode_color(&raster),
            Err(EncodeError::InvalidDimensions { width: 0, height: 4 })
        ));
        let bits = BitRaster::new(3, 0).unwrap();
        assert!(matches!(
            encode_output(&Output::Bit(bits)),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encoded_color_decodes_back() {
        let mut raster = ColorRaster::new(3, 2, 255).unwrap();
        for y in 0..2 {
            for x in 0..3 {
                raster.set_pixel(x, y, [x * 40, y * 90, 200]);
            }
        }
        let bytes = encode_color(&raster).unwrap();
        let decoded = crate::decode::decode_color(&bytes).unwrap();
        assert_eq!(decoded, raster);
    }

    #[test]
    fn test_odd_maxval_survives_decode() {
        let mut raster = ColorRaster::new(2, 2, 101).unwrap();
        raster.set_pixel(0, 0, [0, 50, 101]);
        raster.set_pixel(1, 1, [37, 38, 39]);
        let decoded = crate::decode::decode_color(&encode_color(&raster).unwrap()).unwrap();
        assert_eq!(decoded, raster);
    }
}
