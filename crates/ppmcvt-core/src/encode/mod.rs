//! Netpbm encoding of transform output.
//!
//! This module is the collaborator that serializes rasters back to bytes:
//! - [`ColorRaster`](crate::raster::ColorRaster) as binary PPM (P6)
//! - [`GrayRaster`](crate::raster::GrayRaster) as binary PGM (P5)
//! - [`BitRaster`](crate::raster::BitRaster) as binary PBM (P4), 1 = black
//!
//! # Sample depth
//!
//! Samples are written unchanged under a header carrying the raster's own
//! max. A max up to 255 uses one byte per sample; larger maxes use two
//! bytes, big-endian.

mod pnm;

pub use pnm::{
    encode_bit, encode_color, encode_gray, encode_output, write_output, EncodeError,
};
