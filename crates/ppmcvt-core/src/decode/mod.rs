//! Netpbm decoding into color rasters.
//!
//! The transform engine only sees in-memory rasters. This module is the
//! collaborator that turns PPM/PGM/PBM bytes into a [`ColorRaster`](crate::raster::ColorRaster),
//! using the `image` crate's PNM codec for header and sample parsing.
//!
//! # Sample depth
//!
//! The raster keeps the file's maxval. The codec stretches samples onto 8 or
//! 16 bits; that stretch is undone so every sample matches the file. Grayscale
//! and bitmap inputs are widened to three equal channels.

mod pnm;

pub use pnm::{decode_color, read_color, DecodeError};
