//! ppmcvt Core - Raster transformation library
//!
//! This crate provides the core of the `ppmcvt` converter: an in-memory
//! raster model for full-color, grayscale and bitonal images, and the
//! transforms that turn one raster into another.
//!
//! # Module Structure
//!
//! - `raster` - raster types, allocation and release
//! - `transform` - bitmap/grayscale reduction, channel isolation, sepia,
//!   mirror, thumbnail and tile mosaic
//! - `select` - one-transform-per-invocation selection and dispatch
//! - `decode` / `encode` - Netpbm collaborators built on the `image` crate
//!
//! # Example
//!
//! ```ignore
//! use ppmcvt_core::{decode, encode, Transform};
//!
//! let input = decode::read_color("photo.ppm")?;
//! let output = Transform::thumbnail(4)?.apply(&input)?;
//! encode::write_output(&output, "thumb.ppm")?;
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod raster;
pub mod select;
pub mod transform;

pub use error::{ParamError, RasterError};
pub use raster::{BitRaster, Channel, ColorRaster, GrayRaster, Raster};
pub use select::{Output, OutputKind, Transform, TransformBuilder};
pub use transform::{
    apply_sepia, isolate_channel, mirror_horizontal, remove_channel, thumbnail, tile_thumbnails,
    to_bitmap, to_grayscale, GrayMax, Scale,
};
