//! Transform engine: pure raster-to-raster operations.
//!
//! Every transform borrows a [`ColorRaster`](crate::raster::ColorRaster),
//! validates its parameters before allocating anything, and returns a newly
//! allocated output raster. Inputs are never modified.
//!
//! # Operations
//!
//! - [`to_bitmap`] - integer threshold reduction to a bit raster
//! - [`to_grayscale`] - channel mean rescaled to a new max
//! - [`isolate_channel`] / [`remove_channel`] - keep or drop one channel
//! - [`apply_sepia`] - fixed 3x3 color matrix
//! - [`mirror_horizontal`] - left/right reflection
//! - [`thumbnail`] - nearest-neighbor downsampling by 1 to 8
//! - [`tile_thumbnails`] - `S x S` mosaic of the scale `S` thumbnail
//!
//! # Traversal
//!
//! All loops run row-major (height outer, width inner). No output pixel
//! depends on another output pixel.

mod channel;
mod mirror;
mod params;
mod reduce;
mod sepia;
mod thumbnail;

pub use channel::{isolate_channel, remove_channel};
pub use mirror::mirror_horizontal;
pub use params::{GrayMax, Scale};
pub use reduce::{to_bitmap, to_grayscale};
pub use sepia::{apply_sepia, sepia_pixel, SEPIA_MATRIX};
pub use thumbnail::{thumbnail, tile_thumbnails};
