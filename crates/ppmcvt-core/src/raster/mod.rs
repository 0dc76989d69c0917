//! Raster store: the in-memory image data model.
//!
//! This module provides:
//! - [`ColorRaster`] with three independent planes (red, green, blue)
//! - [`GrayRaster`] with a single plane and its own max value
//! - [`BitRaster`] with a single plane restricted to 0 and 1
//!
//! # Allocation
//!
//! Every plane is one contiguous buffer of `width * height` samples.
//! Construction either allocates every plane or returns
//! [`RasterError::AllocationFailure`](crate::RasterError::AllocationFailure)
//! with nothing left allocated. Dropping a raster (or passing it to one of the
//! `release_*` functions) frees all of its planes.
//!
//! # Ownership
//!
//! The caller that creates a raster owns it. Transforms borrow their input
//! and return a fresh raster; they never consume or modify the input.

mod plane;
mod types;

pub use plane::Plane;
pub use types::{BitRaster, Channel, ColorRaster, GrayRaster, MAX_SAMPLE_VALUE};

use crate::error::RasterError;

/// Dimensions and sample range common to every raster kind.
pub trait Raster {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Largest sample value the raster may hold.
    fn max_value(&self) -> u16;

    /// Number of pixels (`width * height`).
    fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// True for a degenerate raster with no pixels.
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

macro_rules! impl_raster {
    ($($ty:ty),*) => {
        $(
            impl Raster for $ty {
                fn width(&self) -> u32 {
                    <$ty>::width(self)
                }

                fn height(&self) -> u32 {
                    <$ty>::height(self)
                }

                fn max_value(&self) -> u16 {
                    <$ty>::max_value(self)
                }
            }
        )*
    };
}

impl_raster!(ColorRaster, GrayRaster, BitRaster);

/// Allocate a zero-filled color raster. See [`ColorRaster::new`].
pub fn create_color(width: u32, height: u32, max: u32) -> Result<ColorRaster, RasterError> {
    ColorRaster::new(width, height, max)
}

/// Allocate a zero-filled grayscale raster. See [`GrayRaster::new`].
pub fn create_gray(width: u32, height: u32, max: u32) -> Result<GrayRaster, RasterError> {
    GrayRaster::new(width, height, max)
}

/// Allocate an all-zero bit raster. See [`BitRaster::new`].
pub fn create_bit(width: u32, height: u32) -> Result<BitRaster, RasterError> {
    BitRaster::new(width, height)
}

/// Release a raster and every plane it owns. `None` is a no-op.
pub fn release<R: Raster>(raster: Option<R>) {
    drop(raster);
}

/// Release a color raster. `None` is a no-op.
pub fn release_color(raster: Option<ColorRaster>) {
    release(raster);
}

/// Release a grayscale raster. `None` is a no-op.
pub fn release_gray(raster: Option<GrayRaster>) {
    release(raster);
}

/// Release a bit raster. `None` is a no-op.
pub fn release_bit(raster: Option<BitRaster>) {
    release(raster);
}
