//! Error types shared by the raster store, transforms and selector.

use thiserror::Error;

/// A caller-supplied parameter outside its documented domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// Thumbnail/tile scale outside 1..=8.
    #[error("Invalid scale factor: {0}")]
    ScaleOutOfRange(u32),

    /// Grayscale target max outside 1..65536.
    #[error("Invalid max grayscale pixel value: {0}")]
    GrayMaxOutOfRange(u32),

    /// Raster max of zero (or above 65535).
    #[error("Invalid max sample value: {0}")]
    MaxValueOutOfRange(u32),

    /// Channel name other than red, green or blue.
    #[error("Invalid channel specification: {0}")]
    UnknownChannel(String),

    /// A sample buffer handed to a raster builder has the wrong length.
    #[error("Sample buffer holds {actual} samples, expected {expected}")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// A second transform was selected while one is already active.
    #[error("Multiple transformations specified: {existing} and {requested}")]
    ConflictingTransform {
        existing: &'static str,
        requested: &'static str,
    },

    /// No transform was selected at all.
    #[error("No transformation specified")]
    NoTransform,
}

/// Errors reported by raster construction and every transform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// Resource exhaustion while allocating sample planes. No output exists.
    #[error("Memory allocation failed for {planes} plane(s) of {width}x{height} samples")]
    AllocationFailure {
        width: u32,
        height: u32,
        planes: usize,
    },

    /// Parameter rejected before any allocation took place.
    #[error("{0}")]
    InvalidParameter(#[from] ParamError),
}

impl RasterError {
    /// True for the `InvalidParameter` kind.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, RasterError::InvalidParameter(_))
    }
}
