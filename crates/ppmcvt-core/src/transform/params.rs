//! Validated transform parameters.
//!
//! Out-of-range values are rejected here, before any raster is allocated.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// Integer downsampling factor for thumbnails and tile mosaics (1 to 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Scale(u32);

impl Scale {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 8;

    /// Validate a scale factor.
    pub fn new(value: u32) -> Result<Self, ParamError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ParamError::ScaleOutOfRange(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Scale {
    type Error = ParamError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Scale> for u32 {
    fn from(scale: Scale) -> Self {
        scale.0
    }
}

/// Target max sample value of a grayscale reduction (1 to 65535).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GrayMax(u32);

impl GrayMax {
    pub const MIN: u32 = 1;
    /// Exclusive upper bound.
    pub const LIMIT: u32 = 65536;

    /// Validate a grayscale max.
    pub fn new(value: u32) -> Result<Self, ParamError> {
        if !(Self::MIN..Self::LIMIT).contains(&value) {
            return Err(ParamError::GrayMaxOutOfRange(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for GrayMax {
    type Error = ParamError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GrayMax> for u32 {
    fn from(max: GrayMax) -> Self {
        max.0
    }
}
