//! The three raster kinds and the color channel selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::plane::Plane;
use crate::error::{ParamError, RasterError};

/// Largest max sample value any raster may declare.
pub const MAX_SAMPLE_VALUE: u32 = 65535;

/// One color component of a [`ColorRaster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in plane order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Plane index (0 = red, 1 = green, 2 = blue).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Lowercase channel name as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = ParamError;

    /// Parses exactly `red`, `green` or `blue`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Channel::Red),
            "green" => Ok(Channel::Green),
            "blue" => Ok(Channel::Blue),
            other => Err(ParamError::UnknownChannel(other.to_string())),
        }
    }
}

/// Validate a declared max sample value (1..=65535).
pub(crate) fn validate_max(max: u32) -> Result<u16, ParamError> {
    if max == 0 || max > MAX_SAMPLE_VALUE {
        return Err(ParamError::MaxValueOutOfRange(max));
    }
    Ok(max as u16)
}

fn allocation_failure(width: u32, height: u32, planes: usize) -> RasterError {
    RasterError::AllocationFailure {
        width,
        height,
        planes,
    }
}

fn sample_mismatch(width: u32, height: u32, actual: usize) -> RasterError {
    ParamError::SampleCountMismatch {
        expected: width as usize * height as usize,
        actual,
    }
    .into()
}

/// Full-color raster: three independent planes sharing one max value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRaster {
    width: u32,
    height: u32,
    max: u16,
    planes: [Plane; 3],
}

impl ColorRaster {
    /// Allocate a zero-filled color raster.
    ///
    /// Either all three planes are allocated or none are: a failure on a
    /// later plane drops the earlier ones before the error is returned.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `max` is outside 1..=65535
    /// - `AllocationFailure` if any plane cannot be allocated
    pub fn new(width: u32, height: u32, max: u32) -> Result<Self, RasterError> {
        let max = validate_max(max)?;
        let red = Plane::zeroed(width, height)
            .ok_or_else(|| allocation_failure(width, height, 3))?;
        let green = Plane::zeroed(width, height)
            .ok_or_else(|| allocation_failure(width, height, 3))?;
        let blue = Plane::zeroed(width, height)
            .ok_or_else(|| allocation_failure(width, height, 3))?;
        Ok(Self {
            width,
            height,
            max,
            planes: [red, green, blue],
        })
    }

    /// Build a raster from existing red, green and blue buffers.
    ///
    /// Samples above `max` are clamped.
    pub fn from_planes(
        width: u32,
        height: u32,
        max: u32,
        planes: [Vec<u16>; 3],
    ) -> Result<Self, RasterError> {
        let max = validate_max(max)?;
        let [r, g, b] = planes;
        let lens = [r.len(), g.len(), b.len()];
        let build = |samples: Vec<u16>, len: usize| {
            Plane::from_samples(width, height, samples, max)
                .ok_or_else(|| sample_mismatch(width, height, len))
        };
        let red = build(r, lens[0])?;
        let green = build(g, lens[1])?;
        let blue = build(b, lens[2])?;
        Ok(Self {
            width,
            height,
            max,
            planes: [red, green, blue],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maximum sample value of every channel.
    #[inline]
    pub fn max_value(&self) -> u16 {
        self.max
    }

    /// Sample of `channel` at `(x, y)`.
    #[inline]
    pub fn get(&self, channel: Channel, x: u32, y: u32) -> u16 {
        self.planes[channel.index()].get(x, y)
    }

    /// Store a sample, clamping it to the raster's max.
    #[inline]
    pub fn set(&mut self, channel: Channel, x: u32, y: u32, value: u32) {
        let value = value.min(self.max as u32) as u16;
        self.planes[channel.index()].set(x, y, value);
    }

    /// `[red, green, blue]` at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u16; 3] {
        [
            self.planes[0].get(x, y),
            self.planes[1].get(x, y),
            self.planes[2].get(x, y),
        ]
    }

    /// Store a `[red, green, blue]` triple, clamping each sample.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u32; 3]) {
        for channel in Channel::ALL {
            self.set(channel, x, y, rgb[channel.index()]);
        }
    }

    pub fn plane(&self, channel: Channel) -> &Plane {
        &self.planes[channel.index()]
    }

    pub(crate) fn plane_mut(&mut self, channel: Channel) -> &mut Plane {
        &mut self.planes[channel.index()]
    }

    pub fn planes(&self) -> &[Plane; 3] {
        &self.planes
    }
}

/// Single-plane grayscale raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayRaster {
    width: u32,
    height: u32,
    max: u16,
    plane: Plane,
}

impl GrayRaster {
    /// Allocate a zero-filled grayscale raster.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `max` is outside 1..=65535
    /// - `AllocationFailure` if the plane cannot be allocated
    pub fn new(width: u32, height: u32, max: u32) -> Result<Self, RasterError> {
        let max = validate_max(max)?;
        let plane = Plane::zeroed(width, height)
            .ok_or_else(|| allocation_failure(width, height, 1))?;
        Ok(Self {
            width,
            height,
            max,
            plane,
        })
    }

    /// Build a raster from an existing buffer. Samples above `max` are clamped.
    pub fn from_samples(
        width: u32,
        height: u32,
        max: u32,
        samples: Vec<u16>,
    ) -> Result<Self, RasterError> {
        let max = validate_max(max)?;
        let len = samples.len();
        let plane = Plane::from_samples(width, height, samples, max)
            .ok_or_else(|| sample_mismatch(width, height, len))?;
        Ok(Self {
            width,
            height,
            max,
            plane,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn max_value(&self) -> u16 {
        self.max
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u16 {
        self.plane.get(x, y)
    }

    /// Store a sample, clamping it to the raster's max.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u32) {
        let value = value.min(self.max as u32) as u16;
        self.plane.set(x, y, value);
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }
}

/// Single-plane bitonal raster. Samples are 0 or 1; 1 is ink (black).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitRaster {
    width: u32,
    height: u32,
    plane: Plane,
}

impl BitRaster {
    /// Allocate an all-zero bit raster.
    ///
    /// # Errors
    ///
    /// `AllocationFailure` if the plane cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let plane = Plane::zeroed(width, height)
            .ok_or_else(|| allocation_failure(width, height, 1))?;
        Ok(Self {
            width,
            height,
            plane,
        })
    }

    /// Build a raster from existing samples; any non-zero sample becomes 1.
    pub fn from_samples(width: u32, height: u32, samples: Vec<u16>) -> Result<Self, RasterError> {
        let len = samples.len();
        let plane = Plane::from_samples(width, height, samples, 1)
            .ok_or_else(|| sample_mismatch(width, height, len))?;
        Ok(Self {
            width,
            height,
            plane,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Always 1.
    #[inline]
    pub fn max_value(&self) -> u16 {
        1
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u16 {
        self.plane.get(x, y)
    }

    #[inline]
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.plane.get(x, y) != 0
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, bit: bool) {
        self.plane.set(x, y, bit as u16);
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_from_str() {
        assert_eq!("red".parse::<Channel>(), Ok(Channel::Red));
        assert_eq!("green".parse::<Channel>(), Ok(Channel::Green));
        assert_eq!("blue".parse::<Channel>(), Ok(Channel::Blue));
        assert_eq!(
            "purple".parse::<Channel>(),
            Err(ParamError::UnknownChannel("purple".to_string()))
        );
        // Names are case sensitive
        assert!("Red".parse::<Channel>().is_err());
    }

    #[test]
    fn test_channel_display_round_trips() {
        for channel in Channel::ALL {
            assert_eq!(channel.to_string().parse::<Channel>(), Ok(channel));
        }
    }

    #[test]
    fn test_color_raster_creation() {
        let raster = ColorRaster::new(5, 3, 255).unwrap();
        assert_eq!(raster.width(), 5);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.max_value(), 255);
        for plane in raster.planes() {
            assert_eq!(plane.as_slice().len(), 15);
            assert!(plane.is_zero());
        }
    }

    #[test]
    fn test_color_raster_rejects_bad_max() {
        assert_eq!(
            ColorRaster::new(2, 2, 0),
            Err(RasterError::InvalidParameter(ParamError::MaxValueOutOfRange(0)))
        );
        assert!(ColorRaster::new(2, 2, 65536).is_err());
        assert!(ColorRaster::new(2, 2, 65535).is_ok());
    }

    #[test]
    fn test_allocation_failure_is_reported() {
        assert_eq!(
            ColorRaster::new(u32::MAX, u32::MAX, 255),
            Err(RasterError::AllocationFailure {
                width: u32::MAX,
                height: u32::MAX,
                planes: 3
            })
        );
        assert!(matches!(
            GrayRaster::new(u32::MAX, u32::MAX, 255),
            Err(RasterError::AllocationFailure { planes: 1, .. })
        ));
        assert!(matches!(
            BitRaster::new(u32::MAX, u32::MAX),
            Err(RasterError::AllocationFailure { planes: 1, .. })
        ));
    }

    #[test]
    fn test_color_set_clamps_to_max() {
        let mut raster = ColorRaster::new(2, 2, 100).unwrap();
        raster.set(Channel::Green, 1, 1, 500);
        assert_eq!(raster.get(Channel::Green, 1, 1), 100);
        raster.set_pixel(0, 1, [10, 20, 1000]);
        assert_eq!(raster.pixel(0, 1), [10, 20, 100]);
    }

    #[test]
    fn test_color_from_planes() {
        let planes = [vec![1, 2], vec![3, 4], vec![5, 50]];
        let raster = ColorRaster::from_planes(2, 1, 10, planes).unwrap();
        assert_eq!(raster.pixel(0, 0), [1, 3, 5]);
        assert_eq!(raster.pixel(1, 0), [2, 4, 10]);
    }

    #[test]
    fn test_color_from_planes_rejects_jagged() {
        let planes = [vec![0; 4], vec![0; 3], vec![0; 4]];
        let err = ColorRaster::from_planes(2, 2, 10, planes).unwrap_err();
        assert_eq!(
            err,
            RasterError::InvalidParameter(ParamError::SampleCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_gray_raster() {
        let mut raster = GrayRaster::new(3, 2, 15).unwrap();
        raster.set(2, 1, 9);
        raster.set(0, 0, 99);
        assert_eq!(raster.get(2, 1), 9);
        assert_eq!(raster.get(0, 0), 15);
        assert_eq!(raster.max_value(), 15);
    }

    #[test]
    fn test_bit_raster() {
        let mut raster = BitRaster::new(4, 1).unwrap();
        raster.set(3, 0, true);
        assert!(raster.is_set(3, 0));
        assert!(!raster.is_set(0, 0));
        assert_eq!(raster.get(3, 0), 1);
        assert_eq!(raster.max_value(), 1);
    }

    #[test]
    fn test_bit_from_samples_normalizes() {
        let raster = BitRaster::from_samples(3, 1, vec![0, 7, 1]).unwrap();
        assert_eq!(raster.plane().as_slice(), &[0, 1, 1]);
    }
}
