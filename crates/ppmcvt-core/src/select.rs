//! Transform selection: exactly one transform per invocation.
//!
//! A [`Transform`] names one operation together with its validated
//! parameters. [`TransformBuilder`] enforces that only one is chosen, and
//! [`Transform::apply`] dispatches to the transform engine and reports which
//! raster kind came out so the caller can pick the matching encoder.
//!
//! # JSON form
//!
//! Transforms serialize with lowercase tags:
//!
//! ```json
//! "sepia"
//! {"grayscale": 255}
//! {"isolate": "red"}
//! {"tile": 3}
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ParamError, RasterError};
use crate::raster::{BitRaster, Channel, ColorRaster, GrayRaster, Raster};
use crate::transform::{self, GrayMax, Scale};

/// One transform with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    /// Threshold to a bit raster.
    Bitmap,
    /// Reduce to grayscale with the given max.
    Grayscale(GrayMax),
    /// Keep one channel, zero the others.
    Isolate(Channel),
    /// Zero one channel, keep the others.
    Remove(Channel),
    /// Sepia tone mapping.
    Sepia,
    /// Horizontal mirror.
    Mirror,
    /// Nearest-neighbor thumbnail.
    Thumbnail(Scale),
    /// Tiled thumbnail mosaic.
    Tile(Scale),
}

impl Transform {
    /// Grayscale reduction to `max_gray`, validated.
    pub fn grayscale(max_gray: u32) -> Result<Self, ParamError> {
        Ok(Transform::Grayscale(GrayMax::new(max_gray)?))
    }

    /// Channel isolation by name (`red`, `green` or `blue`).
    pub fn isolate(channel: &str) -> Result<Self, ParamError> {
        Ok(Transform::Isolate(channel.parse()?))
    }

    /// Channel removal by name (`red`, `green` or `blue`).
    pub fn remove(channel: &str) -> Result<Self, ParamError> {
        Ok(Transform::Remove(channel.parse()?))
    }

    /// Thumbnail with a validated scale.
    pub fn thumbnail(scale: u32) -> Result<Self, ParamError> {
        Ok(Transform::Thumbnail(Scale::new(scale)?))
    }

    /// Tile mosaic with a validated scale.
    pub fn tile(scale: u32) -> Result<Self, ParamError> {
        Ok(Transform::Tile(Scale::new(scale)?))
    }

    /// Short operation name.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Bitmap => "bitmap",
            Transform::Grayscale(_) => "grayscale",
            Transform::Isolate(_) => "isolate",
            Transform::Remove(_) => "remove",
            Transform::Sepia => "sepia",
            Transform::Mirror => "mirror",
            Transform::Thumbnail(_) => "thumbnail",
            Transform::Tile(_) => "tile",
        }
    }

    /// Kind of raster this transform produces.
    pub fn output_kind(&self) -> OutputKind {
        match self {
            Transform::Bitmap => OutputKind::Bit,
            Transform::Grayscale(_) => OutputKind::Gray,
            _ => OutputKind::Color,
        }
    }

    /// Run the transform on `image`.
    ///
    /// # Errors
    ///
    /// Whatever the underlying transform reports; the input is never modified.
    pub fn apply(&self, image: &ColorRaster) -> Result<Output, RasterError> {
        debug!(
            "applying {} to {}x{} raster (max {})",
            self.name(),
            image.width(),
            image.height(),
            image.max_value()
        );

        let output = match *self {
            Transform::Bitmap => Output::Bit(transform::to_bitmap(image)?),
            Transform::Grayscale(max) => {
                Output::Gray(transform::to_grayscale(image, max.get())?)
            }
            Transform::Isolate(channel) => {
                Output::Color(transform::isolate_channel(image, channel)?)
            }
            Transform::Remove(channel) => {
                Output::Color(transform::remove_channel(image, channel)?)
            }
            Transform::Sepia => Output::Color(transform::apply_sepia(image)?),
            Transform::Mirror => Output::Color(transform::mirror_horizontal(image)?),
            Transform::Thumbnail(scale) => {
                Output::Color(transform::thumbnail(image, scale.get())?)
            }
            Transform::Tile(scale) => {
                Output::Color(transform::tile_thumbnails(image, scale.get())?)
            }
        };

        debug!(
            "{} produced {:?} raster {}x{}",
            self.name(),
            output.kind(),
            output.width(),
            output.height()
        );
        Ok(output)
    }
}

/// Accumulates at most one transform selection.
#[derive(Debug, Clone, Default)]
pub struct TransformBuilder {
    selected: Option<Transform>,
}

impl TransformBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `transform`.
    ///
    /// # Errors
    ///
    /// `ConflictingTransform` if a transform was already selected. The
    /// earlier selection is kept.
    pub fn select(&mut self, transform: Transform) -> Result<&mut Self, ParamError> {
        if let Some(existing) = self.selected {
            return Err(ParamError::ConflictingTransform {
                existing: existing.name(),
                requested: transform.name(),
            });
        }
        self.selected = Some(transform);
        Ok(self)
    }

    /// Select the transform named `name`, built by `make` only when the
    /// builder is still empty.
    ///
    /// A conflict is reported before `make` runs, so a second flag's
    /// parameter is never validated.
    ///
    /// # Errors
    ///
    /// `ConflictingTransform` if a transform was already selected, otherwise
    /// whatever `make` returns.
    pub fn select_with<F>(&mut self, name: &'static str, make: F) -> Result<&mut Self, ParamError>
    where
        F: FnOnce() -> Result<Transform, ParamError>,
    {
        if let Some(existing) = self.selected {
            return Err(ParamError::ConflictingTransform {
                existing: existing.name(),
                requested: name,
            });
        }
        self.select(make()?)
    }

    /// The current selection, if any.
    pub fn selected(&self) -> Option<Transform> {
        self.selected
    }

    /// Finish selection.
    ///
    /// # Errors
    ///
    /// `NoTransform` if nothing was selected.
    pub fn build(&self) -> Result<Transform, ParamError> {
        self.selected.ok_or(ParamError::NoTransform)
    }
}

/// Raster kinds a transform can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Color,
    Gray,
    Bit,
}

/// Result of [`Transform::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Color(ColorRaster),
    Gray(GrayRaster),
    Bit(BitRaster),
}

impl Output {
    pub fn kind(&self) -> OutputKind {
        match self {
            Output::Color(_) => OutputKind::Color,
            Output::Gray(_) => OutputKind::Gray,
            Output::Bit(_) => OutputKind::Bit,
        }
    }

    pub fn into_color(self) -> Option<ColorRaster> {
        match self {
            Output::Color(raster) => Some(raster),
            _ => None,
        }
    }

    pub fn into_gray(self) -> Option<GrayRaster> {
        match self {
            Output::Gray(raster) => Some(raster),
            _ => None,
        }
    }

    pub fn into_bit(self) -> Option<BitRaster> {
        match self {
            Output::Bit(raster) => Some(raster),
            _ => None,
        }
    }
}

impl Raster for Output {
    fn width(&self) -> u32 {
        match self {
            Output::Color(r) => r.width(),
            Output::Gray(r) => r.width(),
            Output::Bit(r) => r.width(),
        }
    }

    fn height(&self) -> u32 {
        match self {
            Output::Color(r) => r.height(),
            Output::Gray(r) => r.height(),
            Output::Bit(r) => r.height(),
        }
    }

    fn max_value(&self) -> u16 {
        match self {
            Output::Color(r) => r.max_value(),
            Output::Gray(r) => r.max_value(),
            Output::Bit(r) => r.max_value(),
        }
    }
}
