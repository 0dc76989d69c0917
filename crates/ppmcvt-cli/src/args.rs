//! Command-line argument definitions and transform selection

use clap::Parser;
use std::path::PathBuf;

use ppmcvt_core::{ParamError, Transform, TransformBuilder};

/// Convert and transform PPM images. Exactly one transform flag is required.
#[derive(Debug, Parser)]
#[command(name = "ppmcvt", version, about)]
pub struct Args {
    /// Convert to a bitmap (PBM)
    #[arg(short = 'b')]
    pub bitmap: bool,

    /// Convert to a grayscale image (PGM) with the given max value (1-65535)
    #[arg(short = 'g', value_name = "MAX")]
    pub grayscale: Option<u32>,

    /// Keep only the given channel (red, green or blue)
    #[arg(short = 'i', value_name = "CHANNEL")]
    pub isolate: Option<String>,

    /// Zero the given channel (red, green or blue)
    #[arg(short = 'r', value_name = "CHANNEL")]
    pub remove: Option<String>,

    /// Apply a sepia tone
    #[arg(short = 's')]
    pub sepia: bool,

    /// Mirror the image left to right
    #[arg(short = 'm')]
    pub mirror: bool,

    /// Shrink by the given factor (1-8)
    #[arg(short = 't', value_name = "SCALE")]
    pub thumbnail: Option<u32>,

    /// Tile SCALE x SCALE thumbnails of the given factor (1-8)
    #[arg(short = 'n', value_name = "SCALE")]
    pub tile: Option<u32>,

    /// Output file
    #[arg(short = 'o', value_name = "FILE")]
    pub output: PathBuf,

    /// Input PPM file
    pub input: PathBuf,
}

impl Args {
    /// Build the single requested transform.
    ///
    /// Conflicts are detected before a flag's parameter is validated, and
    /// both happen before any input is read.
    pub fn transform(&self) -> Result<Transform, ParamError> {
        let mut builder = TransformBuilder::new();
        if self.bitmap {
            builder.select(Transform::Bitmap)?;
        }
        if let Some(max) = self.grayscale {
            builder.select_with("grayscale", || Transform::grayscale(max))?;
        }
        if let Some(channel) = &self.isolate {
            builder.select_with("isolate", || Transform::isolate(channel))?;
        }
        if let Some(channel) = &self.remove {
            builder.select_with("remove", || Transform::remove(channel))?;
        }
        if self.sepia {
            builder.select(Transform::Sepia)?;
        }
        if self.mirror {
            builder.select(Transform::Mirror)?;
        }
        if let Some(scale) = self.thumbnail {
            builder.select_with("thumbnail", || Transform::thumbnail(scale))?;
        }
        if let Some(scale) = self.tile {
            builder.select_with("tile", || Transform::tile(scale))?;
        }
        builder.build()
    }
}
