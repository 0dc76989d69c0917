//! ppmcvt - PPM image converter
//!
//! Reads one PPM image, applies exactly one transform and writes the result
//! as PPM, PGM or PBM depending on the transform.
//! Pipeline: parse flags -> select transform -> decode -> transform -> encode

mod args;

use args::Args;
use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;
use thiserror::Error;

use ppmcvt_core::decode::{read_color, DecodeError};
use ppmcvt_core::encode::{write_output, EncodeError};
use ppmcvt_core::{ParamError, Raster, RasterError};

/// Everything that can stop a conversion.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Param(#[from] ParamError),

    #[error("Error reading input file: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Transform(#[from] RasterError),

    #[error("Error writing output file: {0}")]
    Encode(#[from] EncodeError),
}

fn run(args: &Args) -> Result<(), CliError> {
    // Reject bad or conflicting flags before touching the input
    let transform = args.transform()?;
    debug!("selected transform: {transform:?}");

    let input = read_color(&args.input)?;
    info!(
        "read {} ({}x{}, max {})",
        args.input.display(),
        input.width(),
        input.height(),
        input.max_value()
    );

    let output = transform.apply(&input)?;
    write_output(&output, &args.output)?;
    info!(
        "wrote {} ({}x{}, {:?})",
        args.output.display(),
        output.width(),
        output.height(),
        output.kind()
    );

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
