//! Command-line interface producing opportunity map overlays.
//!
//! The `oppmap` binary turns a JSON pin list into the GeoJSON documents the
//! map layer renders: a scored choropleth grid (`score`) and the
//! competitor-exclusion discs around each pin (`zones`).

#![forbid(unsafe_code)]

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use geo::Coord;
use oppmap_core::{GridConfig, score_grid, validate_location};

mod error;
mod overlay;
mod pins;

pub use error::CliError;

/// Install the logger backing the crate's `log` macros.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Logs go to stderr so
/// overlays written to stdout stay clean. Safe to call more than once; later
/// calls keep the first logger.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Run the oppmap CLI with the current process arguments.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, pin loading, scoring
/// configuration, or output writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(&args),
        Command::Zones(args) => run_zones(&args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "oppmap",
    about = "Overlay tooling for the opportunity map",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score the opportunity grid around a map center.
    Score(ScoreArgs),
    /// Ring each pin with its competitor-exclusion zone.
    Zones(ZonesArgs),
}

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser)]
struct ScoreArgs {
    /// Path to the JSON pin list.
    #[arg(long, value_name = "path")]
    pins: Utf8PathBuf,
    /// Latitude of the map center in decimal degrees.
    #[arg(long, value_name = "degrees", allow_hyphen_values = true)]
    center_lat: f64,
    /// Longitude of the map center in decimal degrees.
    #[arg(long, value_name = "degrees", allow_hyphen_values = true)]
    center_lng: f64,
    /// Cells per grid side; defaults to 10.
    #[arg(long, value_name = "cells")]
    resolution: Option<usize>,
    /// Output path for the GeoJSON overlay; stdout when omitted.
    #[arg(long, value_name = "path")]
    out: Option<Utf8PathBuf>,
}

/// CLI arguments for the `zones` subcommand.
#[derive(Debug, Clone, Parser)]
struct ZonesArgs {
    /// Path to the JSON pin list.
    #[arg(long, value_name = "path")]
    pins: Utf8PathBuf,
    /// Output path for the GeoJSON overlay; stdout when omitted.
    #[arg(long, value_name = "path")]
    out: Option<Utf8PathBuf>,
}

fn run_score(args: &ScoreArgs) -> Result<(), CliError> {
    let pins = pins::load(&args.pins)?;
    let center = Coord {
        x: args.center_lng,
        y: args.center_lat,
    };
    validate_location(center).map_err(|source| CliError::InvalidCenter { source })?;
    let config = match args.resolution {
        Some(resolution) => GridConfig::with_resolution(resolution)
            .map_err(|source| CliError::InvalidGrid { source })?,
        None => GridConfig::default(),
    };
    let cells = score_grid(&pins, center, &config);
    log::info!("scored {} cells against {} pins", cells.len(), pins.len());
    write_output(args.out.as_deref(), &overlay::cells(&cells, &config))
}

fn run_zones(args: &ZonesArgs) -> Result<(), CliError> {
    let pins = pins::load(&args.pins)?;
    log::info!("ringing exclusion zones for {} pins", pins.len());
    write_output(args.out.as_deref(), &overlay::zones(&pins))
}

fn write_output(
    out: Option<&Utf8Path>,
    collection: &overlay::FeatureCollection,
) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(collection)
        .map_err(|source| CliError::Serialise { source })?;
    match out {
        Some(path) => {
            std::fs::write(path, &json).map_err(|source| CliError::WriteOutput {
                path: path.to_path_buf(),
                source,
            })?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")
                .map_err(|source| CliError::WriteStdout { source })?;
        }
    }
    Ok(())
}
