//! Error taxonomy for the oppmap CLI.

use camino::Utf8PathBuf;
use oppmap_core::{GridConfigError, PinError};
use thiserror::Error;

/// Errors emitted by the oppmap CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The pin list could not be read from disk.
    #[error("failed to read pins from {path}: {source}")]
    ReadPins {
        /// Location of the pin list.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The pin list was not valid JSON.
    #[error("failed to parse pins from {path}: {source}")]
    ParsePins {
        /// Location of the pin list.
        path: Utf8PathBuf,
        /// Decoder error returned by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A pin record failed coordinate validation.
    #[error("pin {index} in {path} is invalid: {source}")]
    InvalidPin {
        /// Zero-based position of the record in the pin list.
        index: usize,
        /// Location of the pin list.
        path: Utf8PathBuf,
        /// Validation failure from the core domain type.
        #[source]
        source: PinError,
    },
    /// The map center failed coordinate validation.
    #[error("invalid map center: {source}")]
    InvalidCenter {
        /// Validation failure from the core domain type.
        #[source]
        source: PinError,
    },
    /// The grid configuration was rejected.
    #[error("invalid grid configuration: {source}")]
    InvalidGrid {
        /// Validation failure from the grid configuration.
        #[source]
        source: GridConfigError,
    },
    /// The overlay could not be serialised.
    #[error("failed to serialise overlay: {source}")]
    Serialise {
        /// Encoder error returned by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The overlay could not be written to the output path.
    #[error("failed to write overlay to {path}: {source}")]
    WriteOutput {
        /// Destination file path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The overlay could not be written to stdout.
    #[error("failed to write overlay to stdout: {source}")]
    WriteStdout {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
