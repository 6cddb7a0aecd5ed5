//! Pin list loading and validation.

use camino::Utf8Path;
use geo::Coord;
use oppmap_core::Pin;
use serde::Deserialize;

use crate::error::CliError;

/// One pin record as exported by the marketplace's listing API.
#[derive(Debug, Deserialize)]
struct PinRecord {
    lat: f64,
    lng: f64,
    name: String,
    #[serde(default)]
    rating: Option<f32>,
    #[serde(default)]
    source: Option<String>,
}

/// Load a JSON array of pins and validate each record.
///
/// Records pass through [`Pin::new`], so malformed coordinates are rejected
/// with the offending array index.
pub(crate) fn load(path: &Utf8Path) -> Result<Vec<Pin>, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::ReadPins {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<PinRecord> =
        serde_json::from_str(&raw).map_err(|source| CliError::ParsePins {
            path: path.to_path_buf(),
            source,
        })?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let location = Coord {
                x: record.lng,
                y: record.lat,
            };
            let mut pin =
                Pin::new(location, record.name).map_err(|source| CliError::InvalidPin {
                    index,
                    path: path.to_path_buf(),
                    source,
                })?;
            if let Some(rating) = record.rating {
                pin = pin.with_rating(rating);
            }
            if let Some(source) = record.source {
                pin = pin.with_source(source);
            }
            Ok(pin)
        })
        .collect()
}
