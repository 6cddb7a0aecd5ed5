//! GeoJSON overlay documents consumed by the map layer.
//!
//! The map renders two overlays: a choropleth of scored grid cells and the
//! exclusion discs around competitor pins. Both serialise as GeoJSON
//! `FeatureCollection` documents of polygon features.

use geo::LineString;
use oppmap_core::{GridCell, GridConfig, Pin, cell_ring, exclusion_zone};
use serde::Serialize;
use serde_json::{Value, json};

/// A GeoJSON feature collection.
#[derive(Debug, Serialize)]
pub struct FeatureCollection {
    /// Always `"FeatureCollection"`.
    #[serde(rename = "type")]
    kind: &'static str,
    /// Member features.
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: Geometry,
    properties: Value,
}

#[derive(Debug, Serialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: Vec<Vec<[f64; 2]>>,
}

fn polygon(ring: &LineString, properties: Value) -> Feature {
    Feature {
        kind: "Feature",
        geometry: Geometry {
            kind: "Polygon",
            coordinates: vec![ring.coords().map(|c| [c.x, c.y]).collect()],
        },
        properties,
    }
}

/// Build the choropleth overlay from scored grid cells.
///
/// An infinite nearest-pin distance (no pins supplied) serialises as `null`.
pub(crate) fn cells(cells: &[GridCell], config: &GridConfig) -> FeatureCollection {
    let features = cells
        .iter()
        .map(|cell| {
            polygon(
                &cell_ring(cell, config),
                json!({
                    "score": cell.score,
                    "nearestCompetitorMiles": cell.nearest_competitor_miles,
                    "inCompetitorZone": cell.in_competitor_zone,
                }),
            )
        })
        .collect();
    FeatureCollection {
        kind: "FeatureCollection",
        features,
    }
}

/// Build the exclusion-zone overlay, one disc per pin.
pub(crate) fn zones(pins: &[Pin]) -> FeatureCollection {
    let features = pins
        .iter()
        .map(|pin| {
            polygon(
                &exclusion_zone(pin.location),
                json!({
                    "name": &pin.name,
                    "rating": pin.rating,
                    "source": &pin.source,
                }),
            )
        })
        .collect();
    FeatureCollection {
        kind: "FeatureCollection",
        features,
    }
}
